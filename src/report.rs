//! Renders one analysis outcome as a localized plain-text report.

use crate::i18n::{strings, ResultLanguage, Strings};
use crate::mapper::{AnalysisResult, ExplanationData, Highlight, HighlightTag, RiskLevel, SpeakerType};

fn yes_no(value: bool, t: &Strings) -> &str {
    if value {
        t.yes
    } else {
        t.no
    }
}

fn speaker_label(speaker: SpeakerType, t: &Strings) -> &str {
    match speaker {
        SpeakerType::AiGenerated => t.ai_generated,
        SpeakerType::Human => t.human,
    }
}

fn risk_label(risk: RiskLevel, t: &Strings) -> &str {
    match risk {
        RiskLevel::Low => t.low,
        RiskLevel::Medium => t.medium,
        RiskLevel::High => t.high,
    }
}

fn tag_label(tag: HighlightTag, t: &Strings) -> &str {
    match tag {
        HighlightTag::Urgency => t.urgency,
        HighlightTag::PaymentRequest => t.payment_request,
        HighlightTag::Threat => t.threat,
        HighlightTag::SuspiciousClaim => t.suspicious_claim,
    }
}

/// Render the result summary, explanation block, and highlights (when any)
/// with every label drawn from the selected locale's bundle.
pub fn render(
    result: &AnalysisResult,
    explanation: &ExplanationData,
    highlights: &[Highlight],
    lang: ResultLanguage,
) -> String {
    let t = strings(lang);
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n", t.ai_analysis));
    out.push_str(&format!("{}\n", t.safety_intelligence));
    out.push_str(&format!("{}: {}\n\n", t.result_language, lang.as_str()));

    out.push_str(&format!("{}: {}\n", t.speaker_type, speaker_label(result.speaker_type, t)));
    out.push_str(&format!("{}: {}\n", t.detected_language, result.detected_language));
    out.push_str(&format!("{}: {}\n", t.scam_detected, yes_no(result.scam_detected, t)));
    out.push_str(&format!("{}: {}\n\n", t.risk_level, risk_label(result.risk_level, t)));

    out.push_str(&format!("{}: {}\n\n", t.scam_type, explanation.scam_type));
    out.push_str(&format!("{}:\n{}\n\n", t.why_this_is_a_scam, explanation.reason));
    out.push_str(&format!("{}:\n{}\n\n", t.how_to_avoid_it, explanation.prevention));
    out.push_str(&format!("{}:\n{}\n", t.consequences_if_ignored, explanation.consequences));

    if !highlights.is_empty() {
        out.push_str(&format!("\n{}\n{}\n", t.important_highlights, t.key_phrases_flagged));
        for highlight in highlights {
            out.push_str(&format!(
                "  \"{}\"  [{}]\n",
                highlight.quote,
                tag_label(highlight.tag, t)
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::{map_highlights, map_to_explanation, map_to_result};
    use serde_json::json;

    #[test]
    fn test_report_uses_selected_locale_labels() {
        let payload = json!({"scam_detected": true, "risk_level": "High"});
        let result = map_to_result(&payload);
        let explanation = map_to_explanation(&payload, ResultLanguage::Hindi);
        let report = render(&result, &explanation, &[], ResultLanguage::Hindi);
        let hi = strings(ResultLanguage::Hindi);
        assert!(report.contains(hi.risk_level));
        assert!(report.contains(hi.high));
        assert!(report.contains(hi.yes));
        assert!(!report.contains("Risk Level"));
    }

    #[test]
    fn test_highlights_section_only_when_present() {
        let payload = json!({});
        let result = map_to_result(&payload);
        let explanation = map_to_explanation(&payload, ResultLanguage::Auto);
        let en = strings(ResultLanguage::Auto);

        let without = render(&result, &explanation, &[], ResultLanguage::Auto);
        assert!(!without.contains(en.important_highlights));

        let highlights = map_highlights(&json!({"highlights": [
            {"quote": "act now", "tag": "Urgency"},
        ]}));
        let with = render(&result, &explanation, &highlights, ResultLanguage::Auto);
        assert!(with.contains(en.important_highlights));
        assert!(with.contains("act now"));
        assert!(with.contains(en.urgency));
    }
}
