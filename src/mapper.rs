//! Pure mapping from raw backend JSON into report view models.
//!
//! Total over any JSON shape: no field is required to be present, absent or
//! malformed fields degrade to documented defaults.

use serde_json::Value;

use crate::i18n::{strings, ResultLanguage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeakerType {
    AiGenerated,
    Human,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Structured result summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub speaker_type: SpeakerType,
    pub detected_language: String,
    pub scam_detected: bool,
    pub risk_level: RiskLevel,
}

/// Free-text explanation block; each field falls back to locale copy when
/// the backend omits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationData {
    pub scam_type: String,
    pub reason: String,
    pub prevention: String,
    pub consequences: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightTag {
    Urgency,
    PaymentRequest,
    Threat,
    SuspiciousClaim,
}

/// A quoted excerpt flagged with a risk category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub quote: String,
    pub tag: HighlightTag,
}

/// Non-empty trimmed string field, if present.
fn str_field<'a>(payload: &'a Value, key: &str) -> Option<&'a str> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn bool_field(payload: &Value, key: &str) -> bool {
    payload.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// Map the backend payload to the result summary. Never fails: `Human`
/// speaker, `Unknown` language, `false` scam flag, and `Low` risk are the
/// defaults for absent or out-of-domain fields.
pub fn map_to_result(payload: &Value) -> AnalysisResult {
    let speaker_type = match str_field(payload, "speaker_type") {
        Some(s) if s.eq_ignore_ascii_case("AI") => SpeakerType::AiGenerated,
        _ => SpeakerType::Human,
    };
    let risk_level = match str_field(payload, "risk_level") {
        Some("High") => RiskLevel::High,
        Some("Medium") => RiskLevel::Medium,
        _ => RiskLevel::Low,
    };
    AnalysisResult {
        speaker_type,
        detected_language: str_field(payload, "language").unwrap_or("Unknown").to_string(),
        scam_detected: bool_field(payload, "scam_detected"),
        risk_level,
    }
}

/// Map the backend payload to the explanation block, substituting
/// locale-specific copy for missing fields. The `scam_type` and
/// `consequences` defaults branch on the payload's `scam_detected` flag.
pub fn map_to_explanation(payload: &Value, lang: ResultLanguage) -> ExplanationData {
    let t = strings(lang);
    let scam = bool_field(payload, "scam_detected");
    ExplanationData {
        scam_type: if scam {
            t.safety_analysis_see_explanation
        } else {
            t.no_scam_indicators
        }
        .to_string(),
        reason: str_field(payload, "explanation")
            .unwrap_or(t.no_explanation_provided)
            .to_string(),
        prevention: str_field(payload, "how_to_avoid")
            .unwrap_or(t.review_explanation_above)
            .to_string(),
        consequences: if scam {
            t.ignoring_scam_indicators
        } else {
            t.content_not_flagged
        }
        .to_string(),
    }
}

fn parse_tag(tag: &str) -> HighlightTag {
    let normalized: String = tag
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    match normalized.as_str() {
        "urgency" => HighlightTag::Urgency,
        "paymentrequest" => HighlightTag::PaymentRequest,
        "threat" => HighlightTag::Threat,
        _ => HighlightTag::SuspiciousClaim,
    }
}

/// Ordered highlight sequence; entries without a usable quote are dropped,
/// unrecognized tags fold to `SuspiciousClaim`.
pub fn map_highlights(payload: &Value) -> Vec<Highlight> {
    let Some(items) = payload.get("highlights").and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let quote = str_field(item, "quote")?.to_string();
            let tag = str_field(item, "tag").map(parse_tag).unwrap_or(HighlightTag::SuspiciousClaim);
            Some(Highlight { quote, tag })
        })
        .collect()
}
