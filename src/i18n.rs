//! Report strings in English, Hindi, and Telugu, so results and labels
//! display in the user's selected result language.

/// Language the analysis explanation and report labels are rendered in.
/// `Auto` asks the backend to answer in the input's own language and uses
/// English for local label lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultLanguage {
    #[default]
    Auto,
    English,
    Hindi,
    Telugu,
}

impl ResultLanguage {
    /// Wire value sent to the backend as `response_language`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Telugu => "Telugu",
        }
    }

    /// Case-insensitive parse of a CLI/config value.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "english" | "en" => Some(Self::English),
            "hindi" | "hi" => Some(Self::Hindi),
            "telugu" | "te" => Some(Self::Telugu),
            _ => None,
        }
    }
}

/// One locale's bundle of report labels and fallback copy.
pub struct Strings {
    // Result card labels
    pub speaker_type: &'static str,
    pub detected_language: &'static str,
    pub scam_detected: &'static str,
    pub risk_level: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub high: &'static str,
    pub medium: &'static str,
    pub low: &'static str,
    pub ai_generated: &'static str,
    pub human: &'static str,
    // Explanation section
    pub ai_analysis: &'static str,
    pub safety_intelligence: &'static str,
    pub scam_type: &'static str,
    pub why_this_is_a_scam: &'static str,
    pub how_to_avoid_it: &'static str,
    pub consequences_if_ignored: &'static str,
    // Conversation highlights
    pub important_highlights: &'static str,
    pub key_phrases_flagged: &'static str,
    pub urgency: &'static str,
    pub payment_request: &'static str,
    pub threat: &'static str,
    pub suspicious_claim: &'static str,
    // Fallback copy substituted when the backend omits a field
    pub no_scam_indicators: &'static str,
    pub safety_analysis_see_explanation: &'static str,
    pub no_explanation_provided: &'static str,
    pub review_explanation_above: &'static str,
    pub ignoring_scam_indicators: &'static str,
    pub content_not_flagged: &'static str,
    // Errors
    pub analysis_failed: &'static str,
    pub request_failed: &'static str,
    pub backend_unreachable: &'static str,
    // Report header
    pub result_language: &'static str,
}

static EN: Strings = Strings {
    speaker_type: "Speaker Type",
    detected_language: "Detected Language",
    scam_detected: "Scam Detected",
    risk_level: "Risk Level",
    yes: "Yes",
    no: "No",
    high: "High",
    medium: "Medium",
    low: "Low",
    ai_generated: "AI-Generated",
    human: "Human",
    ai_analysis: "AI Analysis",
    safety_intelligence: "Safety intelligence and prevention advice",
    scam_type: "Scam Type",
    why_this_is_a_scam: "Why This Is a Scam",
    how_to_avoid_it: "How to Avoid It",
    consequences_if_ignored: "Consequences If Ignored",
    important_highlights: "Important Conversation Highlights",
    key_phrases_flagged: "Key phrases flagged during analysis",
    urgency: "Urgency",
    payment_request: "Payment Request",
    threat: "Threat",
    suspicious_claim: "Suspicious Claim",
    no_scam_indicators: "No scam indicators",
    safety_analysis_see_explanation: "Safety analysis (see explanation)",
    no_explanation_provided: "No explanation provided.",
    review_explanation_above: "Review the explanation above for guidance.",
    ignoring_scam_indicators: "Ignoring scam indicators may lead to financial loss or identity theft.",
    content_not_flagged: "Content was not flagged as a scam; general caution still advised.",
    analysis_failed: "Analysis failed",
    request_failed: "Request failed",
    backend_unreachable: "Cannot connect to the analysis backend. Make sure it is running.",
    result_language: "Result language",
};

static HI: Strings = Strings {
    speaker_type: "वक्ता प्रकार",
    detected_language: "पता चली भाषा",
    scam_detected: "स्कैम पाया गया",
    risk_level: "जोखिम स्तर",
    yes: "हाँ",
    no: "नहीं",
    high: "उच्च",
    medium: "मध्यम",
    low: "कम",
    ai_generated: "AI-जनित",
    human: "मानव",
    ai_analysis: "AI विश्लेषण",
    safety_intelligence: "सुरक्षा जानकारी और बचाव सलाह",
    scam_type: "स्कैम प्रकार",
    why_this_is_a_scam: "यह स्कैम क्यों है",
    how_to_avoid_it: "इससे कैसे बचें",
    consequences_if_ignored: "नज़रअंदाज़ करने पर परिणाम",
    important_highlights: "महत्वपूर्ण बातचीत के अंश",
    key_phrases_flagged: "विश्लेषण में चिह्नित मुख्य वाक्यांश",
    urgency: "जल्दबाजी",
    payment_request: "भुगतान का अनुरोध",
    threat: "धमकी",
    suspicious_claim: "संदिग्ध दावा",
    no_scam_indicators: "कोई स्कैम संकेत नहीं",
    safety_analysis_see_explanation: "सुरक्षा विश्लेषण (व्याख्या देखें)",
    no_explanation_provided: "कोई व्याख्या नहीं दी गई।",
    review_explanation_above: "मार्गदर्शन के लिए ऊपर दी गई व्याख्या देखें।",
    ignoring_scam_indicators: "स्कैम संकेतों को नज़रअंदाज़ करने से वित्तीय नुकसान या पहचान की चोरी हो सकती है।",
    content_not_flagged: "सामग्री को स्कैम के रूप में चिह्नित नहीं किया गया; सामान्य सावधानी बरतें।",
    analysis_failed: "विश्लेषण विफल",
    request_failed: "अनुरोध विफल",
    backend_unreachable: "विश्लेषण बैकएंड से कनेक्ट नहीं हो सका। सुनिश्चित करें कि वह चल रहा है।",
    result_language: "परिणाम भाषा",
};

static TE: Strings = Strings {
    speaker_type: "స్పీకర్ రకం",
    detected_language: "గుర్తించిన భాష",
    scam_detected: "స్కామ్ కనిపించింది",
    risk_level: "రిస్క్ స్థాయి",
    yes: "అవును",
    no: "కాదు",
    high: "అధికం",
    medium: "మధ్యమం",
    low: "తక్కువ",
    ai_generated: "AI-జనితం",
    human: "మానవం",
    ai_analysis: "AI విశ్లేషణ",
    safety_intelligence: "భద్రతా సమాచారం మరియు నివారణ సలహా",
    scam_type: "స్కామ్ రకం",
    why_this_is_a_scam: "ఇది స్కామ్ ఎందుకు",
    how_to_avoid_it: "దీన్ని ఎలా తప్పించాలి",
    consequences_if_ignored: "అవజ్ఞ చేస్తే పరిణామాలు",
    important_highlights: "ముఖ్యమైన సంభాషణ హైలైట్లు",
    key_phrases_flagged: "విశ్లేషణలో గుర్తించిన ముఖ్య పదబంధాలు",
    urgency: "అత్యవసరం",
    payment_request: "చెల్లింపు అభ్యర్థన",
    threat: "బెదిరింపు",
    suspicious_claim: "అనుమానాస్పద దావా",
    no_scam_indicators: "స్కామ్ సూచనలు లేవు",
    safety_analysis_see_explanation: "భద్రతా విశ్లేషణ (వివరణ చూడండి)",
    no_explanation_provided: "వివరణ ఇవ్వబడలేదు.",
    review_explanation_above: "మార్గదర్శకత్వం కోసం పై వివరణను చూడండి.",
    ignoring_scam_indicators: "స్కామ్ సూచనలను అవజ్ఞ చేయడం ఆర్థిక నష్టం లేదా గుర్తింపు దొంగతనానికి దారితీయవచ్చు.",
    content_not_flagged: "కంటెంట్ స్కామ్ అని గుర్తించబడలేదు; సాధారణ జాగ్రత్త తీసుకోండి.",
    analysis_failed: "విశ్లేషణ విఫలమైంది",
    request_failed: "అభ్యర్థన విఫలమైంది",
    backend_unreachable: "విశ్లేషణ బ్యాక్‌ఎండ్‌కు కనెక్ట్ కాలేకపోయింది. అది నడుస్తోందో లేదో చూడండి.",
    result_language: "ఫలిత భాష",
};

/// Strings for the selected result language. `Auto` uses English.
pub fn strings(lang: ResultLanguage) -> &'static Strings {
    match lang {
        ResultLanguage::Auto | ResultLanguage::English => &EN,
        ResultLanguage::Hindi => &HI,
        ResultLanguage::Telugu => &TE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(ResultLanguage::parse("Hindi"), Some(ResultLanguage::Hindi));
        assert_eq!(ResultLanguage::parse("hindi"), Some(ResultLanguage::Hindi));
        assert_eq!(ResultLanguage::parse(" TELUGU "), Some(ResultLanguage::Telugu));
        assert_eq!(ResultLanguage::parse("en"), Some(ResultLanguage::English));
        assert_eq!(ResultLanguage::parse("auto"), Some(ResultLanguage::Auto));
        assert_eq!(ResultLanguage::parse("klingon"), None);
        assert_eq!(ResultLanguage::parse(""), None);
    }

    #[test]
    fn test_auto_uses_english_bundle() {
        let auto = strings(ResultLanguage::Auto);
        let en = strings(ResultLanguage::English);
        assert!(std::ptr::eq(auto, en));
        assert_eq!(auto.analysis_failed, "Analysis failed");
    }

    #[test]
    fn test_bundles_are_distinct_and_populated() {
        let hi = strings(ResultLanguage::Hindi);
        let te = strings(ResultLanguage::Telugu);
        assert_ne!(hi.analysis_failed, te.analysis_failed);
        for t in [&EN, &HI, &TE] {
            assert!(!t.no_explanation_provided.is_empty());
            assert!(!t.backend_unreachable.is_empty());
        }
    }
}
