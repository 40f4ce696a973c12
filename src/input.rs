//! Input shapes accepted for analysis and the file allow-list filter.

use std::fmt;

/// A file selected for analysis, read fully into memory.
#[derive(Clone)]
pub struct FilePayload {
    pub name: String,
    /// Declared media type; may be empty when the source had none.
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for FilePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilePayload")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// One analysis submission: a media file or raw text. Constructed at
/// submission time and consumed by the request builder.
#[derive(Debug, Clone)]
pub enum AnalyzeInput {
    File(FilePayload),
    Text(String),
}

impl AnalyzeInput {
    /// Text input; `None` when empty after trimming.
    pub fn text(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self::Text(trimmed.to_string()))
        }
    }

    /// Short label for logs and history records.
    pub fn source_label(&self) -> String {
        match self {
            Self::File(file) => file.name.clone(),
            Self::Text(_) => "text".to_string(),
        }
    }
}

/// Allow-list filter: mp3/wav audio or PDF, by media type or extension.
/// Rejected files are skipped by the caller without surfacing an error.
pub fn is_acceptable(name: &str, mime: &str) -> bool {
    let name = name.to_lowercase();
    let audio = mime == "audio/mpeg"
        || mime == "audio/wav"
        || name.ends_with(".mp3")
        || name.ends_with(".wav");
    let pdf = mime == "application/pdf" || name.ends_with(".pdf");
    audio || pdf
}

/// Best-effort media type from the file extension; empty when unknown.
pub fn guess_mime(name: &str) -> &'static str {
    let name = name.to_lowercase();
    if name.ends_with(".mp3") {
        "audio/mpeg"
    } else if name.ends_with(".wav") {
        "audio/wav"
    } else if name.ends_with(".pdf") {
        "application/pdf"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_by_media_type() {
        assert!(is_acceptable("call", "audio/mpeg"));
        assert!(is_acceptable("call", "audio/wav"));
        assert!(is_acceptable("doc", "application/pdf"));
    }

    #[test]
    fn test_accepts_by_extension_case_insensitive() {
        assert!(is_acceptable("call.MP3", ""));
        assert!(is_acceptable("Call.Wav", ""));
        assert!(is_acceptable("statement.PDF", ""));
    }

    #[test]
    fn test_rejects_other_types() {
        assert!(!is_acceptable("notes.docx", ""));
        assert!(!is_acceptable("clip.mp4", "video/mp4"));
        assert!(!is_acceptable("call.mp3.exe", "application/octet-stream"));
    }

    #[test]
    fn test_text_input_trims_and_rejects_empty() {
        assert!(AnalyzeInput::text("   ").is_none());
        match AnalyzeInput::text("  hello  ") {
            Some(AnalyzeInput::Text(text)) => assert_eq!(text, "hello"),
            other => panic!("unexpected input: {other:?}"),
        }
    }

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime("a.mp3"), "audio/mpeg");
        assert_eq!(guess_mime("a.WAV"), "audio/wav");
        assert_eq!(guess_mime("a.pdf"), "application/pdf");
        assert_eq!(guess_mime("a.txt"), "");
    }
}
