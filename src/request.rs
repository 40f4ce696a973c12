//! Builds a transport-ready request body from one analysis input.

use reqwest::multipart::{Form, Part};
use serde_json::{json, Value};

use crate::i18n::ResultLanguage;
use crate::input::AnalyzeInput;

/// Transport-ready body. The HTTP client sets the headers: JSON content type
/// via `RequestBuilder::json`, the multipart boundary via
/// `RequestBuilder::multipart` (boundary is content-dependent and must not be
/// hand-specified).
pub enum RequestBody {
    Json(Value),
    Multipart(Form),
}

/// Convert an input plus the selected result language into a request body.
pub fn build(
    input: AnalyzeInput,
    lang: ResultLanguage,
) -> Result<RequestBody, Box<dyn std::error::Error + Send + Sync>> {
    match input {
        AnalyzeInput::Text(text) => Ok(RequestBody::Json(json!({
            "text": text,
            "response_language": lang.as_str(),
        }))),
        AnalyzeInput::File(file) => {
            let mut part = Part::bytes(file.bytes).file_name(file.name);
            if !file.mime.is_empty() {
                part = part.mime_str(&file.mime)?;
            }
            let form = Form::new()
                .part("file", part)
                .text("response_language", lang.as_str());
            Ok(RequestBody::Multipart(form))
        }
    }
}
