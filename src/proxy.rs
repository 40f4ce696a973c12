//! Boundary adapter in front of the remote analysis backend.
//!
//! All transport and parse failures degrade to a structured response; the
//! caller never sees a raw error from this layer.

use reqwest::Client;
use serde_json::{json, Value};

use crate::request::RequestBody;

/// Uniform outcome of one forwarded request.
#[derive(Debug, Clone)]
pub struct ProxyResponse {
    pub status: u16,
    pub ok: bool,
    /// Parsed body, or an empty object when the body was absent or not JSON.
    pub payload: Value,
    pub error: Option<String>,
    /// Set only when the backend could not be reached at all.
    pub unreachable: bool,
}

/// Forward a built request body to the backend's `/analyze` endpoint.
pub async fn forward(client: &Client, base_url: &str, body: RequestBody) -> ProxyResponse {
    let req = client.post(format!("{base_url}/analyze"));
    let req = match body {
        RequestBody::Json(value) => req.json(&value),
        RequestBody::Multipart(form) => req.multipart(form),
    };
    send_normalized(base_url, req).await
}

/// Send a prepared request and normalize the outcome: synthesized 502 on
/// transport failure, JSON-or-empty body parsing, backend error text surfaced
/// with its original status.
pub async fn send_normalized(base_url: &str, req: reqwest::RequestBuilder) -> ProxyResponse {
    let resp = match req.send().await {
        Ok(resp) => resp,
        Err(e) => {
            log::warn!("Backend unreachable at {base_url}: {e}");
            return ProxyResponse {
                status: 502,
                ok: false,
                payload: json!({}),
                error: Some(format!(
                    "Cannot connect to backend at {base_url}. Make sure the analysis backend is running."
                )),
                unreachable: true,
            };
        }
    };

    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    let payload: Value = serde_json::from_str(&text).unwrap_or_else(|_| json!({}));

    if !status.is_success() {
        let error = payload
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });
        return ProxyResponse {
            status: status.as_u16(),
            ok: false,
            payload,
            error: Some(error),
            unreachable: false,
        };
    }

    ProxyResponse {
        status: status.as_u16(),
        ok: true,
        payload,
        error: None,
        unreachable: false,
    }
}
