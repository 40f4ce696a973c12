//! Inbound HTTP surface: the `/analyze` proxy entry point.
//!
//! Accepts `multipart/form-data` or `application/json` and forwards the raw
//! body, original content type included, to the configured analysis backend.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::proxy;

/// Shared handler state: one client, one backend base address.
pub struct ServerState {
    pub client: reqwest::Client,
    pub backend_url: String,
}

pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/analyze", post(analyze))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

/// Pass the request body through unchanged. Keeping the caller's
/// Content-Type preserves the multipart boundary, so no re-encoding.
async fn analyze(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let mut req = state
        .client
        .post(format!("{}/analyze", state.backend_url))
        .body(body.to_vec());
    if !content_type.is_empty() {
        req = req.header(header::CONTENT_TYPE, content_type);
    }

    let resp = proxy::send_normalized(&state.backend_url, req).await;
    let status = StatusCode::from_u16(resp.status).unwrap_or(StatusCode::BAD_GATEWAY);
    if resp.ok {
        (status, Json(resp.payload))
    } else {
        let error = resp
            .error
            .unwrap_or_else(|| "Analysis request failed".to_string());
        (status, Json(json!({"ok": false, "error": error})))
    }
}

/// Bind and serve until shutdown.
pub async fn serve(
    addr: &str,
    state: Arc<ServerState>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Proxy listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn spawn_proxy(backend_url: String) -> String {
        let state = Arc::new(ServerState {
            client: reqwest::Client::new(),
            backend_url,
        });
        spawn(router(state)).await
    }

    #[tokio::test]
    async fn test_json_request_passes_through() {
        let backend = Router::new().route(
            "/analyze",
            post(|Json(body): Json<Value>| async move {
                Json(json!({"ok": true, "echo": body["text"]}))
            }),
        );
        let backend_url = spawn(backend).await;
        let proxy_url = spawn_proxy(backend_url).await;

        let resp = reqwest::Client::new()
            .post(format!("{proxy_url}/analyze"))
            .json(&json!({"text": "hello", "response_language": "auto"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 200);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body, json!({"ok": true, "echo": "hello"}));
    }

    #[tokio::test]
    async fn test_multipart_request_passes_through_with_boundary() {
        // Backend checks that the multipart body arrived intact.
        let backend = Router::new().route(
            "/analyze",
            post(|mut multipart: axum::extract::Multipart| async move {
                let mut file_len = 0;
                let mut language = String::new();
                while let Some(field) = multipart.next_field().await.unwrap() {
                    match field.name().unwrap_or("") {
                        "file" => file_len = field.bytes().await.unwrap().len(),
                        "response_language" => language = field.text().await.unwrap(),
                        _ => {}
                    }
                }
                Json(json!({"ok": true, "file_len": file_len, "language": language}))
            }),
        );
        let backend_url = spawn(backend).await;
        let proxy_url = spawn_proxy(backend_url).await;

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(vec![7u8; 64]).file_name("call.mp3"),
            )
            .text("response_language", "Telugu");
        let resp = reqwest::Client::new()
            .post(format!("{proxy_url}/analyze"))
            .multipart(form)
            .send()
            .await
            .unwrap();
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body, json!({"ok": true, "file_len": 64, "language": "Telugu"}));
    }

    #[tokio::test]
    async fn test_unreachable_backend_yields_502() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let dead = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let proxy_url = spawn_proxy(dead).await;

        let resp = reqwest::Client::new()
            .post(format!("{proxy_url}/analyze"))
            .json(&json!({"text": "hi"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 502);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["ok"], false);
        assert!(body["error"].as_str().unwrap().contains("Cannot connect"));
    }

    #[tokio::test]
    async fn test_backend_failure_status_and_error_pass_through() {
        let backend = Router::new().route(
            "/analyze",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"ok": false, "error": "No file or text provided"})),
                )
            }),
        );
        let backend_url = spawn(backend).await;
        let proxy_url = spawn_proxy(backend_url).await;

        let resp = reqwest::Client::new()
            .post(format!("{proxy_url}/analyze"))
            .json(&json!({}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 400);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "No file or text provided");
    }

    #[tokio::test]
    async fn test_health() {
        let proxy_url = spawn_proxy("http://127.0.0.1:1".to_string()).await;
        let resp = reqwest::get(format!("{proxy_url}/health")).await.unwrap();
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body, json!({"status": "ok"}));
    }
}
