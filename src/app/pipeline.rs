use serde_json::Value;

use super::state::{AppEvent, AppState};
use crate::i18n::strings;
use crate::input::AnalyzeInput;
use crate::proxy;
use crate::request;

/// Dispatch the build -> forward round trip for one submission on the tokio
/// runtime. Every failure path resolves to a single `AnalysisFailed` event
/// carrying one localized message; nothing escapes this task.
pub fn dispatch_analysis(state: &AppState, input: AnalyzeInput) {
    let client = state.client.clone();
    let backend_url = state.backend_url.clone();
    let sender = state.sender.clone();
    let generation = state.generation;
    let lang = state.active_language;

    tokio::spawn(async move {
        let t = strings(lang);

        let body = match request::build(input, lang) {
            Ok(body) => body,
            Err(e) => {
                log::warn!("Request build failed: {e}");
                let _ = sender
                    .send(AppEvent::AnalysisFailed {
                        generation,
                        message: t.request_failed.to_string(),
                    })
                    .await;
                return;
            }
        };

        let resp = proxy::forward(&client, &backend_url, body).await;

        if resp.unreachable {
            let _ = sender
                .send(AppEvent::AnalysisFailed {
                    generation,
                    message: t.backend_unreachable.to_string(),
                })
                .await;
            return;
        }

        if !resp.ok {
            let message = resp
                .error
                .unwrap_or_else(|| t.analysis_failed.to_string());
            let _ = sender
                .send(AppEvent::AnalysisFailed { generation, message })
                .await;
            return;
        }

        // A 2xx body that doesn't affirm ok:true is still a failure.
        let accepted = resp
            .payload
            .get("ok")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        if !accepted {
            let message = resp
                .payload
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| t.analysis_failed.to_string());
            let _ = sender
                .send(AppEvent::AnalysisFailed { generation, message })
                .await;
            return;
        }

        let _ = sender
            .send(AppEvent::AnalysisComplete {
                generation,
                payload: resp.payload,
            })
            .await;
    });
}
