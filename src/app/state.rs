use serde_json::Value;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::i18n::ResultLanguage;
use crate::input::AnalyzeInput;
use crate::mapper::{AnalysisResult, ExplanationData, Highlight};

/// Events sent from background tasks to the event-loop task.
#[derive(Debug)]
pub enum AppEvent {
    /// New submission; only honored from `Idle`.
    Submit(AnalyzeInput),
    /// The backend round trip settled with an accepted payload.
    AnalysisComplete { generation: u64, payload: Value },
    /// The round trip settled with an error, already reduced to one message.
    AnalysisFailed { generation: u64, message: String },
    /// Rotate the analyzing step label.
    ProgressStep,
    /// Advance the analyzing percentage.
    ProgressAdvance,
    /// The progress display reached completion; gates `Analyzing -> Results`.
    ProgressFinished { generation: u64 },
    /// Clear all result state and return to `Idle`.
    Reset,
}

/// Workflow phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Analyzing,
    Results,
}

/// Central workflow state. Owned exclusively by the event-loop task; no
/// other component mutates it.
pub struct AppState {
    pub phase: Phase,
    pub result: Option<AnalysisResult>,
    pub explanation: Option<ExplanationData>,
    pub highlights: Vec<Highlight>,
    pub error: Option<String>,
    /// Data has arrived and been mapped; the transition to `Results` waits
    /// for the progress display's completion signal.
    pub result_ready: bool,
    pub progress: u8,
    pub step_index: usize,
    /// Bumped per accepted submit; stale completions are discarded.
    pub generation: u64,
    /// Language selected for the next submission.
    pub language: ResultLanguage,
    /// Language captured at submit time; fixed for the in-flight request.
    pub active_language: ResultLanguage,
    pub backend_url: String,
    pub client: reqwest::Client,
    pub sender: async_channel::Sender<AppEvent>,

    // Analyzing-phase task handles
    pub progress_task: Option<JoinHandle<()>>,
    pub settle_task: Option<JoinHandle<()>>,
}

impl AppState {
    pub fn new(
        sender: async_channel::Sender<AppEvent>,
        config: &Config,
        language: ResultLanguage,
    ) -> Self {
        Self {
            phase: Phase::Idle,
            result: None,
            explanation: None,
            highlights: Vec::new(),
            error: None,
            result_ready: false,
            progress: 0,
            step_index: 0,
            generation: 0,
            language,
            active_language: language,
            backend_url: config.backend_url.clone(),
            client: reqwest::Client::new(),
            sender,
            progress_task: None,
            settle_task: None,
        }
    }

    /// Drop any result/explanation/highlight/error state.
    pub(crate) fn clear_outcome(&mut self) {
        self.result = None;
        self.explanation = None;
        self.highlights.clear();
        self.error = None;
    }

    /// Stop the progress ticker and any pending completion signal.
    pub(crate) fn abort_tasks(&mut self) {
        if let Some(task) = self.progress_task.take() {
            task.abort();
        }
        if let Some(task) = self.settle_task.take() {
            task.abort();
        }
    }
}
