use super::pipeline::dispatch_analysis;
use super::progress;
use super::state::{AppEvent, AppState, Phase};
use crate::mapper;

/// Handle a workflow event. This is the core state machine.
pub fn handle_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Submit(input) => {
            if state.phase != Phase::Idle {
                log::info!("Ignoring submit while phase={:?}", state.phase);
                return;
            }
            state.clear_outcome();
            state.result_ready = false;
            state.progress = 0;
            state.step_index = 0;
            state.generation += 1;
            // Fixed for the duration of this request.
            state.active_language = state.language;
            state.phase = Phase::Analyzing;
            state.progress_task = Some(progress::spawn_ticker(state.sender.clone()));
            log::info!("Analyzing {} (generation {})", input.source_label(), state.generation);
            dispatch_analysis(state, input);
        }
        AppEvent::AnalysisComplete { generation, payload } => {
            if generation != state.generation || state.phase != Phase::Analyzing {
                log::debug!("Discarding stale analysis result (generation {generation})");
                return;
            }
            state.result = Some(mapper::map_to_result(&payload));
            state.explanation = Some(mapper::map_to_explanation(&payload, state.active_language));
            state.highlights = mapper::map_highlights(&payload);
            state.result_ready = true;
            state.progress = 100;
            state.settle_task = Some(progress::spawn_settle(state.sender.clone(), generation));
        }
        AppEvent::AnalysisFailed { generation, message } => {
            if generation != state.generation || state.phase != Phase::Analyzing {
                log::debug!("Discarding stale analysis error (generation {generation})");
                return;
            }
            log::error!("Analysis failed: {message}");
            state.abort_tasks();
            state.clear_outcome();
            state.result_ready = false;
            state.error = Some(message);
            state.phase = Phase::Idle;
        }
        AppEvent::ProgressStep => {
            if state.phase == Phase::Analyzing && !state.result_ready {
                state.step_index = (state.step_index + 1) % progress::STEPS.len();
                log::info!("{} ({}%)", progress::STEPS[state.step_index], state.progress);
            }
        }
        AppEvent::ProgressAdvance => {
            if state.phase == Phase::Analyzing && !state.result_ready {
                state.progress = progress::bump(state.progress);
            }
        }
        AppEvent::ProgressFinished { generation } => {
            if generation != state.generation || state.phase != Phase::Analyzing {
                return;
            }
            // Both signals observed: data mapped and display settled.
            if state.result_ready && state.result.is_some() && state.explanation.is_some() {
                state.abort_tasks();
                state.result_ready = false;
                state.phase = Phase::Results;
            }
        }
        AppEvent::Reset => {
            state.abort_tasks();
            state.clear_outcome();
            state.result_ready = false;
            state.progress = 0;
            state.step_index = 0;
            state.phase = Phase::Idle;
        }
    }
}
