//! Presentational pacing for the analyzing phase: a rotating step label and
//! a percentage that creeps toward a ceiling until the result arrives.

use std::time::Duration;

use async_channel::Sender;
use rand::Rng;
use tokio::task::JoinHandle;

use super::state::AppEvent;

/// Step labels rotated while analysis is in flight.
pub const STEPS: [&str; 5] = [
    "Contacting analysis backend...",
    "Extracting audio features...",
    "Analyzing voice patterns...",
    "Running scam detection...",
    "Generating safety report...",
];

/// The percentage holds below this until the result arrives.
pub const MAX_PROGRESS: u8 = 95;

const STEP_INTERVAL: Duration = Duration::from_millis(700);
const ADVANCE_INTERVAL: Duration = Duration::from_millis(400);
const SETTLE_DELAY: Duration = Duration::from_millis(600);

/// Advance the displayed percentage by a small randomized amount, capped.
pub fn bump(progress: u8) -> u8 {
    if progress >= MAX_PROGRESS {
        return progress;
    }
    let step = 2 + rand::thread_rng().gen_range(0..3);
    (progress + step).min(MAX_PROGRESS)
}

/// Spawn the label/percentage ticker. Visual only; the handler aborts it
/// when the analyzing phase ends.
pub fn spawn_ticker(sender: Sender<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut step = tokio::time::interval(STEP_INTERVAL);
        let mut advance = tokio::time::interval(ADVANCE_INTERVAL);
        // Both intervals fire immediately once; swallow that tick.
        step.tick().await;
        advance.tick().await;
        loop {
            tokio::select! {
                _ = step.tick() => {
                    if sender.send(AppEvent::ProgressStep).await.is_err() {
                        break;
                    }
                }
                _ = advance.tick() => {
                    if sender.send(AppEvent::ProgressAdvance).await.is_err() {
                        break;
                    }
                }
            }
        }
    })
}

/// Confirm visual completion shortly after the result is ready. This is the
/// second half of the two-phase gate on `Analyzing -> Results`.
pub fn spawn_settle(sender: Sender<AppEvent>, generation: u64) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(SETTLE_DELAY).await;
        let _ = sender.send(AppEvent::ProgressFinished { generation }).await;
    })
}
