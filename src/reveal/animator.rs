use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use super::state::RevealUpdate;
use crate::models::{QueryResult, ResultField};

/// Delay between the start of consecutive fields (milliseconds)
pub const DEFAULT_STAGGER_MS: u64 = 200;
/// Delay between characters within a field (milliseconds)
pub const DEFAULT_CHAR_INTERVAL_MS: u64 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    pub stagger: Duration,
    pub char_interval: Duration,
}

impl RevealTiming {
    pub fn from_millis(stagger_ms: u64, char_interval_ms: u64) -> Self {
        Self {
            stagger: Duration::from_millis(stagger_ms),
            char_interval: Duration::from_millis(char_interval_ms),
        }
    }

    /// When field `index` starts typing, relative to the trigger
    pub fn start_delay(&self, index: usize) -> Duration {
        self.stagger.saturating_mul(index as u32)
    }
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self::from_millis(DEFAULT_STAGGER_MS, DEFAULT_CHAR_INTERVAL_MS)
    }
}

/// Types out each field of a result character by character.
///
/// Every call to [`start`](Self::start) cancels the tasks of the previous query before
/// spawning new ones, and tags its updates with a fresh generation number.
#[derive(Debug, Default)]
pub struct RevealAnimator {
    timing: RevealTiming,
    generation: u64,
    cancel: Option<CancellationToken>,
}

impl RevealAnimator {
    pub fn new(timing: RevealTiming) -> Self {
        Self { timing, generation: 0, cancel: None }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Spawn one typing task per field. Must be called inside a tokio runtime.
    pub fn start(&mut self, result: &QueryResult, tx: UnboundedSender<RevealUpdate>) -> u64 {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;
        let token = CancellationToken::new();

        for field in ResultField::ALL {
            let text = result.field(field).to_string();
            let delay = self.timing.start_delay(field.index());
            let interval = self.timing.char_interval;
            tokio::spawn(type_out(generation, field, text, delay, interval, token.clone(), tx.clone()));
        }

        debug!(generation, "reveal started");
        self.cancel = Some(token);
        generation
    }

    /// Stop every task of the current query
    pub fn cancel(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
            debug!(generation = self.generation, "reveal cancelled");
        }
    }
}

impl Drop for RevealAnimator {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn type_out(
    generation: u64,
    field: ResultField,
    text: String,
    delay: Duration,
    interval: Duration,
    token: CancellationToken,
    tx: UnboundedSender<RevealUpdate>,
) {
    tokio::select! {
        _ = token.cancelled() => return,
        _ = sleep(delay) => {}
    }

    for ch in text.chars() {
        tokio::select! {
            _ = token.cancelled() => return,
            _ = sleep(interval) => {}
        }
        if tx.send(RevealUpdate { generation, field, ch }).is_err() {
            // Receiver gone, nobody is watching
            return;
        }
    }
    trace!(generation, %field, "field fully revealed");
}
