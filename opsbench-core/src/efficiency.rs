//! Wall-clock timing of the agent's diagnosis step (simulated MTTR).

use std::time::Instant;

use tracing::debug;

/// Stopwatch wrapped around the agent invocation. Lower elapsed time means
/// a faster (simulated) time to resolution.
#[derive(Debug, Default)]
pub struct EfficiencyTimer {
    started_at: Option<Instant>,
}

impl EfficiencyTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the timer.
    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    /// Stop the timer and return the elapsed seconds. Returns `None` when
    /// the timer was never started; the timer is reset either way.
    pub fn stop(&mut self) -> Option<f64> {
        let elapsed = self.started_at.take().map(|t| t.elapsed().as_secs_f64());
        match elapsed {
            Some(secs) => debug!(elapsed_secs = secs, "efficiency timer stopped"),
            None => debug!("efficiency timer stopped without being started"),
        }
        elapsed
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }
}
