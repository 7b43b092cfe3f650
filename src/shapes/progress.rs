use crate::constants::{
    DEFAULT_PROGRESS_STEP, DEFAULT_REVEAL_DELAY_MS, DEFAULT_TICK_INTERVAL_MS, MAX_PROGRESS,
};
use std::time::Duration;

/// Synthetic progress shown while the teams are being "computed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationProgress {
    pub value: u8,
    pub in_progress: bool,
}

impl GenerationProgress {
    pub fn started() -> Self {
        Self {
            value: 0,
            in_progress: true,
        }
    }

    pub fn completed() -> Self {
        Self {
            value: MAX_PROGRESS,
            in_progress: false,
        }
    }

    pub fn advanced(&self, step: u8) -> Self {
        Self {
            value: self.value.saturating_add(step).min(MAX_PROGRESS),
            in_progress: self.in_progress,
        }
    }

    pub fn is_saturated(&self) -> bool {
        self.value >= MAX_PROGRESS
    }

    pub fn ratio(&self) -> f64 {
        f64::from(self.value.min(MAX_PROGRESS)) / f64::from(MAX_PROGRESS)
    }
}

/// Timing of the progress ticks and of the moment the result is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSchedule {
    pub tick_interval: Duration,
    pub step: u8,
    pub reveal_delay: Duration,
}

impl Default for ProgressSchedule {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            step: DEFAULT_PROGRESS_STEP,
            reveal_delay: Duration::from_millis(DEFAULT_REVEAL_DELAY_MS),
        }
    }
}
