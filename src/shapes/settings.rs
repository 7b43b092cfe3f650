use crate::{
    constants::{DEFAULT_PROGRESS_STEP, DEFAULT_REVEAL_DELAY_MS, DEFAULT_TICK_INTERVAL_MS},
    shapes::progress::ProgressSchedule,
};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::{sync::RwLock, time::Duration};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_progress_step")]
    pub progress_step: u8,
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

fn default_progress_step() -> u8 {
    DEFAULT_PROGRESS_STEP
}

fn default_reveal_delay_ms() -> u64 {
    DEFAULT_REVEAL_DELAY_MS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            progress_step: DEFAULT_PROGRESS_STEP,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
        }
    }
}

impl Settings {
    // tokio intervals panic on a zero period
    pub fn progress_schedule(&self) -> ProgressSchedule {
        ProgressSchedule {
            tick_interval: Duration::from_millis(self.tick_interval_ms.max(1)),
            step: self.progress_step,
            reveal_delay: Duration::from_millis(self.reveal_delay_ms),
        }
    }
}

static CURRENT_SETTING: OnceCell<RwLock<Settings>> = OnceCell::new();

/// Settings initialization (should be called once at startup).
pub fn init_settings(default: Settings) {
    let _ = CURRENT_SETTING.set(RwLock::new(default));
}

/// Returns the current settings, falling back to defaults before init.
pub fn current_settings() -> Settings {
    CURRENT_SETTING
        .get()
        .and_then(|lock| lock.read().ok().map(|s| s.clone()))
        .unwrap_or_default()
}
