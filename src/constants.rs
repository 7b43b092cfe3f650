pub const APP_DIRECTORY_NAME: &str = ".teams4all";
pub const ROSTER_FILE_NAME: &str = "roster.json";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "teams4all.log";

pub const MIN_ACTIVE_PLAYERS: usize = 4;
pub const GOALKEEPERS_PER_MATCH: usize = 2;
pub const MIN_SKILL: u8 = 1;
pub const MAX_SKILL: u8 = 3;

pub const MAX_PROGRESS: u8 = 100;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_PROGRESS_STEP: u8 = 33;
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 3000;
