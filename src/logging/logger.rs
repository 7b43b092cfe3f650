use chrono::Local;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

static LOGGER: once_cell::sync::Lazy<Mutex<Logger>> =
    once_cell::sync::Lazy::new(|| Mutex::new(Logger::new()));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
        };
        write!(f, "{}", label)
    }
}

struct Logger {
    path: Option<PathBuf>,
}

impl Logger {
    fn new() -> Self {
        Self { path: None }
    }

    fn initialize(&mut self, path: PathBuf) {
        self.path = Some(path);
    }

    fn write(&self, level: LogLevel, message: &str) {
        // nothing is written until init_logger has been called
        if let Some(path) = &self.path {
            let line = format_line(&Local::now().format("%Y-%m-%d %H:%M:%S"), level, message);
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }
}

pub fn format_line(timestamp: &impl fmt::Display, level: LogLevel, message: &str) -> String {
    format!("[{}] {} - {}\n", timestamp, level, message)
}

pub fn init_logger(log_path: PathBuf) {
    if let Ok(mut logger) = LOGGER.lock() {
        logger.initialize(log_path);
    }
}

fn log(level: LogLevel, message: &str) {
    if let Ok(logger) = LOGGER.lock() {
        logger.write(level, message);
    }
}

pub fn log_info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn log_warning(message: &str) {
    log(LogLevel::Warning, message);
}

pub fn log_error(message: &str) {
    log(LogLevel::Error, message);
}
