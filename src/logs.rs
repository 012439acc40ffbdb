//! Leveled progress logging for the pipeline and CLI.
//!
//! Everything goes to stderr so stdout stays clean for machine-readable
//! output (`parse` JSON, `clean --report`).

/// Log level for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    fn prefix(self) -> &'static str {
        match self {
            LogLevel::Info => "   ",
            LogLevel::Success => "   ✓",
            LogLevel::Warning => "   ⚠️",
            LogLevel::Error => "   ❌",
        }
    }
}

/// Emit one log line at the given level.
pub fn log(level: LogLevel, message: impl Into<String>) {
    eprintln!("{} {}", level.prefix(), message.into());
}

/// Convenient logging functions
pub fn log_info(msg: impl Into<String>) {
    log(LogLevel::Info, msg);
}

pub fn log_success(msg: impl Into<String>) {
    log(LogLevel::Success, msg);
}

pub fn log_warning(msg: impl Into<String>) {
    log(LogLevel::Warning, msg);
}

pub fn log_error(msg: impl Into<String>) {
    log(LogLevel::Error, msg);
}
