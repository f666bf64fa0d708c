// Log message formatting

use crate::log::LogLevel;
use chrono::Local;

pub struct LogFormatter;

impl LogFormatter {
    /// Format a log message with timestamp, level, module, and message
    pub fn format_with_timestamp(level: LogLevel, module: &str, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        format!("[{}] {}", timestamp, Self::format(level, module, message))
    }

    /// Format a log message without timestamp
    pub fn format(level: LogLevel, module: &str, message: &str) -> String {
        format!("[{}] [{}] {}", level.as_str(), module, message)
    }
}
