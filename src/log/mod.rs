// Logging infrastructure for the eta crate

use crate::error::{EtaError, Result};
use clap::ValueEnum;
use once_cell::sync::Lazy;
use std::io::Write;
use std::sync::Mutex;
use strum::{Display, EnumString, IntoStaticStr};

mod formatter;

pub use formatter::LogFormatter;

/// Log level enumeration
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    Display,
    EnumString,
    IntoStaticStr,
    ValueEnum,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    #[default]
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Configuration for the logging system
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    pub log_level: LogLevel,
    /// Drop the timestamp prefix
    pub plain: bool,
}

/// Writes formatted records to a sink, stderr unless told otherwise
pub struct Logger {
    config: LogConfig,
    sink: Box<dyn Write + Send>,
}

impl Logger {
    pub fn new(config: LogConfig) -> Self {
        Self::with_sink(config, Box::new(std::io::stderr()))
    }

    pub fn with_sink(config: LogConfig, sink: Box<dyn Write + Send>) -> Self {
        Self { config, sink }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.config.log_level
    }

    pub fn log(&mut self, level: LogLevel, module: &str, message: &str) {
        if !self.enabled(level) {
            return;
        }

        let formatted = if self.config.plain {
            LogFormatter::format(level, module, message)
        } else {
            LogFormatter::format_with_timestamp(level, module, message)
        };

        let _ = writeln!(self.sink, "{}", formatted);
    }
}

static LOGGER: Lazy<Mutex<Option<Logger>>> = Lazy::new(|| Mutex::new(None));

/// Install the global logger; records are discarded until this is called
pub fn init_logger(config: LogConfig) -> Result<()> {
    install(Logger::new(config))
}

pub fn install(logger: Logger) -> Result<()> {
    if let Ok(mut global_logger) = LOGGER.lock() {
        *global_logger = Some(logger);
        Ok(())
    } else {
        Err(EtaError::Log("Failed to acquire logger lock".to_string()))
    }
}

/// Log a message at the specified level
pub fn log(level: LogLevel, module: &str, message: &str) {
    if let Ok(mut logger_guard) = LOGGER.lock()
        && let Some(logger) = logger_guard.as_mut()
    {
        logger.log(level, module, message);
    }
}

/// Logging macros for convenient use throughout the codebase
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        $crate::log::log($crate::log::LogLevel::Trace, module_path!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::log::log($crate::log::LogLevel::Debug, module_path!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::log::log($crate::log::LogLevel::Info, module_path!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::log::log($crate::log::LogLevel::Warn, module_path!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::log::log($crate::log::LogLevel::Error, module_path!(), &format!($($arg)*))
    };
}
