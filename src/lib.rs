// Short human-readable ETA strings from time intervals

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod log;

// Re-export commonly used types
pub use config::FormatterConfig;
pub use error::{EtaError, Result};
pub use format::{
    EtaFormatter, TimeUnit, UnitsStyle, ZeroFormatting, format_eta, try_format_eta,
};
