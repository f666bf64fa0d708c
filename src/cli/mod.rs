// CLI module for command-line interface

use crate::config::FormatterConfig;
use crate::error::Result;
use crate::format::{TimeUnit, UnitsStyle, ZeroFormatting};
use crate::log::LogLevel;
use clap::Parser;
use std::path::PathBuf;

pub mod output;

/// Main CLI structure
#[derive(Parser, Clone, Debug)]
#[command(name = "eta", version)]
#[command(about = "Format time intervals in seconds as short ETA strings", long_about = None)]
pub struct Cli {
    /// Intervals in seconds (fractions are truncated)
    #[arg(allow_negative_numbers = true)]
    pub seconds: Vec<f64>,

    /// Units to use, e.g. day,hour,minute
    #[arg(short, long, value_delimiter = ',', ignore_case = true)]
    pub units: Option<Vec<TimeUnit>>,

    /// Maximum number of units shown (0 = unlimited)
    #[arg(short, long)]
    pub max_units: Option<usize>,

    #[arg(short, long, ignore_case = true)]
    pub style: Option<UnitsStyle>,

    /// How zero-valued units are handled
    #[arg(short, long, ignore_case = true)]
    pub zero: Option<ZeroFormatting>,

    /// JSON formatter configuration; flags override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Printed when an interval cannot be formatted
    #[arg(short, long, default_value = "--")]
    pub placeholder: String,

    /// Print `seconds : eta` pairs
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long, default_value_t = false)]
    pub print_config: bool,

    #[arg(long, default_value_t = LogLevel::Warn, ignore_case = true)]
    pub log_level: LogLevel,
}

impl Cli {
    /// Configuration file (or defaults) with command-line overrides applied
    pub fn formatter_config(&self) -> Result<FormatterConfig> {
        let mut config = match &self.config {
            Some(path) => FormatterConfig::load(path)?,
            None => FormatterConfig::default(),
        };

        if let Some(units) = &self.units {
            config = config.units(units.iter().copied());
        }
        if let Some(count) = self.max_units {
            config = config.max_unit_count(count);
        }
        if let Some(style) = self.style {
            config = config.style(style);
        }
        if let Some(zero) = self.zero {
            config = config.zero_formatting(zero);
        }

        config.validate()?;
        Ok(config)
    }
}
