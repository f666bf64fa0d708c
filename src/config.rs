// Formatter configuration

use crate::error::{EtaError, Result};
use crate::format::{EtaFormatter, TimeUnit, UnitsStyle, ZeroFormatting};
use crate::log_info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable description of an [`EtaFormatter`].
///
/// Missing fields in a config file fall back to the ETA defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    pub units: Vec<TimeUnit>,
    /// 0 means no limit
    pub max_unit_count: usize,
    pub style: UnitsStyle,
    pub zero_formatting: ZeroFormatting,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            units: TimeUnit::ETA.to_vec(),
            max_unit_count: 2,
            style: UnitsStyle::default(),
            zero_formatting: ZeroFormatting::default(),
        }
    }
}

impl FormatterConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        log_info!("Loading formatter configuration from {}", path.display());

        let data = std::fs::read_to_string(path).map_err(|e| {
            EtaError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = serde_json::from_str(&data)
            .map_err(|e| EtaError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.units.is_empty() {
            return Err(EtaError::NoUnits);
        }
        Ok(())
    }

    pub fn units(mut self, units: impl IntoIterator<Item = TimeUnit>) -> Self {
        self.units = units.into_iter().collect();
        self
    }

    pub fn max_unit_count(mut self, count: usize) -> Self {
        self.max_unit_count = count;
        self
    }

    pub fn style(mut self, style: UnitsStyle) -> Self {
        self.style = style;
        self
    }

    pub fn zero_formatting(mut self, zero_formatting: ZeroFormatting) -> Self {
        self.zero_formatting = zero_formatting;
        self
    }

    pub fn build(self) -> Result<EtaFormatter> {
        EtaFormatter::new(self)
    }
}
