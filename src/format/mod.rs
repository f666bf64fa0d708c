// Duration to ETA string conversion

use crate::config::FormatterConfig;
use crate::error::{EtaError, Result};
use crate::{log_debug, log_trace};
use once_cell::sync::Lazy;
use std::time::Duration;

pub mod style;
pub mod unit;
pub mod zero;

pub use style::UnitsStyle;
pub use unit::TimeUnit;
pub use zero::ZeroFormatting;

static ETA_FORMATTER: Lazy<EtaFormatter> = Lazy::new(EtaFormatter::eta);

/// Formats `seconds` as an ETA such as `"5m"` or `"1h 20m"`.
///
/// Uses days, hours and minutes, at most two of them, abbreviated, with zero
/// components dropped. Intervals under a minute render as `"0m"`.
/// Returns `None` for negative, non-finite or out-of-range input.
///
/// ```
/// assert_eq!(eta::format_eta(3661.0).as_deref(), Some("1h 1m"));
/// assert_eq!(eta::format_eta(-1.0), None);
/// ```
pub fn format_eta(seconds: f64) -> Option<String> {
    ETA_FORMATTER.string_from_seconds(seconds)
}

/// Like [`format_eta`], but reports why an interval could not be formatted
pub fn try_format_eta(seconds: f64) -> Result<String> {
    ETA_FORMATTER.try_string_from_seconds(seconds)
}

/// A validated, immutable duration formatter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EtaFormatter {
    /// Largest first, no duplicates, never empty
    units: Vec<TimeUnit>,
    max_unit_count: usize,
    style: UnitsStyle,
    zero_formatting: ZeroFormatting,
}

impl Default for EtaFormatter {
    fn default() -> Self {
        Self::eta()
    }
}

impl EtaFormatter {
    /// Days, hours and minutes; two units at most; abbreviated; zeros dropped
    pub fn eta() -> Self {
        Self {
            units: TimeUnit::ETA.to_vec(),
            max_unit_count: 2,
            style: UnitsStyle::Abbreviated,
            zero_formatting: ZeroFormatting::DropAll,
        }
    }

    pub fn builder() -> FormatterConfig {
        FormatterConfig::default()
    }

    pub fn new(config: FormatterConfig) -> Result<Self> {
        config.validate()?;

        let mut units = config.units;
        units.sort_unstable_by(|a, b| b.cmp(a));
        units.dedup();

        Ok(Self {
            units,
            max_unit_count: config.max_unit_count,
            style: config.style,
            zero_formatting: config.zero_formatting,
        })
    }

    pub fn config(&self) -> FormatterConfig {
        FormatterConfig {
            units: self.units.clone(),
            max_unit_count: self.max_unit_count,
            style: self.style,
            zero_formatting: self.zero_formatting,
        }
    }

    pub fn string_from_seconds(&self, seconds: f64) -> Option<String> {
        match self.try_string_from_seconds(seconds) {
            Ok(s) => Some(s),
            Err(e) => {
                log_debug!("Cannot format interval: {}", e);
                None
            }
        }
    }

    pub fn try_string_from_seconds(&self, seconds: f64) -> Result<String> {
        let total = whole_seconds(seconds)?;
        Ok(self.render(total))
    }

    pub fn string_from_duration(&self, duration: Duration) -> String {
        log_trace!(
            "Formatting {} with {:?}",
            humantime::format_duration(duration),
            self.style
        );
        self.render(duration.as_secs())
    }

    /// Components that would be rendered for `total_secs`, largest first.
    ///
    /// Never empty: when nothing survives, a zero of the smallest allowed
    /// unit is returned.
    pub fn components(&self, total_secs: u64) -> Vec<(TimeUnit, u64)> {
        let mut remaining = total_secs;
        let all: Vec<(TimeUnit, u64)> = self
            .units
            .iter()
            .map(|&unit| {
                let value = remaining / unit.seconds();
                remaining %= unit.seconds();
                (unit, value)
            })
            .collect();

        let start = if self.zero_formatting.skips_leading() {
            all.iter().position(|&(_, value)| value > 0)
        } else {
            Some(0)
        };

        let mut selected: Vec<(TimeUnit, u64)> = match start {
            Some(start) => {
                let window = &all[start..];
                let count = match self.max_unit_count {
                    0 => window.len(),
                    n => n.min(window.len()),
                };
                window[..count].to_vec()
            }
            None => Vec::new(),
        };

        if !self.zero_formatting.keeps_zeros() {
            selected.retain(|&(_, value)| value > 0);
        }

        if selected.is_empty() {
            selected.push((self.smallest_unit(), 0));
        }
        selected
    }

    fn smallest_unit(&self) -> TimeUnit {
        // validated non-empty
        self.units.last().copied().unwrap_or(TimeUnit::Minute)
    }

    fn render(&self, total_secs: u64) -> String {
        self.style.render(&self.components(total_secs))
    }
}

/// Truncates a seconds value to whole seconds, rejecting what cannot be shown
fn whole_seconds(seconds: f64) -> Result<u64> {
    if !seconds.is_finite() {
        return Err(EtaError::NonFiniteInterval(seconds));
    }
    if seconds < 0.0 {
        return Err(EtaError::NegativeInterval(seconds));
    }

    let whole = seconds.trunc();
    // u64::MAX as f64 rounds up to 2^64
    if whole >= u64::MAX as f64 {
        return Err(EtaError::IntervalOutOfRange(seconds));
    }
    Ok(whole as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eta(seconds: f64) -> String {
        format_eta(seconds).unwrap()
    }

    #[test]
    fn under_a_minute_is_zero_minutes() {
        assert_eq!(eta(0.0), "0m");
        assert_eq!(eta(59.0), "0m");
        assert_eq!(eta(59.999), "0m");
    }

    #[test]
    fn single_units() {
        assert_eq!(eta(60.0), "1m");
        assert_eq!(eta(3600.0), "1h");
        assert_eq!(eta(86400.0), "1d");
        assert_eq!(eta(300.5), "5m");
    }

    #[test]
    fn two_units() {
        assert_eq!(eta(3661.0), "1h 1m");
        assert_eq!(eta(4800.0), "1h 20m");
        assert_eq!(eta(90000.0), "1d 1h");
    }

    #[test]
    fn capped_at_two_units() {
        assert_eq!(eta(90061.0), "1d 1h");
        assert_eq!(eta(3.0 * 86400.0 + 23.0 * 3600.0 + 59.0 * 60.0 + 59.0), "3d 23h");
    }

    #[test]
    fn zero_inside_window_is_dropped() {
        // 1 day, 0 hours, 1 minute: the minute is outside the two-unit window
        assert_eq!(eta(86460.0), "1d");
    }

    #[test]
    fn invalid_input_has_no_string() {
        assert_eq!(format_eta(-1.0), None);
        assert_eq!(format_eta(f64::NAN), None);
        assert_eq!(format_eta(f64::INFINITY), None);
        assert_eq!(format_eta(f64::NEG_INFINITY), None);
        assert_eq!(format_eta(1e30), None);
    }

    #[test]
    fn invalid_input_reports_cause() {
        assert!(matches!(
            try_format_eta(-5.0),
            Err(EtaError::NegativeInterval(_))
        ));
        assert!(matches!(
            try_format_eta(f64::NAN),
            Err(EtaError::NonFiniteInterval(_))
        ));
        assert!(matches!(
            try_format_eta(1e30),
            Err(EtaError::IntervalOutOfRange(_))
        ));
    }

    #[test]
    fn repeated_calls_agree() {
        for s in [0.0, 61.0, 7322.0, 1_000_000.0] {
            assert_eq!(format_eta(s), format_eta(s));
        }
    }

    #[test]
    fn components_do_not_decrease_within_hour() {
        let f = EtaFormatter::eta();
        let mut last = 0;
        for secs in (60..3600).step_by(7) {
            let parts = f.components(secs);
            assert_eq!(parts.len(), 1);
            assert!(parts[0].1 >= last);
            last = parts[0].1;
        }
    }

    #[test]
    fn duration_input() {
        let f = EtaFormatter::eta();
        assert_eq!(f.string_from_duration(Duration::from_secs(7260)), "2h 1m");
        assert_eq!(f.string_from_duration(Duration::from_millis(59_999)), "0m");
    }

    #[test]
    fn largest_allowed_unit_absorbs_the_rest() {
        let f = EtaFormatter::builder()
            .units([TimeUnit::Hour, TimeUnit::Minute])
            .build()
            .unwrap();
        assert_eq!(f.string_from_seconds(90000.0).as_deref(), Some("25h"));
    }

    #[test]
    fn units_are_normalized() {
        let f = EtaFormatter::builder()
            .units([TimeUnit::Minute, TimeUnit::Day, TimeUnit::Minute, TimeUnit::Hour])
            .build()
            .unwrap();
        assert_eq!(f, EtaFormatter::eta());
    }

    #[test]
    fn unlimited_unit_count() {
        let f = EtaFormatter::builder()
            .units([TimeUnit::Day, TimeUnit::Hour, TimeUnit::Minute, TimeUnit::Second])
            .max_unit_count(0)
            .build()
            .unwrap();
        assert_eq!(f.string_from_seconds(90061.0).as_deref(), Some("1d 1h 1m 1s"));
        assert_eq!(f.string_from_seconds(0.0).as_deref(), Some("0s"));
    }

    #[test]
    fn drop_leading_keeps_inner_zeros() {
        let f = EtaFormatter::builder()
            .zero_formatting(ZeroFormatting::DropLeading)
            .build()
            .unwrap();
        assert_eq!(f.string_from_seconds(3600.0).as_deref(), Some("1h 0m"));
        assert_eq!(f.string_from_seconds(86460.0).as_deref(), Some("1d 0h"));
        assert_eq!(f.string_from_seconds(30.0).as_deref(), Some("0m"));
    }

    #[test]
    fn pad_starts_at_largest_unit() {
        let f = EtaFormatter::builder()
            .zero_formatting(ZeroFormatting::Pad)
            .build()
            .unwrap();
        assert_eq!(f.string_from_seconds(3661.0).as_deref(), Some("0d 1h"));
        assert_eq!(f.string_from_seconds(0.0).as_deref(), Some("0d 0h"));
    }

    #[test]
    fn full_style() {
        let f = EtaFormatter::builder()
            .style(UnitsStyle::Full)
            .build()
            .unwrap();
        assert_eq!(
            f.string_from_seconds(90000.0 + 3600.0).as_deref(),
            Some("1 day, 2 hours")
        );
        assert_eq!(f.string_from_seconds(10.0).as_deref(), Some("0 minutes"));
    }

    #[test]
    fn empty_units_rejected() {
        let err = EtaFormatter::builder().units([]).build().unwrap_err();
        assert!(matches!(err, EtaError::NoUnits));
    }
}
