// Rendering styles for formatted components

use super::unit::TimeUnit;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// How each `(value, unit)` component is written
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
    ValueEnum,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum UnitsStyle {
    /// `1h 20m`
    #[default]
    Abbreviated,
    /// `1 hr, 20 min`
    Short,
    /// `1 hour, 20 minutes`
    Full,
}

impl UnitsStyle {
    fn separator(self) -> &'static str {
        match self {
            UnitsStyle::Abbreviated => " ",
            UnitsStyle::Short | UnitsStyle::Full => ", ",
        }
    }

    pub fn component(self, value: u64, unit: TimeUnit) -> String {
        match self {
            UnitsStyle::Abbreviated => format!("{}{}", value, unit.abbreviation()),
            UnitsStyle::Short => format!("{} {}", value, unit.short_name(value)),
            UnitsStyle::Full => format!("{} {}", value, unit.full_name(value)),
        }
    }

    /// Render components in the given order, joined by the style's separator
    pub fn render(self, components: &[(TimeUnit, u64)]) -> String {
        components
            .iter()
            .map(|&(unit, value)| self.component(value, unit))
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARTS: [(TimeUnit, u64); 2] = [(TimeUnit::Hour, 2), (TimeUnit::Minute, 1)];

    #[test]
    fn abbreviated() {
        assert_eq!(UnitsStyle::Abbreviated.render(&PARTS), "2h 1m");
    }

    #[test]
    fn short() {
        assert_eq!(UnitsStyle::Short.render(&PARTS), "2 hr, 1 min");
    }

    #[test]
    fn full() {
        assert_eq!(UnitsStyle::Full.render(&PARTS), "2 hours, 1 minute");
    }

    #[test]
    fn empty_renders_empty() {
        assert_eq!(UnitsStyle::Full.render(&[]), "");
    }
}
