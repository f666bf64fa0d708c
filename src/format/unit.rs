// Time units the formatter can render

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// A fixed-length time unit.
///
/// Variants are declared smallest first so the derived ordering follows
/// magnitude: `Second < Minute < Hour < Day`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
    ValueEnum,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    /// Default unit set of an ETA, largest first
    pub const ETA: [TimeUnit; 3] = [TimeUnit::Day, TimeUnit::Hour, TimeUnit::Minute];

    /// Length of the unit in seconds
    pub const fn seconds(self) -> u64 {
        match self {
            TimeUnit::Second => 1,
            TimeUnit::Minute => 60,
            TimeUnit::Hour => 60 * 60,
            TimeUnit::Day => 24 * 60 * 60,
        }
    }

    /// Single-letter suffix, e.g. `h`
    pub fn abbreviation(self) -> &'static str {
        match self {
            TimeUnit::Second => "s",
            TimeUnit::Minute => "m",
            TimeUnit::Hour => "h",
            TimeUnit::Day => "d",
        }
    }

    pub fn short_name(self, value: u64) -> &'static str {
        match (self, value) {
            (TimeUnit::Second, _) => "sec",
            (TimeUnit::Minute, _) => "min",
            (TimeUnit::Hour, _) => "hr",
            (TimeUnit::Day, 1) => "day",
            (TimeUnit::Day, _) => "days",
        }
    }

    pub fn full_name(self, value: u64) -> &'static str {
        let singular = value == 1;
        match self {
            TimeUnit::Second if singular => "second",
            TimeUnit::Second => "seconds",
            TimeUnit::Minute if singular => "minute",
            TimeUnit::Minute => "minutes",
            TimeUnit::Hour if singular => "hour",
            TimeUnit::Hour => "hours",
            TimeUnit::Day if singular => "day",
            TimeUnit::Day => "days",
        }
    }
}
