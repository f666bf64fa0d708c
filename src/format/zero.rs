// Zero-valued component handling

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Which zero-valued components survive formatting
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
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum ZeroFormatting {
    /// Drop every zero component: `1h`
    #[default]
    DropAll,
    /// Drop zeros above the largest non-zero unit only: `1h 0m`
    DropLeading,
    /// Keep zeros, starting from the largest allowed unit: `0d 1h`
    Pad,
}

impl ZeroFormatting {
    /// Whether the unit window starts at the largest non-zero component
    pub(crate) fn skips_leading(self) -> bool {
        !matches!(self, ZeroFormatting::Pad)
    }

    pub(crate) fn keeps_zeros(self) -> bool {
        !matches!(self, ZeroFormatting::DropAll)
    }
}
