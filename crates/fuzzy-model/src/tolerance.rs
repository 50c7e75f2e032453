//! Named tolerance bands that turn a tolerance score into a verdict.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FuzzyError, Result};

/// Cutoff classification for an aggregated tolerance score.
///
/// Strong, Normal and Weak accept scores strictly below their cutoff.
/// Manual accepts scores strictly above 0.6, the inverse direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToleranceBand {
    Strong,
    Normal,
    Weak,
    Manual,
}

impl ToleranceBand {
    pub const ALL: [ToleranceBand; 4] = [
        ToleranceBand::Strong,
        ToleranceBand::Normal,
        ToleranceBand::Weak,
        ToleranceBand::Manual,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Normal => "Normal",
            Self::Weak => "Weak",
            Self::Manual => "Manual",
        }
    }

    pub fn cutoff(self) -> f64 {
        match self {
            Self::Strong => 0.25,
            Self::Normal => 0.5,
            Self::Weak => 0.75,
            Self::Manual => 0.6,
        }
    }

    /// Whether `score` counts as approximately equal under this band.
    pub fn accepts(self, score: f64) -> bool {
        match self {
            Self::Strong | Self::Normal | Self::Weak => score < self.cutoff(),
            // Inverted relative to the other bands; kept as observed.
            Self::Manual => score > self.cutoff(),
        }
    }
}

impl fmt::Display for ToleranceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToleranceBand {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|band| band.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| FuzzyError::UnknownToleranceBand(trimmed.to_string()))
    }
}
