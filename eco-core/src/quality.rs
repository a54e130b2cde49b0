use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Data quality grade attached to every measurement.
///
/// Ordered from worst to best, so a quality threshold keeps every grade
/// `>=` the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Quality {
    Poor,
    Questionable,
    Good,
    Excellent,
}

impl Quality {
    /// Display order used by every quality breakdown: best grade first.
    pub const ALL: [Quality; 4] = [
        Quality::Excellent,
        Quality::Good,
        Quality::Questionable,
        Quality::Poor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Poor => "poor",
            Quality::Questionable => "questionable",
            Quality::Good => "good",
            Quality::Excellent => "excellent",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a quality label is not one of the four known grades.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown quality grade: {0:?}")]
pub struct UnknownQuality(pub String);

impl FromStr for Quality {
    type Err = UnknownQuality;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "poor" => Ok(Quality::Poor),
            "questionable" => Ok(Quality::Questionable),
            "good" => Ok(Quality::Good),
            "excellent" => Ok(Quality::Excellent),
            _ => Err(UnknownQuality(s.to_string())),
        }
    }
}

impl TryFrom<String> for Quality {
    type Error = UnknownQuality;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
