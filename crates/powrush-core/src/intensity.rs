use crate::error::PowrushError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calibration levels, from personal scope up to the unbounded default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Gentle,
    Planetary,
    Cosmic,
    #[default]
    DivineMax,
}

impl Intensity {
    pub const ALL: [Intensity; 4] = [
        Intensity::Gentle,
        Intensity::Planetary,
        Intensity::Cosmic,
        Intensity::DivineMax,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Intensity::Gentle => "gentle",
            Intensity::Planetary => "planetary",
            Intensity::Cosmic => "cosmic",
            Intensity::DivineMax => "divine_max",
        }
    }

    /// Lenient parse used by calibration: anything outside the closed set
    /// becomes `DivineMax`.
    pub fn parse_or_default(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

/// Serde hook applying the same fallback as `Intensity::parse_or_default`.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Intensity, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(Intensity::parse_or_default(&raw))
}

impl FromStr for Intensity {
    type Err = PowrushError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intensity::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| PowrushError::InvalidIntensity(s.to_string()))
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
