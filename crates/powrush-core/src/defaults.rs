use crate::channels::GateState;
use crate::error::PowrushError;
use crate::intensity::Intensity;
use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENT: &str = "divine_sanctified";
pub const DEFAULT_THRIVING_BIAS: f64 = 0.99;

/// Construction-time settings for a freshly attached module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PowrushDefaults {
    pub current: String,
    #[serde(deserialize_with = "crate::intensity::deserialize_lenient")]
    pub intensity: Intensity,
    pub gate: GateState,
    pub thriving_bias: f64,
}

impl Default for PowrushDefaults {
    fn default() -> Self {
        Self {
            current: DEFAULT_CURRENT.to_string(),
            intensity: Intensity::DivineMax,
            gate: GateState::ActivePermanent,
            thriving_bias: DEFAULT_THRIVING_BIAS,
        }
    }
}

impl PowrushDefaults {
    /// Parses defaults from JSON. Missing fields keep their default values.
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let defaults: PowrushDefaults =
            serde_json::from_str(raw).context("parse powrush defaults")?;
        defaults.validate()?;
        Ok(defaults)
    }

    pub fn validate(&self) -> Result<(), PowrushError> {
        if self.current.trim().is_empty() {
            return Err(PowrushError::Config("current tag must not be empty".into()));
        }
        Ok(())
    }
}
