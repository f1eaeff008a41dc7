use crate::defaults::PowrushDefaults;
use crate::intensity::Intensity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scarcity factor every calibration resets to.
pub const SCARCITY_NULLIFIED: f64 = 1.0;

/// Mercy gate status. Amplification only proceeds on `ActivePermanent`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GateState {
    #[default]
    ActivePermanent,
    Closed,
}

impl GateState {
    pub fn is_active(self) -> bool {
        self == GateState::ActivePermanent
    }
}

impl fmt::Display for GateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateState::ActivePermanent => f.write_str("active_permanent"),
            GateState::Closed => f.write_str("closed"),
        }
    }
}

/// Mutable settings record owned by one attached module.
///
/// `current` is fixed at construction. The scarcity factor and equitable
/// amplification are constants with no setters; deserialization ignores
/// whatever a payload carries for them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PowerChannels {
    current: String,
    pub intensity: Intensity,
    pub gate: GateState,
    #[serde(skip_deserializing, default = "scarcity_nullified")]
    scarcity_elimination_factor: f64,
    #[serde(skip_deserializing, default = "unbounded")]
    equitable_amplification: f64,
    pub thriving_bias: f64,
}

fn scarcity_nullified() -> f64 {
    SCARCITY_NULLIFIED
}

fn unbounded() -> f64 {
    f64::INFINITY
}

impl PowerChannels {
    pub fn from_defaults(defaults: &PowrushDefaults) -> Self {
        Self {
            current: defaults.current.clone(),
            intensity: defaults.intensity,
            gate: defaults.gate,
            scarcity_elimination_factor: SCARCITY_NULLIFIED,
            equitable_amplification: unbounded(),
            thriving_bias: defaults.thriving_bias,
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Always 1.0.
    pub fn scarcity_elimination_factor(&self) -> f64 {
        self.scarcity_elimination_factor
    }

    pub fn equitable_amplification(&self) -> f64 {
        self.equitable_amplification
    }

    /// Applies a calibration. The bias is stored as given; the scarcity
    /// factor is forced back to 1.0 whatever it held before.
    pub fn apply_calibration(&mut self, intensity: Intensity, bias: f64) {
        self.intensity = intensity;
        self.thriving_bias = bias;
        self.scarcity_elimination_factor = SCARCITY_NULLIFIED;
    }
}

impl Default for PowerChannels {
    fn default() -> Self {
        Self::from_defaults(&PowrushDefaults::default())
    }
}
