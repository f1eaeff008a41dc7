use crate::channels::PowerChannels;
use crate::intensity::Intensity;
use serde::{Deserialize, Serialize};

pub const SCARCITY_STATUS: &str = "permanently_eliminated";

/// Binary result of a thriving draw.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ThrivingOutcome {
    Thriving,
    SafeguardFallback,
}

impl ThrivingOutcome {
    pub fn from_success(success: bool) -> Self {
        if success {
            ThrivingOutcome::Thriving
        } else {
            ThrivingOutcome::SafeguardFallback
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThrivingOutcome::Thriving => "thriving",
            ThrivingOutcome::SafeguardFallback => "safeguard_fallback",
        }
    }
}

/// Snapshot returned by one amplification. Both outcomes share this shape;
/// callers branch on `outcome`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AmplificationResult {
    pub scope: String,
    /// `f64::INFINITY` means unbounded.
    pub nodes_covered: f64,
    pub power_infused: String,
    pub intensity: Intensity,
    pub scarcity_status: String,
    pub equitable_amplification: f64,
    pub outcome: ThrivingOutcome,
}

impl AmplificationResult {
    pub fn snapshot(
        channels: &PowerChannels,
        scope: impl Into<String>,
        nodes: f64,
        outcome: ThrivingOutcome,
    ) -> Self {
        Self {
            scope: scope.into(),
            nodes_covered: nodes,
            power_infused: channels.current().to_string(),
            intensity: channels.intensity,
            scarcity_status: SCARCITY_STATUS.to_string(),
            equitable_amplification: channels.equitable_amplification(),
            outcome,
        }
    }

    pub fn is_thriving(&self) -> bool {
        self.outcome == ThrivingOutcome::Thriving
    }

    /// 1.0 for a thriving draw, 0.0 for the fallback.
    pub fn thriving_probability(&self) -> f64 {
        if self.is_thriving() {
            1.0
        } else {
            0.0
        }
    }
}
