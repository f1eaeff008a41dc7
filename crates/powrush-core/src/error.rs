use crate::channels::GateState;
use thiserror::Error;

/// Errors surfaced by the power module.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PowrushError {
    /// Only produced by strict parsing. Calibration coerces instead of raising it.
    #[error("invalid intensity: {0}")]
    InvalidIntensity(String),
    #[error("mercy gate inactive ({gate}): divine current cannot flow")]
    GateClosed { gate: GateState },
    #[error("invalid defaults: {0}")]
    Config(String),
}
