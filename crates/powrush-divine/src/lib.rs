pub mod council;
pub mod draw;
pub mod host;
pub mod module;

pub use council::{Proposal, VoteResult, UNANIMOUS_SCORE};
pub use draw::{RngDraw, ThrivingDraw};
pub use host::{GrandmasterAlignment, HigherInsight, HostCapabilities};
pub use module::{PowrushDivine, DEFAULT_SCOPE};
pub use powrush_core::{
    AmplificationResult, GateState, Intensity, PowerChannels, PowrushDefaults, PowrushError,
    ThrivingOutcome,
};
