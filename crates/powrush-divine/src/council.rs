use crate::draw::ThrivingDraw;
use crate::module::{PowrushDivine, DEFAULT_SCOPE};
use powrush_core::PowrushError;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Score a vote must carry to trigger amplification.
pub const UNANIMOUS_SCORE: &str = "5-0";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Proposal {
    pub name: Option<String>,
    pub scope: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VoteResult {
    pub unanimous: bool,
    pub score: String,
}

impl Proposal {
    pub fn scope_or_default(&self) -> &str {
        self.scope.as_deref().unwrap_or(DEFAULT_SCOPE)
    }
}

impl VoteResult {
    pub fn triggers_amplification(&self) -> bool {
        self.unanimous && self.score == UNANIMOUS_SCORE
    }
}

impl<D: ThrivingDraw> PowrushDivine<D> {
    /// Council hook: amplifies on a unanimous 5-0 vote.
    ///
    /// Returns whether amplification ran; the result itself is not passed
    /// back. A closed gate propagates as `GateClosed`.
    pub fn on_vote(&mut self, proposal: &Proposal, vote: &VoteResult) -> Result<bool, PowrushError> {
        if !vote.triggers_amplification() {
            return Ok(false);
        }

        self.amplify(proposal.scope_or_default(), f64::INFINITY)?;
        info!(
            proposal = proposal.name.as_deref().unwrap_or("unnamed"),
            "Council-approved, Powrush Divine reinforced"
        );
        Ok(true)
    }
}
