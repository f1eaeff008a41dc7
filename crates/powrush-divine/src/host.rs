use std::fmt;
use std::sync::Arc;

/// Host capability answering free-form calibration prompts.
pub trait HigherInsight {
    fn query_higher_insight(&self, prompt: &str) -> String;
}

/// Presence-only capability: a host that provides it gets the alignment notice.
pub trait GrandmasterAlignment {}

/// Optional capabilities of the host a module attaches to. Fixed at attach
/// time and never re-probed.
#[derive(Clone, Default)]
pub struct HostCapabilities {
    insight: Option<Arc<dyn HigherInsight>>,
    alignment: Option<Arc<dyn GrandmasterAlignment>>,
}

impl HostCapabilities {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_insight(mut self, insight: Arc<dyn HigherInsight>) -> Self {
        self.insight = Some(insight);
        self
    }

    pub fn with_alignment(mut self, alignment: Arc<dyn GrandmasterAlignment>) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn insight(&self) -> Option<&dyn HigherInsight> {
        self.insight.as_deref()
    }

    pub fn has_alignment(&self) -> bool {
        self.alignment.is_some()
    }
}

impl fmt::Debug for HostCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostCapabilities")
            .field("insight", &self.insight.is_some())
            .field("alignment", &self.alignment.is_some())
            .finish()
    }
}
