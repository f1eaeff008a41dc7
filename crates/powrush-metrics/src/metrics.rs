use powrush_core::{AmplificationResult, PowerChannels, ThrivingOutcome};
use prometheus::{
    register_gauge_with_registry, register_int_counter_vec_with_registry, Gauge, IntCounterVec,
    Registry,
};
use std::collections::HashSet;
use std::sync::Mutex;

/// Distinct scope label values kept before new scopes fold into `OTHER_SCOPE`.
pub const MAX_SCOPE_LABELS: usize = 32;
pub const OTHER_SCOPE: &str = "other";

pub struct PowrushMetrics {
    pub calibrations_total: IntCounterVec,
    pub amplifications_total: IntCounterVec,
    pub vote_triggers_total: IntCounterVec,
    pub thriving_bias: Gauge,
    scopes: Mutex<HashSet<String>>,
}

impl PowrushMetrics {
    pub fn new(registry: &Registry) -> prometheus::Result<Self> {
        let calibrations_total = register_int_counter_vec_with_registry!(
            "powrush_calibrations_total",
            "Calibrations applied per intensity",
            &["intensity"],
            registry
        )?;

        let amplifications_total = register_int_counter_vec_with_registry!(
            "powrush_amplifications_total",
            "Amplifications per scope and drawn outcome",
            &["scope", "outcome"],
            registry
        )?;

        let vote_triggers_total = register_int_counter_vec_with_registry!(
            "powrush_vote_triggers_total",
            "Council votes seen, split by whether they triggered amplification",
            &["triggered"],
            registry
        )?;

        let thriving_bias = register_gauge_with_registry!(
            "powrush_thriving_bias",
            "Thriving bias after the latest calibration",
            registry
        )?;

        Ok(Self {
            calibrations_total,
            amplifications_total,
            vote_triggers_total,
            thriving_bias,
            scopes: Mutex::new(HashSet::new()),
        })
    }

    pub fn observe_calibration(&self, channels: &PowerChannels) {
        self.calibrations_total
            .with_label_values(&[channels.intensity.as_str()])
            .inc();
        self.thriving_bias.set(channels.thriving_bias);
    }

    /// Scopes are free-form, so only the first `MAX_SCOPE_LABELS` distinct
    /// values get their own series; later ones count under `OTHER_SCOPE`.
    pub fn observe_amplification(&self, result: &AmplificationResult) {
        let scope = self.scope_label(&result.scope);
        self.amplifications_total
            .with_label_values(&[scope.as_str(), result.outcome.as_str()])
            .inc();
    }

    fn scope_label(&self, scope: &str) -> String {
        let mut seen = match self.scopes.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if seen.contains(scope) {
            return scope.to_string();
        }
        if seen.len() < MAX_SCOPE_LABELS {
            seen.insert(scope.to_string());
            return scope.to_string();
        }
        OTHER_SCOPE.to_string()
    }

    pub fn observe_vote(&self, triggered: bool) {
        let label = if triggered { "true" } else { "false" };
        self.vote_triggers_total.with_label_values(&[label]).inc();
    }

    /// Reads the counter for an exact label value, `OTHER_SCOPE` included.
    pub fn outcome_count(&self, scope: &str, outcome: ThrivingOutcome) -> u64 {
        self.amplifications_total
            .with_label_values(&[scope, outcome.as_str()])
            .get()
    }
}
