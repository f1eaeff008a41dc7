use crate::draw::{RngDraw, ThrivingDraw};
use crate::host::HostCapabilities;
use powrush_core::{
    AmplificationResult, GateState, Intensity, PowerChannels, PowrushDefaults, PowrushError,
    DEFAULT_THRIVING_BIAS,
};
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

pub const DEFAULT_SCOPE: &str = "cosmic";

/// Power module attached to a single host.
///
/// Operations take `&mut self`, so calibration and amplification on one
/// instance never interleave. Callers sharing an instance across threads
/// wrap it in one lock.
#[derive(Debug)]
pub struct PowrushDivine<D = RngDraw<StdRng>> {
    channels: PowerChannels,
    host: HostCapabilities,
    draw: D,
}

impl PowrushDivine {
    /// Attaches with default settings and an entropy-seeded draw.
    pub fn attach(host: HostCapabilities) -> Self {
        Self::fuse(
            host,
            PowerChannels::from_defaults(&PowrushDefaults::default()),
            RngDraw::from_entropy(),
        )
    }
}

impl<D: ThrivingDraw> PowrushDivine<D> {
    pub fn with_defaults(
        host: HostCapabilities,
        defaults: &PowrushDefaults,
        draw: D,
    ) -> Result<Self, PowrushError> {
        defaults.validate()?;
        Ok(Self::fuse(host, PowerChannels::from_defaults(defaults), draw))
    }

    fn fuse(host: HostCapabilities, channels: PowerChannels, draw: D) -> Self {
        info!(
            current = channels.current(),
            insight = host.insight().is_some(),
            alignment = host.has_alignment(),
            "Powrush Divine module fused, sanctified current flowing"
        );
        Self {
            channels,
            host,
            draw,
        }
    }

    pub fn channels(&self) -> &PowerChannels {
        &self.channels
    }

    pub fn host(&self) -> &HostCapabilities {
        &self.host
    }

    pub fn set_gate(&mut self, gate: GateState) {
        self.channels.gate = gate;
    }

    /// Sets intensity and bias. Unknown intensities silently become
    /// `divine_max`; the bias is stored unchecked. Returns a snapshot.
    pub fn calibrate(&mut self, intensity: &str, bias: f64) -> PowerChannels {
        let level = Intensity::parse_or_default(intensity);
        if level.as_str() != intensity {
            debug!(requested = intensity, applied = %level, "unknown intensity, using fallback");
        }
        self.channels.apply_calibration(level, bias);

        if let Some(insight) = self.host.insight() {
            let revelation =
                insight.query_higher_insight(&format!("Optimal Powrush calibration: {level}"));
            info!(%revelation, "Nexus revelation");
        }
        if self.host.has_alignment() {
            info!("Grandmasterism aligned, divine current optimized across all timelines");
        }

        info!(intensity = %level, bias, "Powrush Divine calibrated, equitable habitats amplified");
        self.channels.clone()
    }

    pub fn calibrate_default(&mut self) -> PowerChannels {
        self.calibrate(Intensity::DivineMax.as_str(), DEFAULT_THRIVING_BIAS)
    }

    /// Draws one thriving outcome and snapshots the channels.
    ///
    /// The gate is the only precondition. Both outcomes return the same
    /// shape; the fallback branch only changes the notification.
    pub fn amplify(&mut self, scope: &str, nodes: f64) -> Result<AmplificationResult, PowrushError> {
        if !self.channels.gate.is_active() {
            return Err(PowrushError::GateClosed {
                gate: self.channels.gate,
            });
        }

        let outcome = self.draw.draw(self.channels.thriving_bias);
        let result = AmplificationResult::snapshot(&self.channels, scope, nodes, outcome);

        if result.is_thriving() {
            info!(
                "[{}] Powrush Divine amplified, {} nodes in instant equitable thriving",
                scope.to_uppercase(),
                nodes
            );
        } else {
            warn!(scope, "Mercy safeguard: revival fork, thriving redirected");
        }
        Ok(result)
    }

    pub fn amplify_default(&mut self) -> Result<AmplificationResult, PowrushError> {
        self.amplify(DEFAULT_SCOPE, f64::INFINITY)
    }

    /// Formats the safeguard statement for a risk vector. Reads no state.
    pub fn query_safeguard(&self, risk_vector: &str) -> String {
        format!(
            "Divine safeguard active: {risk_vector} → mercy-gated to thriving abundance. No imbalance possible."
        )
    }
}
