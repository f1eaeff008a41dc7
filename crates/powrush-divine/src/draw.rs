use powrush_core::ThrivingOutcome;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the binary thriving draw.
///
/// Implemented for any `FnMut(f64) -> ThrivingOutcome`, so tests can pin the
/// outcome with a closure.
pub trait ThrivingDraw {
    fn draw(&mut self, bias: f64) -> ThrivingOutcome;
}

impl<F> ThrivingDraw for F
where
    F: FnMut(f64) -> ThrivingOutcome,
{
    fn draw(&mut self, bias: f64) -> ThrivingOutcome {
        self(bias)
    }
}

/// Draws from a `rand` generator: thriving when a uniform sample in [0, 1)
/// falls below the bias. A bias >= 1 always thrives; a bias <= 0 or NaN
/// never does.
#[derive(Debug, Clone)]
pub struct RngDraw<R> {
    rng: R,
}

impl<R: Rng> RngDraw<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngDraw<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ThrivingDraw for RngDraw<R> {
    fn draw(&mut self, bias: f64) -> ThrivingOutcome {
        let sample: f64 = self.rng.gen();
        ThrivingOutcome::from_success(sample < bias)
    }
}
