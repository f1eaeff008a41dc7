pub mod export;
pub mod metrics;

pub use export::render_text;
pub use metrics::{PowrushMetrics, MAX_SCOPE_LABELS, OTHER_SCOPE};
