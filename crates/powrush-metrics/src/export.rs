use anyhow::Context;
use prometheus::{Encoder, Registry, TextEncoder};

/// Renders every family in `registry` in the Prometheus text format.
pub fn render_text(registry: &Registry) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    TextEncoder::new()
        .encode(&registry.gather(), &mut buf)
        .context("encode powrush metrics")?;
    String::from_utf8(buf).context("metrics text is not utf-8")
}
