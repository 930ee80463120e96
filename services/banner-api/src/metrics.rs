//! Render metrics, exported through the Prometheus recorder.

use std::time::Duration;

use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

pub const RENDERS_TOTAL: &str = "banner_renders_total";
pub const RENDER_ERRORS_TOTAL: &str = "banner_render_errors_total";
pub const RENDER_DURATION_SECONDS: &str = "banner_render_duration_seconds";
pub const PNG_BYTES: &str = "banner_png_bytes";

/// Install the global recorder. Can only succeed once per process.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    describe_counter!(RENDERS_TOTAL, "Banner images rendered successfully");
    describe_counter!(RENDER_ERRORS_TOTAL, "Banner renders that failed");
    describe_histogram!(RENDER_DURATION_SECONDS, Unit::Seconds, "Time to compose and encode a banner");
    describe_histogram!(PNG_BYTES, Unit::Bytes, "Size of the encoded PNG");

    Ok(handle)
}

pub fn record_render(elapsed: Duration, png_bytes: usize) {
    counter!(RENDERS_TOTAL).increment(1);
    histogram!(RENDER_DURATION_SECONDS).record(elapsed.as_secs_f64());
    histogram!(PNG_BYTES).record(png_bytes as f64);
}

pub fn record_render_error() {
    counter!(RENDER_ERRORS_TOTAL).increment(1);
}
