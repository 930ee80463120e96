//! Application state and shared resources.

use std::time::Instant;

use banner_common::BannerSpec;
use metrics_exporter_prometheus::PrometheusHandle;
use renderer::BannerFont;

/// Shared application state.
pub struct AppState {
    pub spec: BannerSpec,
    pub font: BannerFont,
    /// Present when a global Prometheus recorder was installed
    pub prometheus: Option<PrometheusHandle>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(spec: BannerSpec, font: BannerFont) -> Self {
        Self {
            spec,
            font,
            prometheus: None,
            started_at: Instant::now(),
        }
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}
