//! Prometheus recorder for the `metrics` facade.
//!
//! The request counters and latency histograms themselves are recorded by
//! `service_core::middleware::metrics::metrics_middleware`.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Duration;

/// `None` when another recorder already owns the global slot.
static METRICS_HANDLE: OnceLock<Option<PrometheusHandle>> = OnceLock::new();

const UPKEEP_INTERVAL: Duration = Duration::from_secs(5);

/// Install the global Prometheus recorder. Safe to call more than once; only
/// the first call installs anything.
pub fn init_metrics() {
    METRICS_HANDLE.get_or_init(|| match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to install Prometheus recorder");
            None
        }
    });
}

/// Periodically drain histogram samples so memory stays bounded.
///
/// Must be called from within a tokio runtime.
pub fn spawn_upkeep() {
    if let Some(Some(handle)) = METRICS_HANDLE.get() {
        let handle = handle.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(UPKEEP_INTERVAL);
            loop {
                interval.tick().await;
                handle.run_upkeep();
            }
        });
    }
}

pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .and_then(|handle| handle.as_ref())
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}
