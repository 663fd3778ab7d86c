//! Metrics collection and exposition.
//!
//! # Metrics
//! - `api_monitor_observations_total` (counter): probe results by `result`
//! - `api_monitor_transitions_total` (counter): confirmed transitions by `state`
//! - `api_monitor_notification_failures_total` (counter): failed deliveries
//! - `api_monitor_target_healthy` (gauge): 1=healthy, 0=unhealthy
//!
//! Recording without an installed recorder is a no-op.

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::monitor::HealthState;
use crate::probe::HealthResult;

/// Install the Prometheus recorder and its HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_observation(result: HealthResult) {
    metrics::counter!("api_monitor_observations_total", "result" => result.as_str()).increment(1);
}

pub fn record_transition(state: HealthState) {
    let label = match state {
        HealthState::Healthy => "healthy",
        HealthState::Unhealthy => "unhealthy",
    };
    metrics::counter!("api_monitor_transitions_total", "state" => label).increment(1);
    metrics::gauge!("api_monitor_target_healthy").set(if state.is_healthy() { 1.0 } else { 0.0 });
}

pub fn record_notification_failure() {
    metrics::counter!("api_monitor_notification_failures_total").increment(1);
}
