//! Health probing.
//!
//! # Data Flow
//! ```text
//! TransitionMonitor::tick()
//!     → HealthProbe::observe(target)
//!     → HealthResult (Healthy | Unhealthy | Indeterminate)
//!     → monitor::state::evaluate
//! ```
//!
//! # Design Decisions
//! - Probes never return errors; failures collapse into `Indeterminate`
//! - Transport and response parsing live entirely inside the probe

pub mod http;

use async_trait::async_trait;

pub use self::http::HttpProbe;

/// One observation of the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthResult {
    /// Target reported itself healthy.
    Healthy,
    /// Target answered but reported a non-OK status.
    Unhealthy,
    /// Target could not be verified (transport error, bad status, bad payload).
    Indeterminate,
}

impl HealthResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthResult::Healthy => "healthy",
            HealthResult::Unhealthy => "unhealthy",
            HealthResult::Indeterminate => "indeterminate",
        }
    }
}

/// Capability that observes a target's health on demand.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn observe(&self, target: &str) -> HealthResult;
}
