//! API availability monitor library.

pub mod config;
pub mod lifecycle;
pub mod monitor;
pub mod notify;
pub mod observability;
pub mod probe;

pub use config::AppConfig;
pub use lifecycle::Shutdown;
pub use monitor::{MonitorConfig, TransitionMonitor};
pub use notify::Notifier;
pub use probe::{HealthProbe, HealthResult};
