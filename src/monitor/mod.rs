//! Transition monitoring subsystem.
//!
//! # Data Flow
//! ```text
//! runner.rs (poll loop)
//!     → HealthProbe::observe(target)
//!     → state.rs (debounce: two consecutive disagreements confirm)
//!     → TransitionEvent (only on confirmed change)
//!     → message.rs (subject/body for the new state)
//!     → Notifier::notify(recipient, subject, body)
//!     → sleep(poll_interval) or shutdown
//! ```
//!
//! # Design Decisions
//! - Single task per target: one probe, at most one notify, then sleep
//! - Belief starts Healthy; no history survives a restart
//! - State advances before notifying; failed delivery never rolls it back

pub mod message;
pub mod runner;
pub mod state;

pub use message::{
    notification_for, outage_notification, recovery_notification, MonitorConfig,
    MonitorConfigError, Notification,
};
pub use runner::TransitionMonitor;
pub use state::{evaluate, HealthState, MonitorState, TransitionEvent};
