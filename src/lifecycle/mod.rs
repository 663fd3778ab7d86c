//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build probe + notifier → TransitionMonitor
//!
//! Shutdown (shutdown.rs):
//!     Signal received → broadcast → monitor leaves its sleep → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: logging first, then config, then the monitor
//! - Shutdown never interrupts an in-flight probe or notification

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
