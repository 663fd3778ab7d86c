//! Notification delivery.
//!
//! # Data Flow
//! ```text
//! Confirmed transition
//!     → MonitorConfig::notification(state) (subject + body)
//!     → Notifier::notify(recipient, subject, body)
//!     → log.rs (structured log event)
//!       or webhook.rs (HTTP POST)
//!       or email.rs (SMTP relay)
//! ```
//!
//! # Design Decisions
//! - Notifiers do not retry; a failure is reported once and dropped
//! - Object-safe trait so the channel can be picked from config at runtime

pub mod email;
pub mod log;
pub mod webhook;

use async_trait::async_trait;
use thiserror::Error;

pub use self::email::{EmailNotifier, EmailSetupError};
pub use self::log::LogNotifier;
pub use self::webhook::WebhookNotifier;

/// Delivery failure reported by a [`Notifier`].
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification transport failed: {0}")]
    Transport(String),

    #[error("notification rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("notification could not be composed: {0}")]
    Compose(String),
}

/// Capability that delivers a message to a recipient.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, recipient: &str, subject: &str, body: &str) -> Result<(), NotifyError>;
}

#[async_trait]
impl<T: Notifier + ?Sized> Notifier for Box<T> {
    async fn notify(&self, recipient: &str, subject: &str, body: &str) -> Result<(), NotifyError> {
        (**self).notify(recipient, subject, body).await
    }
}
