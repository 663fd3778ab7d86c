//! Notifier that writes to the structured log.

use async_trait::async_trait;

use super::{Notifier, NotifyError};

#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, recipient: &str, subject: &str, body: &str) -> Result<(), NotifyError> {
        tracing::warn!(
            recipient = %recipient,
            subject = %subject,
            body = %body.trim(),
            "Notification"
        );
        Ok(())
    }
}
