//! Email notifier (SMTP relay).
//!
//! One SMTP session per notification: connect, optional STARTTLS and AUTH,
//! a single plain-text message, QUIT.

use std::time::Duration;

use async_trait::async_trait;
use lettre::address::AddressError;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::Error as SmtpError;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use super::{Notifier, NotifyError};
use crate::config::NotifierConfig;

/// Reasons an [`EmailNotifier`] cannot be built from config.
#[derive(Debug, Error)]
pub enum EmailSetupError {
    #[error("email notifier requires notifier.smtp_host")]
    MissingHost,

    #[error("email notifier requires notifier.from")]
    MissingFrom,

    #[error("invalid sender address: {0}")]
    From(#[from] AddressError),

    #[error("failed to configure SMTP relay: {0}")]
    Relay(#[from] SmtpError),
}

pub struct EmailNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl EmailNotifier {
    pub fn new(config: &NotifierConfig) -> Result<Self, EmailSetupError> {
        let host = config
            .smtp_host
            .as_deref()
            .ok_or(EmailSetupError::MissingHost)?;
        let from: Mailbox = config
            .from
            .as_deref()
            .ok_or(EmailSetupError::MissingFrom)?
            .parse()?;

        let mut builder = if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
        };
        builder = builder
            .port(config.smtp_port)
            .timeout(Some(Duration::from_secs(config.timeout_secs)));

        if let (Some(user), Some(pass)) = (&config.smtp_username, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }

    fn compose(&self, recipient: &str, subject: &str, body: &str) -> Result<Message, NotifyError> {
        let to: Mailbox = recipient
            .parse()
            .map_err(|e: AddressError| NotifyError::Compose(format!("recipient '{}': {}", recipient, e)))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| NotifyError::Compose(e.to_string()))
    }
}

/// Permanent and transient SMTP replies carry a code; anything else is a transport failure.
fn classify(err: SmtpError) -> NotifyError {
    match err.status() {
        Some(code) => NotifyError::Rejected {
            status: code.to_string().parse().unwrap_or(0),
            body: err.to_string(),
        },
        None => NotifyError::Transport(err.to_string()),
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn notify(&self, recipient: &str, subject: &str, body: &str) -> Result<(), NotifyError> {
        let message = self.compose(recipient, subject, body)?;
        self.transport.send(message).await.map_err(classify)?;

        tracing::debug!(recipient = %recipient, subject = %subject, "Email notification delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NotifierKind;

    fn email_config() -> NotifierConfig {
        NotifierConfig {
            kind: NotifierKind::Email,
            smtp_host: Some("127.0.0.1".into()),
            from: Some("Monitor <monitor@example.com>".into()),
            ..NotifierConfig::default()
        }
    }

    #[test]
    fn test_requires_host_and_sender() {
        let mut config = email_config();
        config.smtp_host = None;
        assert!(matches!(
            EmailNotifier::new(&config),
            Err(EmailSetupError::MissingHost)
        ));

        let mut config = email_config();
        config.from = None;
        assert!(matches!(
            EmailNotifier::new(&config),
            Err(EmailSetupError::MissingFrom)
        ));

        let mut config = email_config();
        config.from = Some("not an address".into());
        assert!(matches!(
            EmailNotifier::new(&config),
            Err(EmailSetupError::From(_))
        ));
    }

    #[tokio::test]
    async fn test_bad_recipient_fails_before_connecting() {
        let notifier = EmailNotifier::new(&email_config()).unwrap();
        let err = notifier.notify("nobody", "subject", "body").await.unwrap_err();
        assert!(matches!(err, NotifyError::Compose(_)));
    }

    #[test]
    fn test_message_headers() {
        let notifier = EmailNotifier::new(&email_config()).unwrap();
        let message = notifier
            .compose("ops@example.com", "API is down", "line one\nline two")
            .unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("From: Monitor <monitor@example.com>"));
        assert!(raw.contains("To: ops@example.com"));
        assert!(raw.contains("Subject: API is down"));
        assert!(raw.contains("line one"));
    }
}
