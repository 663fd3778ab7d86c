//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (intervals and timeouts > 0)
//! - Check URLs, mailboxes and socket addresses parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use lettre::message::Mailbox;
use thiserror::Error;
use url::Url;

use crate::config::schema::{AppConfig, NotifierKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("monitor.target '{0}' is not a valid http(s) URL")]
    InvalidTarget(String),

    #[error("monitor.recipient must not be empty")]
    EmptyRecipient,

    #[error("monitor.poll_interval_ms must be greater than zero")]
    ZeroPollInterval,

    #[error("probe.timeout_secs must be greater than zero")]
    ZeroProbeTimeout,

    #[error("probe.status_field must not be empty")]
    EmptyStatusField,

    #[error("notifier.url is required for the webhook notifier")]
    MissingWebhookUrl,

    #[error("notifier.url '{0}' is not a valid http(s) URL")]
    InvalidWebhookUrl(String),

    #[error("notifier.timeout_secs must be greater than zero")]
    ZeroNotifierTimeout,

    #[error("notifier.smtp_host is required for the email notifier")]
    MissingSmtpHost,

    #[error("notifier.smtp_port must be greater than zero")]
    ZeroSmtpPort,

    #[error("notifier.from is required for the email notifier")]
    MissingSender,

    #[error("notifier.from '{0}' is not a valid mailbox")]
    InvalidSender(String),

    #[error("monitor.recipient '{0}' is not a valid mailbox")]
    InvalidRecipientMailbox(String),

    #[error("notifier.smtp_username and notifier.smtp_password must be set together")]
    PartialSmtpCredentials,

    #[error("observability.metrics_address '{0}' is not a socket address")]
    InvalidMetricsAddress(String),
}

fn is_mailbox(raw: &str) -> bool {
    raw.parse::<Mailbox>().is_ok()
}

fn is_http_url(raw: &str) -> bool {
    Url::parse(raw)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
        .unwrap_or(false)
}

pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !is_http_url(&config.monitor.target) {
        errors.push(ValidationError::InvalidTarget(config.monitor.target.clone()));
    }
    if config.monitor.recipient.trim().is_empty() {
        errors.push(ValidationError::EmptyRecipient);
    }
    if config.monitor.poll_interval_ms == 0 {
        errors.push(ValidationError::ZeroPollInterval);
    }

    if config.probe.timeout_secs == 0 {
        errors.push(ValidationError::ZeroProbeTimeout);
    }
    if config.probe.status_field.is_empty() {
        errors.push(ValidationError::EmptyStatusField);
    }

    if config.notifier.kind == NotifierKind::Webhook {
        match &config.notifier.url {
            None => errors.push(ValidationError::MissingWebhookUrl),
            Some(url) if !is_http_url(url) => {
                errors.push(ValidationError::InvalidWebhookUrl(url.clone()))
            }
            Some(_) => {}
        }
    }

    if config.notifier.kind == NotifierKind::Email {
        let notifier = &config.notifier;
        match notifier.smtp_host.as_deref().map(str::trim) {
            None | Some("") => errors.push(ValidationError::MissingSmtpHost),
            Some(_) => {}
        }
        if notifier.smtp_port == 0 {
            errors.push(ValidationError::ZeroSmtpPort);
        }
        match &notifier.from {
            None => errors.push(ValidationError::MissingSender),
            Some(from) if !is_mailbox(from) => {
                errors.push(ValidationError::InvalidSender(from.clone()))
            }
            Some(_) => {}
        }
        if !config.monitor.recipient.trim().is_empty() && !is_mailbox(&config.monitor.recipient) {
            errors.push(ValidationError::InvalidRecipientMailbox(
                config.monitor.recipient.clone(),
            ));
        }
        if notifier.smtp_username.is_some() != notifier.smtp_password.is_some() {
            errors.push(ValidationError::PartialSmtpCredentials);
        }
    }

    if config.notifier.kind != NotifierKind::Log && config.notifier.timeout_secs == 0 {
        errors.push(ValidationError::ZeroNotifierTimeout);
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
