//! Startup orchestration.
//!
//! # Responsibilities
//! - Turn a validated `AppConfig` into a ready-to-run monitor
//! - Pick the notifier implementation (log, webhook or email) named in config
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Construction does no I/O; the first probe happens in `run()`

use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::config::{AppConfig, NotifierConfig, NotifierKind};
use crate::monitor::{MonitorConfigError, TransitionMonitor};
use crate::notify::{EmailNotifier, EmailSetupError, LogNotifier, Notifier, WebhookNotifier};
use crate::probe::HttpProbe;

pub type DynNotifier = Box<dyn Notifier>;

/// Monitor as wired by the binary.
pub type AppMonitor = TransitionMonitor<HttpProbe, DynNotifier>;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Monitor(#[from] MonitorConfigError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("webhook notifier requires a URL")]
    MissingWebhookUrl,

    #[error("invalid webhook URL: {0}")]
    WebhookUrl(#[from] url::ParseError),

    #[error(transparent)]
    Email(#[from] EmailSetupError),
}

pub fn build_notifier(config: &NotifierConfig) -> Result<DynNotifier, StartupError> {
    match config.kind {
        NotifierKind::Log => Ok(Box::new(LogNotifier::new())),
        NotifierKind::Webhook => {
            let raw = config.url.as_deref().ok_or(StartupError::MissingWebhookUrl)?;
            let url = Url::parse(raw)?;
            let notifier = WebhookNotifier::new(
                url,
                config.bearer_token.clone(),
                Duration::from_secs(config.timeout_secs),
            )?;
            Ok(Box::new(notifier))
        }
        NotifierKind::Email => Ok(Box::new(EmailNotifier::new(config)?)),
    }
}

pub fn build_monitor(config: &AppConfig) -> Result<AppMonitor, StartupError> {
    let monitor_config = config.monitor_config()?;
    let probe = HttpProbe::new(&config.probe)?;
    let notifier = build_notifier(&config.notifier)?;

    tracing::debug!(
        notifier = ?config.notifier.kind,
        timeout_secs = config.probe.timeout_secs,
        "Monitor components initialized"
    );

    Ok(TransitionMonitor::new(monitor_config, probe, notifier))
}
