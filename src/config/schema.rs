//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::monitor::{MonitorConfig, MonitorConfigError};

/// Recipient used when neither the file, environment nor CLI name one.
pub const DEFAULT_RECIPIENT: &str = "support@localhost";

/// Root configuration for the monitor.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Target, recipient and cadence.
    pub monitor: MonitorSection,

    /// HTTP probe settings.
    pub probe: ProbeConfig,

    /// Notification channel.
    pub notifier: NotifierConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Build the immutable engine config.
    pub fn monitor_config(&self) -> Result<MonitorConfig, MonitorConfigError> {
        MonitorConfig::new(
            self.monitor.target.clone(),
            self.monitor.recipient.clone(),
            Duration::from_millis(self.monitor.poll_interval_ms),
        )
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct MonitorSection {
    /// Health endpoint URL.
    pub target: String,

    /// Who gets notified on transitions.
    pub recipient: String,

    /// Delay between observations in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for MonitorSection {
    fn default() -> Self {
        Self {
            target: "http://localhost:8080/health".to_string(),
            recipient: DEFAULT_RECIPIENT.to_string(),
            poll_interval_ms: 5_000,
        }
    }
}

/// HTTP probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProbeConfig {
    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// JSON field carrying the reported status.
    pub status_field: String,

    /// Value of `status_field` that means healthy.
    pub ok_status: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            status_field: "status".to_string(),
            ok_status: "OK".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NotifierKind {
    #[default]
    Log,
    Webhook,
    Email,
}

/// Notification channel configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct NotifierConfig {
    pub kind: NotifierKind,

    /// Webhook URL (required for `webhook`).
    pub url: Option<String>,

    /// Optional bearer token sent with webhook requests.
    pub bearer_token: Option<String>,

    /// Webhook request or SMTP session timeout in seconds.
    pub timeout_secs: u64,

    /// SMTP relay host (required for `email`).
    pub smtp_host: Option<String>,

    pub smtp_port: u16,

    /// Upgrade the SMTP session with STARTTLS.
    pub starttls: bool,

    /// Sender mailbox, e.g. `"Monitor <monitor@example.com>"`.
    pub from: Option<String>,

    /// SMTP credentials; both or neither.
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            kind: NotifierKind::Log,
            url: None,
            bearer_token: None,
            timeout_secs: 10,
            smtp_host: None,
            smtp_port: 25,
            starttls: false,
            from: None,
            smtp_username: None,
            smtp_password: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    pub log_format: LogFormat,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
