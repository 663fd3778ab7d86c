//! Configuration loading from disk, environment and command line.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{AppConfig, NotifierKind};
use crate::config::validation::{validate_config, ValidationError};

pub const ENV_TARGET: &str = "API_MONITOR_TARGET";
pub const ENV_RECIPIENT: &str = "API_MONITOR_RECIPIENT";
pub const ENV_POLL_INTERVAL_MS: &str = "API_MONITOR_POLL_INTERVAL_MS";
pub const ENV_WEBHOOK_URL: &str = "API_MONITOR_WEBHOOK_URL";
pub const ENV_SMTP_HOST: &str = "API_MONITOR_SMTP_HOST";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value}")]
    Env { key: &'static str, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Values supplied on the command line; `None` leaves the lower layer untouched.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub target: Option<String>,
    pub recipient: Option<String>,
    pub poll_interval_ms: Option<u64>,
    pub notifier: Option<NotifierKind>,
    pub webhook_url: Option<String>,
    pub smtp_host: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(target) = &self.target {
            config.monitor.target = target.clone();
        }
        if let Some(recipient) = &self.recipient {
            config.monitor.recipient = recipient.clone();
        }
        if let Some(ms) = self.poll_interval_ms {
            config.monitor.poll_interval_ms = ms;
        }
        if let Some(kind) = self.notifier {
            config.notifier.kind = kind;
        }
        if let Some(url) = &self.webhook_url {
            config.notifier.url = Some(url.clone());
        }
        if let Some(host) = &self.smtp_host {
            config.notifier.smtp_host = Some(host.clone());
        }
    }
}

/// Parse a TOML file without validating it.
pub fn load_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Apply `API_MONITOR_*` variables using `lookup` as the environment.
pub fn apply_env<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(target) = lookup(ENV_TARGET) {
        config.monitor.target = target;
    }
    if let Some(recipient) = lookup(ENV_RECIPIENT) {
        config.monitor.recipient = recipient;
    }
    if let Some(raw) = lookup(ENV_POLL_INTERVAL_MS) {
        config.monitor.poll_interval_ms = raw.trim().parse().map_err(|_| ConfigError::Env {
            key: ENV_POLL_INTERVAL_MS,
            value: raw.clone(),
        })?;
    }
    if let Some(url) = lookup(ENV_WEBHOOK_URL) {
        config.notifier.url = Some(url);
    }
    if let Some(host) = lookup(ENV_SMTP_HOST) {
        config.notifier.smtp_host = Some(host);
    }
    Ok(())
}

/// Load, layer and validate configuration.
///
/// Precedence (lowest first): defaults, file, environment, command line.
pub fn load_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_file(path)?,
        None => AppConfig::default(),
    };

    apply_env(&mut config, |key| std::env::var(key).ok())?;
    overrides.apply(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
