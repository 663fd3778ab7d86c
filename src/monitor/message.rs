//! Monitor configuration and notification text.

use std::time::Duration;

use thiserror::Error;

use super::state::HealthState;

/// Errors constructing a [`MonitorConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonitorConfigError {
    #[error("poll interval must be greater than zero")]
    ZeroInterval,
}

/// Immutable settings for one monitored target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    target: String,
    recipient: String,
    poll_interval: Duration,
    down_subject: String,
    up_subject: String,
}

impl MonitorConfig {
    pub fn new(
        target: impl Into<String>,
        recipient: impl Into<String>,
        poll_interval: Duration,
    ) -> Result<Self, MonitorConfigError> {
        if poll_interval.is_zero() {
            return Err(MonitorConfigError::ZeroInterval);
        }

        let target = target.into();
        Ok(Self {
            down_subject: outage_subject(&target),
            up_subject: recovery_subject(&target),
            target,
            recipient: recipient.into(),
            poll_interval,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn down_subject(&self) -> &str {
        &self.down_subject
    }

    pub fn up_subject(&self) -> &str {
        &self.up_subject
    }

    /// Message for a confirmed transition into `state`.
    pub fn notification(&self, state: HealthState) -> Notification {
        notification_for(&self.target, state)
    }
}

/// A rendered notification ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub body: String,
}

fn outage_subject(target: &str) -> String {
    format!("URGENT: API ({}) is down!", target)
}

fn recovery_subject(target: &str) -> String {
    format!("API ({}) has recovered from an outage!", target)
}

pub fn outage_notification(target: &str) -> Notification {
    Notification {
        subject: outage_subject(target),
        body: format!(
            "This is an URGENT notification. The API @ {} is DOWN!\n\
             Two consecutive health checks failed.",
            target
        ),
    }
}

pub fn recovery_notification(target: &str) -> Notification {
    Notification {
        subject: recovery_subject(target),
        body: format!(
            "The API @ {} has recovered from an outage!\n\
             Two consecutive health checks succeeded.",
            target
        ),
    }
}

/// Build the notification for a transition of `target` into `state`.
pub fn notification_for(target: &str, state: HealthState) -> Notification {
    match state {
        HealthState::Unhealthy => outage_notification(target),
        HealthState::Healthy => recovery_notification(target),
    }
}
