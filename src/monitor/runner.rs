//! Polling loop driving the debounce state machine.
//!
//! # Responsibilities
//! - Probe the target once per poll interval
//! - Feed each observation through `state::evaluate`
//! - Deliver exactly one notification per confirmed transition
//! - Stop promptly when the shutdown signal fires

use tokio::sync::broadcast;
use tokio::time;

use super::message::MonitorConfig;
use super::state::{evaluate, HealthState, MonitorState, TransitionEvent};
use crate::notify::Notifier;
use crate::observability::metrics;
use crate::probe::{HealthProbe, HealthResult};

/// Watches one target and notifies on confirmed up/down transitions.
pub struct TransitionMonitor<P, N> {
    config: MonitorConfig,
    probe: P,
    notifier: N,
    state: MonitorState,
}

impl<P: HealthProbe, N: Notifier> TransitionMonitor<P, N> {
    pub fn new(config: MonitorConfig, probe: P, notifier: N) -> Self {
        Self {
            config,
            probe,
            notifier,
            state: MonitorState::new(),
        }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    /// Apply an already-obtained observation.
    pub fn observe(&mut self, observation: HealthResult) -> Option<TransitionEvent> {
        metrics::record_observation(observation);

        let (next, event) = evaluate(self.state, observation);
        if next.pending_differing && !self.state.pending_differing {
            tracing::info!(
                target = %self.config.target(),
                confirmed = %next.confirmed,
                observed = observation.as_str(),
                "Observation disagrees with confirmed state, awaiting confirmation"
            );
        }
        self.state = next;

        if let Some(event) = event {
            metrics::record_transition(event.new_state);
            match event.new_state {
                HealthState::Unhealthy => {
                    tracing::warn!(target = %self.config.target(), "API is DOWN")
                }
                HealthState::Healthy => {
                    tracing::info!(target = %self.config.target(), "API recovered from outage")
                }
            }
        }

        event
    }

    /// Probe the target once and apply the result.
    pub async fn tick(&mut self) -> Option<TransitionEvent> {
        let observation = self.probe.observe(self.config.target()).await;
        tracing::debug!(
            target = %self.config.target(),
            status = observation.as_str(),
            "Observation"
        );
        self.observe(observation)
    }

    async fn dispatch(&self, event: TransitionEvent) {
        let notification = self.config.notification(event.new_state);
        let result = self
            .notifier
            .notify(self.config.recipient(), &notification.subject, &notification.body)
            .await;

        if let Err(e) = result {
            metrics::record_notification_failure();
            tracing::error!(
                target = %self.config.target(),
                recipient = %self.config.recipient(),
                subject = %notification.subject,
                error = %e,
                "Failed to deliver notification"
            );
        }
    }

    /// Poll until `shutdown` fires (or its sender is dropped).
    ///
    /// The inter-poll sleep is the only cancellation point; a probe or
    /// notification already in progress runs to completion first.
    pub async fn run(&mut self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            target = %self.config.target(),
            recipient = %self.config.recipient(),
            interval_ms = self.config.poll_interval().as_millis() as u64,
            "Monitor starting"
        );

        loop {
            if let Some(event) = self.tick().await {
                self.dispatch(event).await;
            }

            tokio::select! {
                _ = time::sleep(self.config.poll_interval()) => {}
                _ = shutdown.recv() => {
                    tracing::info!(target = %self.config.target(), "Monitor received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }
}
