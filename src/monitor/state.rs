//! Debounced health state machine.
//!
//! # States
//! - Healthy: target believed up (initial belief)
//! - Unhealthy: target believed down
//!
//! # State Transitions
//! ```text
//! Healthy → Unhealthy: two consecutive non-healthy observations
//! Unhealthy → Healthy: two consecutive healthy observations
//! ```
//!
//! # Design Decisions
//! - `Indeterminate` observations count as unhealthy
//! - Any agreeing observation clears the pending disagreement
//! - Evaluation is a pure function so it can be tested without timers or I/O

use std::fmt;

use crate::probe::HealthResult;

/// Confirmed belief about the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthState {
    Healthy,
    Unhealthy,
}

impl HealthState {
    /// Map a raw observation onto the state it argues for.
    pub fn from_observation(observation: HealthResult) -> Self {
        match observation {
            HealthResult::Healthy => HealthState::Healthy,
            HealthResult::Unhealthy | HealthResult::Indeterminate => HealthState::Unhealthy,
        }
    }

    pub fn is_healthy(self) -> bool {
        self == HealthState::Healthy
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthState::Healthy => f.write_str("healthy"),
            HealthState::Unhealthy => f.write_str("unhealthy"),
        }
    }
}

/// Emitted exactly when the confirmed state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionEvent {
    pub new_state: HealthState,
}

/// Mutable belief owned by a single monitor loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorState {
    /// Last confirmed belief.
    pub confirmed: HealthState,
    /// One unconfirmed disagreement is outstanding.
    pub pending_differing: bool,
}

impl MonitorState {
    pub fn new() -> Self {
        Self {
            confirmed: HealthState::Healthy,
            pending_differing: false,
        }
    }

    pub fn confirmed_healthy(&self) -> bool {
        self.confirmed.is_healthy()
    }
}

impl Default for MonitorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply one observation to the current state.
///
/// | confirmed | observation | pending | event        | pending after |
/// |-----------|-------------|---------|--------------|---------------|
/// | X         | agrees      | any     | none         | false         |
/// | X         | differs     | false   | none         | true          |
/// | X         | differs     | true    | confirm new  | false         |
pub fn evaluate(
    state: MonitorState,
    observation: HealthResult,
) -> (MonitorState, Option<TransitionEvent>) {
    let observed = HealthState::from_observation(observation);

    if observed == state.confirmed {
        return (
            MonitorState {
                confirmed: state.confirmed,
                pending_differing: false,
            },
            None,
        );
    }

    if !state.pending_differing {
        return (
            MonitorState {
                confirmed: state.confirmed,
                pending_differing: true,
            },
            None,
        );
    }

    (
        MonitorState {
            confirmed: observed,
            pending_differing: false,
        },
        Some(TransitionEvent { new_state: observed }),
    )
}
