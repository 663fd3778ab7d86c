//! Shutdown coordination for the monitor.
//!
//! One `Shutdown` is owned by `main`; each monitor loop holds a receiver and
//! selects on it during the inter-poll sleep. Dropping the coordinator closes
//! the channel, which loops treat the same as an explicit trigger.

use tokio::sync::broadcast;

/// Broadcasts a single stop signal to every subscribed monitor loop.
///
/// Subscribe before triggering; a receiver created afterwards misses the signal.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Signal every loop to stop and return how many were listening.
    ///
    /// Zero means every loop has already exited.
    pub fn trigger(&self) -> usize {
        self.tx.send(()).unwrap_or(0)
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
