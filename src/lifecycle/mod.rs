//! Graceful-shutdown coordination.
//!
//! Production relies on Ctrl+C; tests drive the broadcast channel directly
//! to stop a spawned server.

use tokio::sync::broadcast;

/// Hands out shutdown receivers and lets any holder trigger a coordinated
/// stop.
#[derive(Debug)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
