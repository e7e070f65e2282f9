//! Global delivery order.

use tokio::sync::{Mutex, MutexGuard};

/// Serializes every step that writes to the per-session queues.
///
/// "append + fan-out" and "register + replay" both run while holding the
/// turn, so every session queue receives payloads in store order and a new
/// session neither misses nor duplicates a message around its replay.
/// Fan-out only enqueues, so the turn is never held while a client is slow.
#[derive(Debug, Default)]
pub struct DeliverySequencer {
    turn: Mutex<()>,
}

impl DeliverySequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for the turn. Released when the guard is dropped.
    pub async fn acquire(&self) -> MutexGuard<'_, ()> {
        self.turn.lock().await
    }
}
