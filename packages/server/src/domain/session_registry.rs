//! Connection registry trait.
//!
//! The registry owns the set of open sessions and the transport handle used to
//! push payloads to each of them. The WebSocket handler creates the handle; the
//! registry only sends through it.

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{DeliveryError, Session, SessionId};

/// Per-session transport handle.
///
/// Unbounded so that enqueueing a payload never waits on the client; each
/// socket drains its own queue in a dedicated writer task.
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Outcome of one fan-out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    /// Sessions the payload was enqueued for
    pub delivered: Vec<SessionId>,
    /// Sessions whose transport had failed; they were removed from the registry
    pub dropped: Vec<SessionId>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// Add a session to the open set.
    async fn register(&self, session: Session, channel: PusherChannel);

    /// Remove a session from the open set.
    ///
    /// Returns `false` if the session was not registered. Never fails.
    async fn unregister(&self, session_id: &SessionId) -> bool;

    /// Enqueue a payload for one session.
    async fn push_to(&self, session_id: &SessionId, payload: &str) -> Result<(), DeliveryError>;

    /// Enqueue a payload for every open session, the sender included.
    ///
    /// Sessions whose transport has failed are removed instead of failing the
    /// whole broadcast.
    async fn broadcast(&self, payload: &str) -> BroadcastReport;

    /// Snapshot of the open sessions.
    async fn sessions(&self) -> Vec<Session>;

    /// Number of open sessions.
    async fn count(&self) -> usize;
}
