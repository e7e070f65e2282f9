//! UseCase: 配信状態の取得

use std::sync::Arc;

use crate::domain::{MessageStore, Session, SessionRegistry};

/// Read-only view of the broadcast engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastState {
    /// Open sessions, oldest first
    pub sessions: Vec<Session>,
    /// Number of stored messages
    pub message_count: usize,
}

/// 配信状態取得のユースケース
pub struct GetBroadcastStateUseCase {
    store: Arc<dyn MessageStore>,
    registry: Arc<dyn SessionRegistry>,
}

impl GetBroadcastStateUseCase {
    pub fn new(store: Arc<dyn MessageStore>, registry: Arc<dyn SessionRegistry>) -> Self {
        Self { store, registry }
    }

    pub async fn execute(&self) -> BroadcastState {
        BroadcastState {
            sessions: self.registry.sessions().await,
            message_count: self.store.count().await,
        }
    }
}
