//! In-memory message store.
//!
//! History lives only as long as the process; nothing is persisted and there
//! is no retention limit.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{ChatMessage, MessageIndex, MessageStore};

/// `Vec`-backed implementation of [`MessageStore`].
///
/// Appends take the write lock, so position assignment is atomic and a
/// snapshot never observes the length changing mid-copy.
#[derive(Debug, Default)]
pub struct InMemoryMessageStore {
    messages: RwLock<Vec<ChatMessage>>,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn append(&self, message: ChatMessage) -> MessageIndex {
        let mut messages = self.messages.write().await;
        messages.push(message);
        MessageIndex::new(messages.len() - 1)
    }

    async fn snapshot(&self) -> Vec<ChatMessage> {
        self.messages.read().await.clone()
    }

    async fn count(&self) -> usize {
        self.messages.read().await.len()
    }
}
