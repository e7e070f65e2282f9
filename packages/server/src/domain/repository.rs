//! Message store trait.
//!
//! The use cases depend on this interface; the infrastructure layer provides
//! the implementation.

use async_trait::async_trait;

use super::{ChatMessage, MessageIndex};

/// Append-only, insertion-ordered log of every submitted message.
///
/// Once a message is stored at an index it never changes, and no message is
/// ever inserted before it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Append a message to the end of the log and return its position.
    async fn append(&self, message: ChatMessage) -> MessageIndex;

    /// All stored messages in insertion order, as of the call.
    async fn snapshot(&self) -> Vec<ChatMessage>;

    /// Number of stored messages.
    async fn count(&self) -> usize;
}
