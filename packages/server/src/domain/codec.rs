//! Wire codec trait.

use super::{ChatMessage, MalformedMessage};

/// Converts between raw payloads and [`ChatMessage`].
///
/// Inbound and outbound payloads share the same encoding, so a decoded
/// message re-encodes to the same two fields.
pub trait MessageCodec: Send + Sync {
    fn decode(&self, raw: &str) -> Result<ChatMessage, MalformedMessage>;

    fn encode(&self, message: &ChatMessage) -> String;
}
