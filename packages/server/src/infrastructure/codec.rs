//! JSON implementation of [`MessageCodec`].

use serde_json::Value;

use crate::{
    domain::{ChatMessage, MalformedMessage, MessageCodec},
    infrastructure::dto::websocket::ChatMessageDto,
};

/// Encodes messages as `{"user": ..., "text": ...}` JSON objects.
///
/// Extra fields on inbound payloads are ignored and never echoed back.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMessageCodec;

impl JsonMessageCodec {
    pub fn new() -> Self {
        Self
    }
}

impl MessageCodec for JsonMessageCodec {
    fn decode(&self, raw: &str) -> Result<ChatMessage, MalformedMessage> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| MalformedMessage::new(format!("invalid JSON: {}", e)))?;

        // serde would also accept a two-element array for the struct
        if !value.is_object() {
            return Err(MalformedMessage::new("payload is not a JSON object"));
        }

        let dto: ChatMessageDto = serde_json::from_value(value)
            .map_err(|e| MalformedMessage::new(e.to_string()))?;

        Ok(ChatMessage::try_from(dto)?)
    }

    fn encode(&self, message: &ChatMessage) -> String {
        let dto = ChatMessageDto::from(message);
        // A struct of two strings always serializes
        serde_json::to_string(&dto).unwrap_or_default()
    }
}
