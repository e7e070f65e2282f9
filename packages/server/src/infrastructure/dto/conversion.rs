//! Conversion logic between DTOs and domain entities.

use hiroba_shared::time::timestamp_to_rfc3339;

use crate::domain::{ChatMessage, Session, ValueObjectError};
use crate::infrastructure::dto::{http::SessionDto, websocket::ChatMessageDto};

// ========================================
// DTO → Domain Entity
// ========================================

impl TryFrom<ChatMessageDto> for ChatMessage {
    type Error = ValueObjectError;

    fn try_from(dto: ChatMessageDto) -> Result<Self, Self::Error> {
        ChatMessage::try_from_parts(dto.user, dto.text)
    }
}

// ========================================
// Domain Entity → DTO
// ========================================

impl From<&ChatMessage> for ChatMessageDto {
    fn from(model: &ChatMessage) -> Self {
        Self {
            user: model.user().as_str().to_string(),
            text: model.text().to_string(),
        }
    }
}

impl From<Session> for SessionDto {
    fn from(model: Session) -> Self {
        Self {
            session_id: model.id.to_string(),
            identity: model.identity.map(|identity| identity.into_string()),
            connected_at: timestamp_to_rfc3339(model.connected_at.value()),
        }
    }
}
