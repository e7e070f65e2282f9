//! Domain entities.

use super::{
    error::ValueObjectError,
    value_object::{IdentityToken, SenderName, SessionId, Timestamp},
};

/// One submitted chat message.
///
/// Immutable once created; the store owns it for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    user: SenderName,
    text: String,
}

impl ChatMessage {
    pub fn new(user: SenderName, text: String) -> Self {
        Self { user, text }
    }

    /// Build a message from raw field values, validating the sender name.
    pub fn try_from_parts(user: String, text: String) -> Result<Self, ValueObjectError> {
        Ok(Self::new(SenderName::new(user)?, text))
    }

    pub fn user(&self) -> &SenderName {
        &self.user
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// One connected client as seen by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: SessionId,
    /// Label the client declared at connect time, if any
    pub identity: Option<IdentityToken>,
    pub connected_at: Timestamp,
}

impl Session {
    pub fn new(id: SessionId, identity: Option<IdentityToken>, connected_at: Timestamp) -> Self {
        Self {
            id,
            identity,
            connected_at,
        }
    }

    /// Human readable label for logs: the identity token when present, the id otherwise.
    pub fn label(&self) -> String {
        match &self.identity {
            Some(identity) => format!("{} ({})", identity.as_str(), self.id),
            None => self.id.to_string(),
        }
    }
}
