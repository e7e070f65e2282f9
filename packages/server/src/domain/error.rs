//! Domain errors.

use thiserror::Error;

use super::value_object::SessionId;

/// Value object validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("sender name must not be empty")]
    EmptySenderName,

    #[error("identity token must not be empty")]
    EmptyIdentityToken,

    #[error("identity token must be at most {0} characters")]
    IdentityTokenTooLong(usize),
}

/// An inbound payload that cannot be interpreted as a `{user, text}` message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed message: {reason}")]
pub struct MalformedMessage {
    pub reason: String,
}

impl MalformedMessage {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<ValueObjectError> for MalformedMessage {
    fn from(error: ValueObjectError) -> Self {
        Self::new(error.to_string())
    }
}

/// Failure to hand a payload to one session's transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("session '{0}' is not registered")]
    SessionNotFound(SessionId),

    #[error("transport of session '{0}' is closed")]
    ChannelClosed(SessionId),
}
