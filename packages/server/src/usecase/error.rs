//! UseCase errors.

use thiserror::Error;

use crate::domain::{DeliveryError, MalformedMessage, SessionId};

/// Errors of [`super::OpenSessionUseCase`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpenSessionError {
    #[error(
        "history replay to session '{session_id}' failed after {delivered}/{total} message(s): {source}"
    )]
    ReplayFailed {
        session_id: SessionId,
        delivered: usize,
        total: usize,
        source: DeliveryError,
    },
}

/// Errors of [`super::SubmitMessageUseCase`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitMessageError {
    #[error(transparent)]
    MalformedMessage(#[from] MalformedMessage),
}
