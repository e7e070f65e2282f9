//! UseCase layer: the transport-facing entry points of the broadcast engine.
//!
//! - `OpenSessionUseCase`: register a session and replay history to it
//! - `SubmitMessageUseCase`: decode, append and fan out one message
//! - `CloseSessionUseCase`: remove a session
//! - `GetBroadcastStateUseCase`: read-only view for the HTTP API

mod close_session;
mod error;
mod get_broadcast_state;
mod open_session;
mod sequencer;
mod submit_message;

pub use close_session::CloseSessionUseCase;
pub use error::{OpenSessionError, SubmitMessageError};
pub use get_broadcast_state::{BroadcastState, GetBroadcastStateUseCase};
pub use open_session::OpenSessionUseCase;
pub use sequencer::DeliverySequencer;
pub use submit_message::{SubmitMessageUseCase, SubmitOutcome};
