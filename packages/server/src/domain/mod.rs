//! Domain layer: entities, value objects and the interfaces the use cases depend on.
//!
//! Concrete implementations of [`MessageStore`], [`SessionRegistry`] and
//! [`MessageCodec`] live in the infrastructure layer.

pub mod codec;
pub mod entity;
pub mod error;
pub mod repository;
pub mod session_registry;
pub mod value_object;

pub use codec::MessageCodec;
pub use entity::{ChatMessage, Session};
pub use error::{DeliveryError, MalformedMessage, ValueObjectError};
pub use repository::MessageStore;
pub use session_registry::{BroadcastReport, PusherChannel, SessionRegistry};
pub use value_object::{IdentityToken, MessageIndex, SenderName, SessionId, Timestamp};

#[cfg(test)]
pub use repository::MockMessageStore;
#[cfg(test)]
pub use session_registry::MockSessionRegistry;
