//! In-memory repository implementations.

mod message_store;

pub use message_store::InMemoryMessageStore;
