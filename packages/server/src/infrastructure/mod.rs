//! Infrastructure layer: concrete implementations of the domain interfaces.

pub mod codec;
pub mod dto;
pub mod repository;
pub mod session_registry;
