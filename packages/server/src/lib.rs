//! Real-time broadcast chat server library.
//!
//! Clients connect over WebSocket, submit `{user, text}` messages and receive
//! every message in one global order, starting with a replay of the history.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
