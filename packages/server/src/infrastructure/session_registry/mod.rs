//! Connection registry implementations.
//!
//! - `websocket`: registry of WebSocket sessions backed by per-session channels

pub mod websocket;

pub use websocket::WebSocketSessionRegistry;
