//! UI layer: the axum transport that drives the use cases.

mod handler;
mod server;
mod signal;
pub mod state;

pub use server::Server;
