//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// Response of `GET /api/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}

/// Response of `GET /api/stats`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsDto {
    /// Number of open sessions
    pub sessions: usize,
    /// Number of stored messages
    pub messages: usize,
    /// Server start time (RFC 3339)
    pub started_at: String,
}

/// One entry of `GET /api/sessions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDto {
    pub session_id: String,
    pub identity: Option<String>,
    /// Connection time (RFC 3339)
    pub connected_at: String,
}
