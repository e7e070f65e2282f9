//! WebSocket payload DTOs.

use serde::{Deserialize, Serialize};

/// Chat payload exchanged over the WebSocket, in both directions.
///
/// ```json
/// {"user": "alice", "text": "hi"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessageDto {
    pub user: String,
    pub text: String,
}
