//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    infrastructure::dto::http::{HealthDto, SessionDto, StatsDto},
    ui::state::AppState,
};
use hiroba_shared::time::timestamp_to_rfc3339;

/// Health check endpoint
pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}

/// Number of open sessions and stored messages
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsDto> {
    let broadcast_state = state.get_broadcast_state_usecase.execute().await;

    Json(StatsDto {
        sessions: broadcast_state.sessions.len(),
        messages: broadcast_state.message_count,
        started_at: timestamp_to_rfc3339(state.started_at.value()),
    })
}

/// List of open sessions, oldest first
pub async fn get_sessions(State(state): State<Arc<AppState>>) -> Json<Vec<SessionDto>> {
    let broadcast_state = state.get_broadcast_state_usecase.execute().await;

    // Domain Model から DTO への変換
    let sessions = broadcast_state
        .sessions
        .into_iter()
        .map(SessionDto::from)
        .collect();

    Json(sessions)
}
