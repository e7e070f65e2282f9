//! WebSocket connection handlers.
//!
//! Each socket is split into two tasks: one reads inbound frames and submits
//! them, the other drains the session's queue into the socket. When either
//! ends, the session is closed.

use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use serde::Deserialize;
use tokio::sync::mpsc;

use crate::{
    domain::{IdentityToken, Session, SessionId, Timestamp},
    ui::state::AppState,
};
use hiroba_shared::time::get_utc_timestamp;

/// Query parameters for WebSocket connection
#[derive(Debug, Deserialize)]
pub struct ConnectQuery {
    /// Optional self-declared label, advisory only
    pub identity: Option<String>,
}

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConnectQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    let identity = match query.identity {
        Some(raw) if raw.trim().is_empty() => None,
        Some(raw) => match IdentityToken::try_from(raw) {
            Ok(identity) => Some(identity),
            Err(e) => {
                tracing::warn!("Rejecting connection with invalid identity: {}", e);
                return Err(StatusCode::BAD_REQUEST);
            }
        },
        None => None,
    };

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, identity)))
}

/// Spawns a task that receives payloads from the rx channel and pushes them to the WebSocket sender.
///
/// The task ends when the socket write fails or the channel is closed. Dropping
/// `rx` makes every later enqueue for this session fail, which the registry
/// treats as a closed session.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(payload) = rx.recv().await {
            if sender.send(Message::Text(payload.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn submit_payload(state: &AppState, session_id: &SessionId, raw: &str) {
    match state.submit_message_usecase.execute(session_id, raw).await {
        Ok(outcome) => {
            for dropped in outcome.report.dropped {
                tracing::info!("Session '{}' dropped after failed delivery", dropped);
            }
        }
        Err(e) => {
            // 不正なペイロードは破棄するだけで、セッションは閉じない
            tracing::warn!("Dropped payload from session '{}': {}", session_id, e);
        }
    }
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, identity: Option<IdentityToken>) {
    let session = Session::new(
        SessionId::generate(),
        identity,
        Timestamp::new(get_utc_timestamp()),
    );
    let session_id = session.id;
    let label = session.label();

    let (sender, mut receiver) = socket.split();

    // Create a channel for this session to receive payloads
    let (tx, rx) = mpsc::unbounded_channel();

    // Register and replay history before anything else can be delivered
    match state.open_session_usecase.execute(session, tx).await {
        Ok(replayed) => {
            tracing::info!(
                "Session '{}' opened, replayed {} message(s)",
                label,
                replayed
            );
        }
        Err(e) => {
            tracing::warn!("Failed to open session '{}': {}", label, e);
            state.close_session_usecase.execute(&session_id).await;
            return;
        }
    }

    // Spawn a task to push queued payloads to this client
    let mut send_task = pusher_loop(rx, sender);

    let state_clone = state.clone();
    let label_clone = label.clone();

    // Spawn a task to receive payloads from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on session '{}': {}", label_clone, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!("Received text from '{}': {}", label_clone, text.as_str());
                    submit_payload(&state_clone, &session_id, text.as_str()).await;
                }
                Message::Binary(bytes) => match std::str::from_utf8(&bytes) {
                    Ok(text) => submit_payload(&state_clone, &session_id, text).await,
                    Err(_) => {
                        tracing::warn!(
                            "Dropped non UTF-8 binary frame from session '{}'",
                            label_clone
                        );
                    }
                },
                Message::Ping(_) | Message::Pong(_) => {
                    // Ping/pong is handled automatically by the WebSocket protocol
                    tracing::debug!("Received ping/pong from '{}'", label_clone);
                }
                Message::Close(_) => {
                    tracing::info!("Session '{}' requested close", label_clone);
                    break;
                }
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    if state.close_session_usecase.execute(&session_id).await {
        tracing::info!(
            "Session '{}' closed ({} session(s) remaining)",
            label,
            state.close_session_usecase.count_remaining_sessions().await
        );
    } else {
        tracing::debug!("Session '{}' was already removed", label);
    }
}
