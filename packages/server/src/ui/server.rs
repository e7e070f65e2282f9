//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    domain::Timestamp,
    usecase::{
        CloseSessionUseCase, GetBroadcastStateUseCase, OpenSessionUseCase, SubmitMessageUseCase,
    },
};
use hiroba_shared::time::get_utc_timestamp;

use super::{
    handler::{get_sessions, get_stats, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// WebSocket broadcast server
///
/// This struct holds the use cases and provides methods to run the server.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     open_session_usecase,
///     submit_message_usecase,
///     close_session_usecase,
///     get_broadcast_state_usecase,
/// );
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    /// OpenSessionUseCase（セッション開始のユースケース）
    open_session_usecase: Arc<OpenSessionUseCase>,
    /// SubmitMessageUseCase（メッセージ送信のユースケース）
    submit_message_usecase: Arc<SubmitMessageUseCase>,
    /// CloseSessionUseCase（セッション終了のユースケース）
    close_session_usecase: Arc<CloseSessionUseCase>,
    /// GetBroadcastStateUseCase（配信状態取得のユースケース）
    get_broadcast_state_usecase: Arc<GetBroadcastStateUseCase>,
}

impl Server {
    /// Create a new Server instance
    ///
    /// # Arguments
    ///
    /// * `open_session_usecase` - UseCase for session open (register + replay)
    /// * `submit_message_usecase` - UseCase for message submission (append + fan-out)
    /// * `close_session_usecase` - UseCase for session close
    /// * `get_broadcast_state_usecase` - UseCase for the read-only HTTP API
    pub fn new(
        open_session_usecase: Arc<OpenSessionUseCase>,
        submit_message_usecase: Arc<SubmitMessageUseCase>,
        close_session_usecase: Arc<CloseSessionUseCase>,
        get_broadcast_state_usecase: Arc<GetBroadcastStateUseCase>,
    ) -> Self {
        Self {
            open_session_usecase,
            submit_message_usecase,
            close_session_usecase,
            get_broadcast_state_usecase,
        }
    }

    /// Build the router with every endpoint attached
    pub fn into_router(self) -> Router {
        let app_state = Arc::new(AppState {
            open_session_usecase: self.open_session_usecase,
            submit_message_usecase: self.submit_message_usecase,
            close_session_usecase: self.close_session_usecase,
            get_broadcast_state_usecase: self.get_broadcast_state_usecase,
            started_at: Timestamp::new(get_utc_timestamp()),
        });

        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/stats", get(get_stats))
            .route("/api/sessions", get(get_sessions))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Serve on an already bound listener until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if there's an error during server execution.
    pub async fn serve(self, listener: TcpListener) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.into_router();

        tracing::info!(
            "WebSocket broadcast server listening on {}",
            listener.local_addr()?
        );

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }

    /// Run the WebSocket broadcast server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener).await
    }
}
