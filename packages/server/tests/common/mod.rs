//! Shared wiring for integration tests.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc};

use hiroba_server::{
    domain::{MessageCodec, MessageStore, PusherChannel, Session, SessionId, Timestamp},
    infrastructure::{
        codec::JsonMessageCodec, dto::websocket::ChatMessageDto,
        repository::InMemoryMessageStore,
        session_registry::WebSocketSessionRegistry,
    },
    ui::Server,
    usecase::{
        CloseSessionUseCase, DeliverySequencer, GetBroadcastStateUseCase, OpenSessionUseCase,
        SubmitMessageUseCase,
    },
};
use tokio::{net::TcpListener, sync::mpsc};

/// The broadcast engine wired with in-memory implementations.
pub struct Engine {
    pub store: Arc<InMemoryMessageStore>,
    pub registry: Arc<WebSocketSessionRegistry>,
    pub open: Arc<OpenSessionUseCase>,
    pub submit: Arc<SubmitMessageUseCase>,
    pub close: Arc<CloseSessionUseCase>,
    pub state: Arc<GetBroadcastStateUseCase>,
}

impl Engine {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryMessageStore::new());
        let registry = Arc::new(WebSocketSessionRegistry::new());
        let codec: Arc<dyn MessageCodec> = Arc::new(JsonMessageCodec::new());
        let sequencer = Arc::new(DeliverySequencer::new());

        Self {
            open: Arc::new(OpenSessionUseCase::new(
                store.clone(),
                registry.clone(),
                codec.clone(),
                sequencer.clone(),
            )),
            submit: Arc::new(SubmitMessageUseCase::new(
                store.clone(),
                registry.clone(),
                codec,
                sequencer,
            )),
            close: Arc::new(CloseSessionUseCase::new(registry.clone())),
            state: Arc::new(GetBroadcastStateUseCase::new(
                store.clone(),
                registry.clone(),
            )),
            store,
            registry,
        }
    }

    /// Open a new session and return its id and receiving end.
    pub async fn connect(&self) -> (SessionId, mpsc::UnboundedReceiver<String>) {
        let (tx, rx): (PusherChannel, _) = mpsc::unbounded_channel();
        let session = Session::new(SessionId::generate(), None, Timestamp::new(0));
        let session_id = session.id;
        self.open
            .execute(session, tx)
            .await
            .expect("open should succeed on a live channel");
        (session_id, rx)
    }

    /// Store contents encoded the same way fan-out encodes them.
    pub async fn encoded_history(&self) -> Vec<String> {
        let codec = JsonMessageCodec::new();
        self.store
            .snapshot()
            .await
            .iter()
            .map(|message| codec.encode(message))
            .collect()
    }

    pub fn into_server(self) -> Server {
        Server::new(self.open, self.submit, self.close, self.state)
    }
}

/// Everything currently queued on a receiver.
pub fn drain(rx: &mut mpsc::UnboundedReceiver<String>) -> Vec<String> {
    let mut received = Vec::new();
    while let Ok(payload) = rx.try_recv() {
        received.push(payload);
    }
    received
}

/// Canonical wire payload for a message.
pub fn payload(user: &str, text: &str) -> String {
    serde_json::to_string(&ChatMessageDto {
        user: user.to_string(),
        text: text.to_string(),
    })
    .expect("ChatMessageDto always serializes")
}

/// Serve a fresh engine on an ephemeral port.
pub async fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    let app = Engine::new().into_server().into_router();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    addr
}
