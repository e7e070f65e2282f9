//! Real-time WebSocket broadcast server with history replay.
//!
//! Every message submitted by any client is broadcast to all connected
//! clients (the sender included) and replayed to clients that join later.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-server
//! cargo run --bin hiroba-server -- --host 0.0.0.0 --port 3000
//! PORT=3000 cargo run --bin hiroba-server
//! ```

use std::sync::Arc;

use clap::Parser;
use hiroba_server::{
    domain::{MessageCodec, MessageStore, SessionRegistry},
    infrastructure::{
        codec::JsonMessageCodec, repository::InMemoryMessageStore,
        session_registry::WebSocketSessionRegistry,
    },
    ui::Server,
    usecase::{
        CloseSessionUseCase, DeliverySequencer, GetBroadcastStateUseCase, OpenSessionUseCase,
        SubmitMessageUseCase,
    },
};
use hiroba_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "hiroba-server")]
#[command(about = "WebSocket broadcast chat server with history replay", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HIROBA_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value = "8080")]
    port: u16,

    /// Default log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Initialize dependencies in order:
    // 1. MessageStore
    // 2. SessionRegistry, MessageCodec, DeliverySequencer
    // 3. UseCases
    // 4. Server

    // 1. Create MessageStore (in-memory, discarded on shutdown)
    let store: Arc<dyn MessageStore> = Arc::new(InMemoryMessageStore::new());

    // 2. Create SessionRegistry (WebSocket implementation) and the shared helpers
    let registry: Arc<dyn SessionRegistry> = Arc::new(WebSocketSessionRegistry::new());
    let codec: Arc<dyn MessageCodec> = Arc::new(JsonMessageCodec::new());
    let sequencer = Arc::new(DeliverySequencer::new());

    // 3. Create UseCases
    let open_session_usecase = Arc::new(OpenSessionUseCase::new(
        store.clone(),
        registry.clone(),
        codec.clone(),
        sequencer.clone(),
    ));
    let submit_message_usecase = Arc::new(SubmitMessageUseCase::new(
        store.clone(),
        registry.clone(),
        codec.clone(),
        sequencer.clone(),
    ));
    let close_session_usecase = Arc::new(CloseSessionUseCase::new(registry.clone()));
    let get_broadcast_state_usecase =
        Arc::new(GetBroadcastStateUseCase::new(store.clone(), registry.clone()));

    // 4. Create and run the server
    let server = Server::new(
        open_session_usecase,
        submit_message_usecase,
        close_session_usecase,
        get_broadcast_state_usecase,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
