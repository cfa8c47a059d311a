use axum::extract::State;
use axum::routing::get;
use axum::Json;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::room::RoomDirectory;
use crate::signaling::{MessageRouter, ws_handler};

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<RoomDirectory>,
    pub router: MessageRouter,
}

/// Assemble the HTTP surface: the WebSocket signaling endpoint and the
/// health probe, behind a CORS layer.
pub fn app(config: &Config) -> axum::Router {
    let directory = Arc::new(RoomDirectory::new());
    let router = MessageRouter::new(directory.clone());
    let state = AppState { directory, router };

    let cors = match &config.cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.clone())
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    axum::Router::new()
        .route("/ws", get(ws_handler))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "rooms": state.directory.room_count(),
    }))
}
