use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::app::AppState;
use crate::signaling::{Connection, MessageRouter};

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state.router))
}

async fn handle_socket(socket: WebSocket, router: MessageRouter) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut conn = Connection::new(tx);
    info!("New WebSocket connection: {}", conn.id());

    // Outbox pump: one JSON object per text frame, queued order preserved.
    let send_task = tokio::spawn(async move {
        while let Some(envelope) = rx.recv().await {
            match serde_json::to_string(&envelope) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => error!("Failed to serialize envelope: {}", e),
            }
        }
    });

    while let Some(Ok(msg)) = receiver.next().await {
        match msg {
            Message::Text(text) => router.handle_frame(&mut conn, &text),
            Message::Close(_) => break,
            _ => {}
        }
    }

    // Transport gone (close frame, error, or stream end): reconcile
    // membership and notify the room before dropping the pump.
    router.connection_closed(&mut conn);
    send_task.abort();
    info!("WebSocket disconnected: {}", conn.id());
}
