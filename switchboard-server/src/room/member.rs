use tokio::sync::mpsc;
use tracing::debug;

use switchboard_core::{ConnectionId, ServerEnvelope, UserId};

/// Non-owning handle to a joined connection, as stored in the room
/// directory. The connection's lifecycle is owned by its socket task; the
/// outbox here is only a back-reference for delivery.
#[derive(Debug, Clone)]
pub struct Member {
    pub conn: ConnectionId,
    pub user_id: UserId,
    pub user_name: Option<String>,
    outbox: mpsc::UnboundedSender<ServerEnvelope>,
}

impl Member {
    pub fn new(
        conn: ConnectionId,
        user_id: UserId,
        user_name: Option<String>,
        outbox: mpsc::UnboundedSender<ServerEnvelope>,
    ) -> Self {
        Self {
            conn,
            user_id,
            user_name,
            outbox,
        }
    }

    /// Queue an envelope for this member. A closed outbox means the
    /// connection is mid-teardown; the envelope is skipped and membership
    /// reconciliation is left to that connection's own cleanup.
    pub fn send(&self, envelope: ServerEnvelope) {
        if self.outbox.send(envelope).is_err() {
            debug!("Outbox closed for {}, skipping delivery", self.conn);
        }
    }
}
