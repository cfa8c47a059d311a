use std::mem;
use tokio::sync::mpsc;
use tracing::debug;

use switchboard_core::{ConnectionId, RoomId, ServerEnvelope, UserId};

/// Where a connection is in its life: transport open but no join yet,
/// attached to a room, or torn down. `Closed` is terminal; a connection
/// record is never reused.
#[derive(Debug, Clone)]
pub enum ConnectionState {
    Connecting,
    Joined {
        room: RoomId,
        user_id: UserId,
        user_name: Option<String>,
    },
    Closed,
}

/// Fixed-shape record for one live signaling connection, owned exclusively
/// by its socket task. All state changes go through the methods here; the
/// room directory only ever holds a [`Member`](crate::room::Member)
/// back-reference.
#[derive(Debug)]
pub struct Connection {
    id: ConnectionId,
    outbox: mpsc::UnboundedSender<ServerEnvelope>,
    state: ConnectionState,
}

impl Connection {
    pub fn new(outbox: mpsc::UnboundedSender<ServerEnvelope>) -> Self {
        Self {
            id: ConnectionId::new(),
            outbox,
            state: ConnectionState::Connecting,
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn outbox(&self) -> mpsc::UnboundedSender<ServerEnvelope> {
        self.outbox.clone()
    }

    /// Queue an envelope to this connection's own transport.
    pub fn send(&self, envelope: ServerEnvelope) {
        if self.outbox.send(envelope).is_err() {
            debug!("Outbox closed for {}, dropping envelope", self.id);
        }
    }

    /// Record a (re)join. The caller has already moved the directory
    /// membership; this only updates the record.
    pub fn joined(&mut self, room: RoomId, user_id: UserId, user_name: Option<String>) {
        if matches!(self.state, ConnectionState::Closed) {
            return;
        }
        self.state = ConnectionState::Joined {
            room,
            user_id,
            user_name,
        };
    }

    /// Transition to `Closed`. Returns the room and user id to reconcile
    /// if this was the first close of a joined connection; subsequent calls
    /// are no-ops.
    pub fn close(&mut self) -> Option<(RoomId, UserId)> {
        match mem::replace(&mut self.state, ConnectionState::Closed) {
            ConnectionState::Joined { room, user_id, .. } => Some((room, user_id)),
            _ => None,
        }
    }
}
