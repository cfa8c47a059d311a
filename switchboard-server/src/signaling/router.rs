use std::sync::Arc;
use tracing::{debug, info, warn};

use switchboard_core::{ClientEnvelope, RoomId, RoomPeer, ServerEnvelope, UserId};

use crate::error::SignalingError;
use crate::room::{Member, RoomDirectory};
use crate::signaling::{Connection, ConnectionState};

/// Interprets inbound envelopes and delivers relayed envelopes to the
/// right recipients. Clones share the same directory.
#[derive(Clone)]
pub struct MessageRouter {
    directory: Arc<RoomDirectory>,
}

impl MessageRouter {
    pub fn new(directory: Arc<RoomDirectory>) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &RoomDirectory {
        &self.directory
    }

    /// Handle one raw text frame. An unparseable frame gets an `error`
    /// reply and leaves the connection in its current state.
    pub fn handle_frame(&self, conn: &mut Connection, text: &str) {
        match serde_json::from_str::<ClientEnvelope>(text)
            .map_err(SignalingError::MalformedEnvelope)
        {
            Ok(envelope) => self.handle_envelope(conn, envelope),
            Err(e) => {
                warn!("Protocol error on {}: {}", conn.id(), e);
                conn.send(ServerEnvelope::Error {
                    message: e.to_string(),
                });
            }
        }
    }

    pub fn handle_envelope(&self, conn: &mut Connection, envelope: ClientEnvelope) {
        match envelope {
            ClientEnvelope::JoinRoom {
                room_id,
                user_id,
                user_name,
            } => self.handle_join(conn, room_id, user_id, user_name),

            ClientEnvelope::Offer { offer, to, .. } => {
                self.relay(conn, to, |from| ServerEnvelope::Offer { offer, from });
            }
            ClientEnvelope::Answer { answer, to, .. } => {
                self.relay(conn, to, |from| ServerEnvelope::Answer { answer, from });
            }
            ClientEnvelope::IceCandidate { candidate, to, .. } => {
                self.relay(conn, to, |from| ServerEnvelope::IceCandidate {
                    candidate,
                    from,
                });
            }

            ClientEnvelope::Unknown => {
                debug!("Ignoring unrecognized envelope type from {}", conn.id());
            }
        }
    }

    /// Connection-close transition: detach from the directory and tell the
    /// remaining room members. Idempotent.
    pub fn connection_closed(&self, conn: &mut Connection) {
        let Some((room, user_id)) = conn.close() else {
            return;
        };
        for member in self.directory.remove(&room, conn.id()) {
            member.send(ServerEnvelope::UserLeft {
                user_id: user_id.clone(),
            });
        }
        info!("User {} left room {}", user_id, room);
    }

    fn handle_join(
        &self,
        conn: &mut Connection,
        room_id: RoomId,
        user_id: Option<UserId>,
        user_name: Option<String>,
    ) {
        let assigned = user_id.unwrap_or_else(UserId::generate);

        // A joined connection that joins again is moved: its old membership
        // is dropped first so the abandoned room sees it leave.
        if let ConnectionState::Joined {
            room: old_room,
            user_id: old_user,
            ..
        } = conn.state().clone()
        {
            for member in self.directory.remove(&old_room, conn.id()) {
                member.send(ServerEnvelope::UserLeft {
                    user_id: old_user.clone(),
                });
            }
        }

        let member = Member::new(
            conn.id(),
            assigned.clone(),
            user_name.clone(),
            conn.outbox(),
        );
        let existing = self.directory.join(&room_id, member);
        conn.joined(room_id.clone(), assigned.clone(), user_name.clone());

        conn.send(ServerEnvelope::Joined {
            user_id: assigned.clone(),
            room_id: room_id.clone(),
            existing_users: existing.iter().map(|m| m.user_id.clone()).collect(),
            existing_users_with_names: existing
                .iter()
                .map(|m| RoomPeer {
                    user_id: m.user_id.clone(),
                    user_name: m.user_name.clone(),
                })
                .collect(),
        });

        for member in existing {
            member.send(ServerEnvelope::UserJoined {
                user_id: assigned.clone(),
                user_name: user_name.clone(),
            });
        }

        info!("User {} joined room {}", assigned, room_id);
    }

    /// Deliver a relayed envelope. Targeted sends go to the one member whose
    /// user id matches; untargeted sends fan out to every other member (the
    /// legacy two-party path). The sender's current room is authoritative;
    /// any `roomId` claimed in the envelope has already been discarded.
    fn relay(
        &self,
        conn: &Connection,
        to: Option<UserId>,
        build: impl FnOnce(UserId) -> ServerEnvelope,
    ) {
        let ConnectionState::Joined { room, user_id, .. } = conn.state() else {
            debug!("Dropping relay from {}: not joined to a room", conn.id());
            return;
        };
        let envelope = build(user_id.clone());

        match to {
            Some(target) => match self.directory.find_in_room(room, &target) {
                Some(member) => member.send(envelope),
                // The target likely disconnected mid-negotiation; normal
                // churn, not an error.
                None => debug!("Dropping relay to {} in {}: no such member", target, room),
            },
            None => {
                for member in self.directory.members_of(room, conn.id()) {
                    member.send(envelope.clone());
                }
            }
        }
    }
}
