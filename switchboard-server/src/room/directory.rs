use dashmap::DashMap;
use std::collections::HashMap;
use tracing::info;

use switchboard_core::{ConnectionId, RoomId, UserId};

use crate::room::Member;

#[derive(Debug, Default)]
struct Room {
    members: HashMap<ConnectionId, Member>,
}

/// Room-to-members mapping shared by all connection handlers.
///
/// Rooms are created implicitly on first join and removed the moment their
/// last member leaves; an id observed as absent is indistinguishable from
/// one that never existed. Member maps are keyed by connection handle, so a
/// duplicate client-supplied user id cannot displace another member's
/// registration.
///
/// Join and leave for a given room are serialized on its map entry. All
/// lookups return owned snapshots; no lock is held while envelopes are
/// queued to recipients.
#[derive(Debug, Default)]
pub struct RoomDirectory {
    rooms: DashMap<RoomId, Room>,
}

impl RoomDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `member` to `room_id`, creating the room if absent. Returns
    /// the other members as they were at the instant of insertion.
    pub fn join(&self, room_id: &RoomId, member: Member) -> Vec<Member> {
        let mut room = self.rooms.entry(room_id.clone()).or_default();
        if room.members.is_empty() {
            info!("Creating room {}", room_id);
        }
        let existing: Vec<Member> = room.members.values().cloned().collect();
        room.members.insert(member.conn, member);
        existing
    }

    /// Detach a connection from a room and return the remaining members.
    /// Removes the room entirely once empty. Safe to call for rooms or
    /// connections that are already gone; such calls return no members.
    pub fn remove(&self, room_id: &RoomId, conn: ConnectionId) -> Vec<Member> {
        let Some(mut room) = self.rooms.get_mut(room_id) else {
            return Vec::new();
        };
        if room.members.remove(&conn).is_none() {
            return Vec::new();
        }
        let remaining: Vec<Member> = room.members.values().cloned().collect();
        drop(room);

        if remaining.is_empty() {
            // A join may have slipped in after the guard dropped; only an
            // actually-empty room is removed.
            if self
                .rooms
                .remove_if(room_id, |_, room| room.members.is_empty())
                .is_some()
            {
                info!("Removing empty room {}", room_id);
            }
        }
        remaining
    }

    /// Broadcast fan-out snapshot: every member except `excluding`.
    pub fn members_of(&self, room_id: &RoomId, excluding: ConnectionId) -> Vec<Member> {
        self.rooms
            .get(room_id)
            .map(|room| {
                room.members
                    .values()
                    .filter(|m| m.conn != excluding)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Targeted-delivery lookup. `None` for unknown rooms as well as
    /// unknown users.
    pub fn find_in_room(&self, room_id: &RoomId, user_id: &UserId) -> Option<Member> {
        self.rooms
            .get(room_id)?
            .members
            .values()
            .find(|m| m.user_id == *user_id)
            .cloned()
    }

    pub fn contains_room(&self, room_id: &RoomId) -> bool {
        self.rooms.contains_key(room_id)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
