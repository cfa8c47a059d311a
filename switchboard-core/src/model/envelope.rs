use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{RoomId, UserId};

/// One inbound JSON frame, client to server. The SDP/ICE payloads are kept
/// as opaque [`Value`]s and relayed untouched.
///
/// `roomId` on the relay variants is accepted for wire compatibility but
/// carries no routing authority: relays are scoped to the room the sender
/// actually joined.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum ClientEnvelope {
    #[serde(rename = "join-room", rename_all = "camelCase")]
    JoinRoom {
        room_id: RoomId,
        #[serde(default)]
        user_id: Option<UserId>,
        #[serde(default)]
        user_name: Option<String>,
    },

    #[serde(rename = "offer", rename_all = "camelCase")]
    Offer {
        offer: Value,
        #[serde(default)]
        room_id: Option<RoomId>,
        #[serde(default)]
        to: Option<UserId>,
    },

    #[serde(rename = "answer", rename_all = "camelCase")]
    Answer {
        answer: Value,
        #[serde(default)]
        room_id: Option<RoomId>,
        #[serde(default)]
        to: Option<UserId>,
    },

    #[serde(rename = "ice-candidate", rename_all = "camelCase")]
    IceCandidate {
        candidate: Value,
        #[serde(default)]
        room_id: Option<RoomId>,
        #[serde(default)]
        to: Option<UserId>,
    },

    /// Any tag outside the closed set. Logged and ignored by the router.
    #[serde(other)]
    Unknown,
}

/// One outbound JSON frame, server to client.
///
/// The `from` field on relayed envelopes is always the server-assigned id
/// of the actual sender, never a client-supplied claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerEnvelope {
    #[serde(rename = "joined", rename_all = "camelCase")]
    Joined {
        user_id: UserId,
        room_id: RoomId,
        existing_users: Vec<UserId>,
        existing_users_with_names: Vec<RoomPeer>,
    },

    #[serde(rename = "user-joined", rename_all = "camelCase")]
    UserJoined {
        user_id: UserId,
        user_name: Option<String>,
    },

    #[serde(rename = "user-left", rename_all = "camelCase")]
    UserLeft { user_id: UserId },

    #[serde(rename = "offer")]
    Offer { offer: Value, from: UserId },

    #[serde(rename = "answer")]
    Answer { answer: Value, from: UserId },

    #[serde(rename = "ice-candidate")]
    IceCandidate { candidate: Value, from: UserId },

    #[serde(rename = "error")]
    Error { message: String },
}

/// Member entry in the `joined` confirmation snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomPeer {
    pub user_id: UserId,
    pub user_name: Option<String>,
}
