pub mod model;

pub use model::{ClientEnvelope, ConnectionId, RoomId, RoomPeer, ServerEnvelope, UserId};
