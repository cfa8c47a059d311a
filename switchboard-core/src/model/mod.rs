mod connection;
mod envelope;
mod room;
mod user;

pub use connection::ConnectionId;
pub use envelope::{ClientEnvelope, RoomPeer, ServerEnvelope};
pub use room::RoomId;
pub use user::UserId;
