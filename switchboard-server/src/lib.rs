pub mod app;
pub mod config;
pub mod error;
pub mod room;
pub mod signaling;

pub use app::{AppState, app};
pub use config::Config;
pub use error::SignalingError;
pub use room::{Member, RoomDirectory};
pub use signaling::{Connection, ConnectionState, MessageRouter, ws_handler};
