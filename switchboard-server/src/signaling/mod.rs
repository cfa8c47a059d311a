mod connection;
mod router;
mod ws_handler;

pub use connection::*;
pub use router::*;
pub use ws_handler::*;
