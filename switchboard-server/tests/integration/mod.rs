
use std::sync::Arc;
use tracing::Level;

use switchboard_server::{MessageRouter, RoomDirectory};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn create_relay() -> MessageRouter {
    MessageRouter::new(Arc::new(RoomDirectory::new()))
}
