use serde_json::json;

use switchboard_core::{ServerEnvelope, UserId};

use crate::integration::{create_relay, init_tracing};
use crate::utils::TestPeer;

#[tokio::test]
async fn test_unknown_type_ignored() {
    init_tracing();
    let router = create_relay();

    let mut a = TestPeer::connect(&router);
    let mut b = TestPeer::connect(&router);
    a.join("r1", Some("a"), None).await;
    b.join("r1", Some("b"), None).await;
    a.recv().await; // user-joined for b

    // Well-formed JSON with a tag outside the protocol: no reply, no error.
    a.send(json!({ "type": "start-recording", "roomId": "r1" }));
    a.assert_silent();
    b.assert_silent();

    // The connection keeps working afterwards.
    a.send(json!({
        "type": "offer",
        "offer": { "sdp": "v=0" },
        "roomId": "r1",
        "to": "b",
    }));
    match b.recv().await {
        ServerEnvelope::Offer { from, .. } => assert_eq!(from, UserId::from("a")),
        other => panic!("expected offer, got {other:?}"),
    }
}
