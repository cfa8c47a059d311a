use serde_json::json;

use switchboard_core::{ServerEnvelope, UserId};

use crate::integration::{create_relay, init_tracing};
use crate::utils::TestPeer;

#[tokio::test]
async fn test_targeted_delivery() {
    init_tracing();
    let router = create_relay();

    let mut a = TestPeer::connect(&router);
    let mut b = TestPeer::connect(&router);
    let mut c = TestPeer::connect(&router);
    a.join("r1", Some("a"), None).await;
    b.join("r1", Some("b"), None).await;
    c.join("r1", Some("c"), None).await;
    a.recv().await; // user-joined for b
    a.recv().await; // user-joined for c
    b.recv().await; // user-joined for c

    b.send(json!({
        "type": "offer",
        "offer": { "type": "offer", "sdp": "v=0" },
        "roomId": "r1",
        "to": "a",
    }));

    // Only the addressed member receives it, in a room of three.
    match a.recv().await {
        ServerEnvelope::Offer { offer, from } => {
            assert_eq!(from, UserId::from("b"));
            assert_eq!(offer, json!({ "type": "offer", "sdp": "v=0" }));
        }
        other => panic!("expected offer, got {other:?}"),
    }
    b.assert_silent();
    c.assert_silent();
}
