use serde_json::json;

use crate::integration::{create_relay, init_tracing};
use crate::utils::TestPeer;

// A target that disconnected mid-negotiation is normal churn: the relay is
// dropped without any error back to the sender.
#[tokio::test]
async fn test_missing_target_dropped() {
    init_tracing();
    let router = create_relay();

    let mut a = TestPeer::connect(&router);
    let mut b = TestPeer::connect(&router);
    a.join("r1", Some("a"), None).await;
    b.join("r1", Some("b"), None).await;
    a.recv().await; // user-joined for b

    b.send(json!({
        "type": "offer",
        "offer": { "sdp": "v=0" },
        "roomId": "r1",
        "to": "ghost",
    }));

    a.assert_silent();
    b.assert_silent();
}
