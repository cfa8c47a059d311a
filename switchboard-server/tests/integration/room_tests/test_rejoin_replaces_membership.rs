use serde_json::json;

use switchboard_core::{RoomId, ServerEnvelope, UserId};

use crate::integration::{create_relay, init_tracing};
use crate::utils::TestPeer;

#[tokio::test]
async fn test_rejoin_replaces_membership() {
    init_tracing();
    let router = create_relay();

    let mut a = TestPeer::connect(&router);
    let mut b = TestPeer::connect(&router);
    a.join("r1", Some("a"), None).await;
    b.join("r1", Some("b"), None).await;
    a.recv().await; // user-joined for b

    // A joins a second room on the same connection: membership moves.
    let (_, existing) = a.join("r2", Some("a"), None).await;
    assert!(existing.is_empty());

    match b.recv().await {
        ServerEnvelope::UserLeft { user_id } => assert_eq!(user_id, UserId::from("a")),
        other => panic!("expected user-left, got {other:?}"),
    }

    let directory = router.directory();
    assert!(
        directory
            .find_in_room(&RoomId::from("r1"), &UserId::from("a"))
            .is_none()
    );
    assert!(
        directory
            .find_in_room(&RoomId::from("r2"), &UserId::from("a"))
            .is_some()
    );

    // Broadcasts in the abandoned room no longer reach A.
    b.send(json!({
        "type": "offer",
        "offer": { "sdp": "v=0" },
        "roomId": "r1",
    }));
    a.assert_silent();
}
