use switchboard_core::{RoomId, ServerEnvelope, UserId};

use crate::integration::{create_relay, init_tracing};
use crate::utils::TestPeer;

#[tokio::test]
async fn test_join_creates_room() {
    init_tracing();
    let router = create_relay();

    let mut alice = TestPeer::connect(&router);
    let (alice_id, existing) = alice.join("r1", Some("alice"), Some("Alice")).await;
    assert_eq!(alice_id, UserId::from("alice"));
    assert!(existing.is_empty());
    assert!(router.directory().contains_room(&RoomId::from("r1")));

    let mut bob = TestPeer::connect(&router);
    let (bob_id, existing) = bob.join("r1", Some("bob"), None).await;
    assert_eq!(existing, vec![alice_id]);

    match alice.recv().await {
        ServerEnvelope::UserJoined { user_id, user_name } => {
            assert_eq!(user_id, bob_id);
            assert_eq!(user_name, None);
        }
        other => panic!("expected user-joined, got {other:?}"),
    }

    assert_eq!(router.directory().room_count(), 1);
}
