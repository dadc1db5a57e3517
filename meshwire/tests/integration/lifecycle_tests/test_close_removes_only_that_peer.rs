use meshwire::SignalingEvent;
use meshwire_core::{ClientMessage, PeerId};

use crate::utils::{EVENT_TIMEOUT_MS, wait_until};
use crate::{connect_test_mesh, init_tracing};

#[tokio::test]
async fn test_close_removes_only_that_peer() {
    init_tracing();

    let (handle, mut driver, factory, behavior) = connect_test_mesh("r1").await;

    driver.emit(SignalingEvent::Connected).await;
    match driver.next_outbound(EVENT_TIMEOUT_MS).await {
        Some(ClientMessage::Join { room, .. }) => assert_eq!(room, "r1"),
        other => panic!("expected a join message, got {:?}", other),
    }

    let a = PeerId::from("a");
    let b = PeerId::from("b");
    driver
        .emit(SignalingEvent::Peers(vec![a.clone(), b.clone()]))
        .await;
    assert!(wait_until(|| handle.peer_count() == 2, EVENT_TIMEOUT_MS).await);

    factory.peer(&a).emit_closed().await;

    assert!(
        wait_until(|| handle.peer_count() == 1, EVENT_TIMEOUT_MS).await,
        "exactly one peer should remain"
    );
    assert!(handle.get_peer(&a).is_none());
    assert!(handle.get_peer(&b).is_some());
    assert_eq!(handle.peer_ids(), vec![b.clone()]);

    assert!(behavior.has_close(&a).await, "close callback must fire for a");
    assert!(!behavior.has_close(&b).await);
}
