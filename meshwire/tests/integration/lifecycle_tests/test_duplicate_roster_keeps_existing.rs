use meshwire::SignalingEvent;
use meshwire_core::PeerId;
use std::sync::Arc;

use crate::utils::{EVENT_TIMEOUT_MS, settle, wait_until};
use crate::{connect_test_mesh, init_tracing};

#[tokio::test]
async fn test_duplicate_roster_keeps_existing() {
    init_tracing();

    let (handle, driver, factory, _behavior) = connect_test_mesh("r1").await;

    let a = PeerId::from("a");

    driver.emit(SignalingEvent::Peers(vec![a.clone()])).await;
    assert!(wait_until(|| handle.peer_count() == 1, EVENT_TIMEOUT_MS).await);
    let first = handle.get_peer(&a).expect("peer a should exist");

    // Re-listing the same id must not replace the live connection.
    driver.emit(SignalingEvent::Peers(vec![a.clone()])).await;
    settle().await;

    assert_eq!(factory.creation_count(&a).await, 1);
    assert_eq!(handle.peer_count(), 1);

    let second = handle.get_peer(&a).expect("peer a should still exist");
    assert!(
        Arc::ptr_eq(&first, &second),
        "the original connection record must survive a duplicate roster entry"
    );
}
