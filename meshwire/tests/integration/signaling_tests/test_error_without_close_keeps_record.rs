use meshwire::SignalingEvent;
use meshwire_core::PeerId;

use crate::utils::{EVENT_TIMEOUT_MS, settle, wait_until};
use crate::{connect_test_mesh, init_tracing};

#[tokio::test]
async fn test_error_without_close_keeps_record() {
    init_tracing();

    let (handle, driver, factory, behavior) = connect_test_mesh("r1").await;

    let a = PeerId::from("a");
    driver.emit(SignalingEvent::Peers(vec![a.clone()])).await;
    assert!(wait_until(|| handle.contains_peer(&a), EVENT_TIMEOUT_MS).await);

    // A failure alone never evicts the record; cleanup comes with Closed.
    factory
        .peer(&a)
        .emit_failed(anyhow::anyhow!("dtls handshake failed"))
        .await;
    settle().await;

    assert!(handle.contains_peer(&a));
    assert!(!behavior.has_close(&a).await);

    factory.peer(&a).emit_closed().await;
    assert!(wait_until(|| !handle.contains_peer(&a), EVENT_TIMEOUT_MS).await);
    assert!(behavior.has_close(&a).await);
}
