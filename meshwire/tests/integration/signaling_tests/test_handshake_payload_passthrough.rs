use meshwire::{SignalPayload, SignalingEvent};
use meshwire_core::{ClientMessage, PeerId};
use serde_json::json;

use crate::utils::{EVENT_TIMEOUT_MS, wait_until};
use crate::{connect_test_mesh, init_tracing};

#[tokio::test]
async fn test_handshake_payload_passthrough() {
    init_tracing();

    let (handle, mut driver, factory, _behavior) = connect_test_mesh("r1").await;

    let x = PeerId::from("x");
    let offer = SignalPayload::from(json!({
        "type": "offer",
        "sdp": "v=0\r\no=- 42 2 IN IP4 127.0.0.1\r\n",
    }));

    driver
        .emit(SignalingEvent::Signal {
            id: x.clone(),
            signal: offer.clone(),
        })
        .await;
    assert!(wait_until(|| handle.contains_peer(&x), EVENT_TIMEOUT_MS).await);

    // Inbound: delivered into the connection bit-identical.
    assert_eq!(factory.peer(&x).signals().await, vec![offer]);

    // Outbound: what the connection produces is relayed untouched.
    let answer = SignalPayload::from(json!({ "type": "answer", "sdp": "v=0\r\na=mid:0\r\n" }));
    factory.peer(&x).emit_signal(answer.clone()).await;

    match driver.next_outbound(EVENT_TIMEOUT_MS).await {
        Some(ClientMessage::Signal { id, signal }) => {
            assert_eq!(id, x);
            assert_eq!(signal, answer);
        }
        other => panic!("expected a relayed signal, got {:?}", other),
    }
    assert_eq!(driver.signals_for(&x).await, vec![answer]);
}
