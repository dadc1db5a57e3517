use serde::{Deserialize, Serialize};

/// Opaque handshake blob exchanged through the signaling relay.
///
/// The coordinator never inspects it: whatever the remote negotiation
/// machinery produced is carried through byte-for-byte, in both directions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalPayload(pub serde_json::Value);

impl From<serde_json::Value> for SignalPayload {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}
