use crate::model::payload::SignalPayload;
use crate::model::peer::PeerId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IceServerConfig {
    pub urls: Vec<String>,
    pub username: Option<String>,
    pub credential: Option<String>,
}

/// Messages the client sends to the signaling relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", content = "d")]
pub enum ClientMessage {
    Join {
        room: String,
        token: Option<String>,
    },
    Signal {
        id: PeerId,
        signal: SignalPayload,
    },
}

/// Messages the signaling relay sends to the client.
///
/// Channel-level `connect`/`disconnect` are transport events, not wire
/// messages, and are surfaced separately by the channel implementation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", content = "d")]
pub enum ServerMessage {
    Peers {
        peers: Vec<PeerId>,
    },
    Signal {
        id: PeerId,
        signal: SignalPayload,
    },
}
