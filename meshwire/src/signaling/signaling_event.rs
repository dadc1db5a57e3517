use meshwire_core::{PeerId, ServerMessage, SignalPayload};

/// Inbound events from the signaling relay, fed into the mesh event loop.
#[derive(Debug, Clone)]
pub enum SignalingEvent {
    /// The channel to the relay is up. Re-emitted after every reconnect.
    Connected,
    /// The channel dropped. Established peer connections are unaffected.
    Disconnected,
    /// Room members that were present before us; we initiate towards each.
    Peers(Vec<PeerId>),
    /// Handshake data from one remote peer.
    Signal { id: PeerId, signal: SignalPayload },
}

impl From<ServerMessage> for SignalingEvent {
    fn from(msg: ServerMessage) -> Self {
        match msg {
            ServerMessage::Peers { peers } => SignalingEvent::Peers(peers),
            ServerMessage::Signal { id, signal } => SignalingEvent::Signal { id, signal },
        }
    }
}
