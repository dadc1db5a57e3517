use crate::peer::MediaStream;
use bytes::Bytes;
use meshwire_core::{PeerId, SignalPayload};
use std::sync::Arc;

/// Events a peer connection reports back into the mesh event loop.
pub enum PeerEvent {
    /// The link is established end to end.
    Connected(PeerId),
    /// Handshake data this side produced; must be relayed to the remote
    /// peer through the signaling channel, unmodified.
    Signal(PeerId, SignalPayload),
    /// Application data from the remote peer.
    Data(PeerId, Bytes),
    /// A remote media stream arrived.
    Stream(PeerId, Arc<dyn MediaStream>),
    /// The link is gone. The only trigger for peer-map removal.
    Closed(PeerId),
    /// Handshake or transport failure. Cleanup happens on the follow-up
    /// `Closed`, never here.
    Failed(PeerId, anyhow::Error),
}
