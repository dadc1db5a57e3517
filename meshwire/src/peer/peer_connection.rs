use crate::peer::MediaTrack;
use async_trait::async_trait;
use bytes::Bytes;
use meshwire_core::SignalPayload;
use std::fmt;
use std::sync::Arc;

/// One point-to-point link to a remote endpoint.
///
/// Handshake, NAT traversal and transport internals live behind this trait;
/// the coordinator only feeds signals in, sends data out and closes.
#[async_trait]
pub trait PeerConnection: Send + Sync {
    /// Feed handshake data received from the remote side into the
    /// connection's negotiation machinery.
    async fn signal(&self, signal: SignalPayload) -> anyhow::Result<()>;

    /// Send application data over the established link.
    async fn send(&self, data: Bytes) -> anyhow::Result<()>;

    /// Swap the outgoing media track without renegotiating from scratch.
    async fn replace_track(&self, track: Arc<dyn MediaTrack>) -> anyhow::Result<()>;

    /// Force a fresh offer/answer exchange on the existing link.
    async fn renegotiate(&self) -> anyhow::Result<()>;

    /// Tear the link down. Must cause a `Closed` event for this connection.
    async fn close(&self);
}

/// Capability operation broadcast to every live connection.
///
/// A closed set instead of dispatch by method name, so unsupported
/// operations are unrepresentable.
#[derive(Clone)]
pub enum PeerOp {
    ReplaceTrack(Arc<dyn MediaTrack>),
    Renegotiate,
}

impl fmt::Debug for PeerOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeerOp::ReplaceTrack(track) => f
                .debug_tuple("ReplaceTrack")
                .field(&track.id())
                .finish(),
            PeerOp::Renegotiate => f.write_str("Renegotiate"),
        }
    }
}
