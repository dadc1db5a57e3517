use crate::config::ConnectOptions;
use crate::signaling::SignalingEvent;
use async_trait::async_trait;
use meshwire_core::{PeerId, SignalPayload};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Outbound half of the signaling relay connection.
///
/// Implemented by the transport layer (WebSocket, socket.io, in-process
/// channel in tests); the coordinator only ever emits `join` and `signal`
/// on it.
#[async_trait]
pub trait SignalingChannel: Send + Sync {
    /// Announce membership in a room. Sent on every channel `Connected`
    /// event, so a reconnect re-joins automatically.
    async fn join(&self, room: &str) -> anyhow::Result<()>;

    /// Relay handshake data to one remote peer. The payload must reach the
    /// wire unmodified.
    async fn signal(&self, id: PeerId, signal: SignalPayload) -> anyhow::Result<()>;
}

/// Opens the channel to a signaling server.
///
/// Deliberately infallible: an unreachable server raises nothing here.
/// Dial failures, retries and drops are the transport's own business and
/// surface through the returned event stream (`Disconnected`, or simply no
/// `Connected`).
#[async_trait]
pub trait SignalingConnector: Send + Sync {
    async fn open(
        &self,
        server: &str,
        options: &ConnectOptions,
    ) -> (Arc<dyn SignalingChannel>, mpsc::Receiver<SignalingEvent>);
}
