use crate::config::PeerConfig;
use crate::peer::{PeerConnection, PeerEvent};
use async_trait::async_trait;
use meshwire_core::PeerId;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Creates peer connections wired into the mesh event loop.
///
/// Contract for implementations: every connection must emit `Closed`
/// exactly once when its link ends, including after a `Failed` event,
/// because the coordinator removes map entries only on `Closed`.
#[async_trait]
pub trait PeerFactory: Send + Sync {
    async fn create(
        &self,
        id: PeerId,
        config: PeerConfig,
        events: mpsc::Sender<PeerEvent>,
    ) -> anyhow::Result<Arc<dyn PeerConnection>>;
}
