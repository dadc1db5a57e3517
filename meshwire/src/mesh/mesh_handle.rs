use crate::peer::{PeerConnection, PeerOp};
use bytes::Bytes;
use dashmap::DashMap;
use futures::future::join_all;
use meshwire_core::PeerId;
use std::sync::Arc;
use tracing::error;

/// Clonable view over the live peer set.
///
/// Read-only with respect to membership: the map is mutated only by the
/// mesh event loop, so handle operations never race a removal mid-handler.
#[derive(Clone)]
pub struct MeshHandle {
    peers: Arc<DashMap<PeerId, Arc<dyn PeerConnection>>>,
}

impl MeshHandle {
    pub(crate) fn new(peers: Arc<DashMap<PeerId, Arc<dyn PeerConnection>>>) -> Self {
        Self { peers }
    }

    /// Send `data` to every live peer.
    ///
    /// A failure for one peer is logged and does not stop delivery to the
    /// rest. Order across peers is unspecified.
    pub async fn send(&self, data: Bytes) {
        let sends = self.collect_peers().into_iter().map(|(id, peer)| {
            let data = data.clone();
            async move {
                if let Err(e) = peer.send(data).await {
                    error!("Failed to send to peer {}: {:#}", id, e);
                }
            }
        });

        join_all(sends).await;
    }

    /// Apply a capability operation to every live peer, with the same
    /// per-peer failure isolation as `send`.
    pub async fn apply(&self, op: PeerOp) {
        let ops = self.collect_peers().into_iter().map(|(id, peer)| {
            let op = op.clone();
            async move {
                let res = match op {
                    PeerOp::ReplaceTrack(track) => peer.replace_track(track).await,
                    PeerOp::Renegotiate => peer.renegotiate().await,
                };
                if let Err(e) = res {
                    error!("Failed to apply operation to peer {}: {:#}", id, e);
                }
            }
        });

        join_all(ops).await;
    }

    /// Look up one peer connection. `None` for unknown identifiers.
    pub fn get_peer(&self, id: &PeerId) -> Option<Arc<dyn PeerConnection>> {
        self.peers.get(id).map(|entry| entry.value().clone())
    }

    pub fn peer_ids(&self) -> Vec<PeerId> {
        self.peers.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn contains_peer(&self, id: &PeerId) -> bool {
        self.peers.contains_key(id)
    }

    pub fn peer_count(&self) -> usize {
        self.peers.len()
    }

    // Clone the handles out first so no map guard is held across an await.
    fn collect_peers(&self) -> Vec<(PeerId, Arc<dyn PeerConnection>)> {
        self.peers
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }
}
