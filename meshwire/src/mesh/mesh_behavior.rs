use crate::mesh::MeshHandle;
use crate::peer::MediaStream;
use async_trait::async_trait;
use bytes::Bytes;
use meshwire_core::PeerId;
use std::sync::Arc;

/// Host-supplied lifecycle callbacks.
///
/// Every method has a no-op default, so a host only overrides what it
/// cares about. Each callback receives the handle, so it can answer a
/// message or broadcast from inside the event loop.
#[async_trait]
pub trait MeshBehavior: Send + Sync + 'static {
    /// A peer connection reached the established state.
    async fn on_peer_connect(&self, _mesh: &MeshHandle, _id: PeerId) {}

    /// Application data arrived from a peer.
    async fn on_data(&self, _mesh: &MeshHandle, _id: PeerId, _data: Bytes) {}

    /// A remote media stream arrived from a peer.
    async fn on_stream(&self, _mesh: &MeshHandle, _id: PeerId, _stream: Arc<dyn MediaStream>) {}

    /// A peer connection closed and was removed from the mesh.
    async fn on_peer_close(&self, _mesh: &MeshHandle, _id: PeerId) {}
}

/// Behavior for hosts that drive everything through the handle.
pub struct NoopBehavior;

#[async_trait]
impl MeshBehavior for NoopBehavior {}
