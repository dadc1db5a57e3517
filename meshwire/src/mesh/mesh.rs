use crate::config::{MeshConfig, PeerConfig};
use crate::error::MeshError;
use crate::mesh::{MeshBehavior, MeshHandle};
use crate::peer::{PeerConnection, PeerEvent, PeerFactory};
use crate::signaling::{SignalingChannel, SignalingConnector, SignalingEvent};
use dashmap::DashMap;
use meshwire_core::PeerId;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

const PEER_EVENT_BUFFER: usize = 256;

/// The peer-set coordinator.
///
/// Owns the map from peer id to connection and runs the event loop that
/// translates between signaling events and per-peer lifecycle. All map
/// mutation happens inside this loop; the host interacts through the
/// [`MeshHandle`] returned by [`Mesh::connect`].
pub struct Mesh {
    room: String,
    peer_template: PeerConfig,
    peers: Arc<DashMap<PeerId, Arc<dyn PeerConnection>>>,
    channel: Arc<dyn SignalingChannel>,
    factory: Arc<dyn PeerFactory>,
    behavior: Box<dyn MeshBehavior>,
    handle: MeshHandle,
    signaling_rx: mpsc::Receiver<SignalingEvent>,
    peer_tx: mpsc::Sender<PeerEvent>,
    peer_rx: mpsc::Receiver<PeerEvent>,
}

impl Mesh {
    /// Open the signaling channel, spawn the event loop and return the
    /// handle. No peer connections exist until signaling events arrive;
    /// an unreachable server is not an error here.
    pub async fn connect(
        config: MeshConfig,
        connector: Arc<dyn SignalingConnector>,
        factory: Arc<dyn PeerFactory>,
        behavior: Box<dyn MeshBehavior>,
    ) -> Result<MeshHandle, MeshError> {
        config.validate()?;

        let (channel, signaling_rx) = connector.open(&config.server, &config.connect).await;
        let (peer_tx, peer_rx) = mpsc::channel(PEER_EVENT_BUFFER);

        let peers: Arc<DashMap<PeerId, Arc<dyn PeerConnection>>> = Arc::new(DashMap::new());
        let handle = MeshHandle::new(peers.clone());

        let mesh = Mesh {
            room: config.room,
            peer_template: config.peer,
            peers,
            channel,
            factory,
            behavior,
            handle: handle.clone(),
            signaling_rx,
            peer_tx,
            peer_rx,
        };

        tokio::spawn(mesh.run());

        Ok(handle)
    }

    async fn run(mut self) {
        info!("Mesh event loop started for room '{}'", self.room);

        loop {
            tokio::select! {
                evt = self.signaling_rx.recv() => {
                    match evt {
                        Some(e) => self.handle_signaling_event(e).await,
                        None => {
                            info!("Signaling event stream closed. Shutting down mesh.");
                            break;
                        }
                    }
                }

                evt = self.peer_rx.recv() => {
                    match evt {
                        Some(e) => self.handle_peer_event(e).await,
                        None => {
                            warn!("Peer event channel closed unexpectedly");
                            break;
                        }
                    }
                }
            }
        }

        info!("Mesh event loop finished");
    }

    async fn handle_signaling_event(&mut self, event: SignalingEvent) {
        match event {
            SignalingEvent::Connected => {
                info!("Signaling channel up, joining room '{}'", self.room);
                if let Err(e) = self.channel.join(&self.room).await {
                    error!("Failed to join room '{}': {:#}", self.room, e);
                }
            }

            SignalingEvent::Disconnected => {
                // Established links do not depend on the relay staying up.
                warn!(
                    "Signaling channel lost; keeping {} live peer(s)",
                    self.peers.len()
                );
            }

            SignalingEvent::Peers(ids) => {
                info!("Room roster lists {} peer(s) to connect to", ids.len());
                for id in ids {
                    self.connect_to_peer(id).await;
                }
            }

            SignalingEvent::Signal { id, signal } => {
                let existing = self.peers.get(&id).map(|entry| entry.value().clone());
                let peer = match existing {
                    Some(peer) => Some(peer),
                    None => self.accept_peer(id.clone()).await,
                };

                let Some(peer) = peer else {
                    return;
                };
                if let Err(e) = peer.signal(signal).await {
                    error!("Failed to apply handshake signal from {}: {:#}", id, e);
                }
            }
        }
    }

    async fn handle_peer_event(&mut self, event: PeerEvent) {
        match event {
            PeerEvent::Connected(id) => {
                info!("Connected to peer {}", id);
                self.behavior.on_peer_connect(&self.handle, id).await;
            }

            PeerEvent::Signal(id, signal) => {
                if let Err(e) = self.channel.signal(id.clone(), signal).await {
                    error!("Failed to relay handshake signal for {}: {:#}", id, e);
                }
            }

            PeerEvent::Data(id, data) => {
                debug!("Received {} byte(s) from peer {}", data.len(), id);
                self.behavior.on_data(&self.handle, id, data).await;
            }

            PeerEvent::Stream(id, stream) => {
                info!("Received stream '{}' from peer {}", stream.id(), id);
                self.behavior.on_stream(&self.handle, id, stream).await;
            }

            PeerEvent::Closed(id) => {
                if self.peers.remove(&id).is_some() {
                    info!("Peer {} closed", id);
                    self.behavior.on_peer_close(&self.handle, id).await;
                } else {
                    debug!("Close for untracked peer {}", id);
                }
            }

            PeerEvent::Failed(id, err) => {
                // The connection contract guarantees a follow-up Closed;
                // the map entry stays until it arrives.
                error!("Peer {} failed: {:#}", id, err);
            }
        }
    }

    /// The roster told us about an existing room member; we initiate.
    async fn connect_to_peer(&mut self, id: PeerId) {
        // The relay occasionally re-lists an id we already track.
        // Re-creating would orphan the live link, so the existing record
        // wins, same rule as the inbound signal path.
        if self.peers.contains_key(&id) {
            debug!("Roster re-listed tracked peer {}, keeping existing connection", id);
            return;
        }

        let config = self.peer_template.as_initiator();
        self.spawn_peer(id, config).await;
    }

    /// A remote peer opened a handshake towards us; we answer.
    async fn accept_peer(&mut self, id: PeerId) -> Option<Arc<dyn PeerConnection>> {
        debug!("Inbound handshake from unknown peer {}, answering", id);
        let config = self.peer_template.clone();
        self.spawn_peer(id, config).await
    }

    async fn spawn_peer(
        &mut self,
        id: PeerId,
        config: PeerConfig,
    ) -> Option<Arc<dyn PeerConnection>> {
        match self
            .factory
            .create(id.clone(), config, self.peer_tx.clone())
            .await
        {
            Ok(peer) => {
                self.peers.insert(id, peer.clone());
                Some(peer)
            }
            Err(e) => {
                error!("Failed to create connection for peer {}: {:#}", id, e);
                None
            }
        }
    }
}
