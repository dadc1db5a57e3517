pub mod config;
pub mod error;
pub mod mesh;
pub mod peer;
pub mod signaling;

pub use config::{ConnectOptions, MeshConfig, PeerConfig};
pub use error::MeshError;
pub use mesh::{Mesh, MeshBehavior, MeshHandle, NoopBehavior};
pub use peer::{
    MediaStream, MediaTrack, PeerConnection, PeerEvent, PeerFactory, PeerOp, TrackKind,
};
pub use signaling::{SignalingChannel, SignalingConnector, SignalingEvent};

pub use meshwire_core::{PeerId, SignalPayload};
