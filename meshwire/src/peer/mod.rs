mod media;
mod peer_connection;
mod peer_event;
mod peer_factory;

pub use media::{MediaStream, MediaTrack, TrackKind};
pub use peer_connection::{PeerConnection, PeerOp};
pub use peer_event::PeerEvent;
pub use peer_factory::PeerFactory;
