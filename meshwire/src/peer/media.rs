use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    Audio,
    Video,
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackKind::Audio => f.write_str("audio"),
            TrackKind::Video => f.write_str("video"),
        }
    }
}

/// A media track owned by the host, handed to a connection via
/// `PeerConnection::replace_track`. Opaque to the coordinator.
pub trait MediaTrack: Send + Sync {
    fn id(&self) -> &str;
    fn kind(&self) -> TrackKind;
}

/// A remote media stream surfaced by a connection. The coordinator only
/// forwards it to the host callback.
pub trait MediaStream: Send + Sync {
    fn id(&self) -> &str;
}
