mod payload;
mod peer;
mod signaling;

pub use payload::SignalPayload;
pub use peer::PeerId;
pub use signaling::{ClientMessage, IceServerConfig, ServerMessage};
