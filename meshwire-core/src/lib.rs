pub mod model;

pub use model::{ClientMessage, IceServerConfig, PeerId, ServerMessage, SignalPayload};
