mod signaling_channel;
mod signaling_event;

pub use signaling_channel::{SignalingChannel, SignalingConnector};
pub use signaling_event::SignalingEvent;
