use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned to a remote endpoint by the signaling server.
///
/// Opaque to the client: it is never minted locally, only echoed back in
/// signal messages. Unique among currently-live peers; a peer that
/// disconnects and rejoins may come back under the same value, which is
/// treated as a brand-new identity.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq)]
#[serde(transparent)]
pub struct PeerId(String);

impl PeerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PeerId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for PeerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
