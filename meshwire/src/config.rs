use crate::error::MeshError;
use meshwire_core::IceServerConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Options handed to the signaling transport when the channel is opened.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectOptions {
    pub token: Option<String>,
    pub params: BTreeMap<String, String>,
}

/// Template cloned for every new peer connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeerConfig {
    pub initiator: bool,
    pub trickle: bool,
    pub ice_servers: Vec<IceServerConfig>,
}

impl Default for PeerConfig {
    fn default() -> Self {
        Self {
            initiator: false,
            trickle: true,
            ice_servers: Vec::new(),
        }
    }
}

impl PeerConfig {
    /// Clone of the template for a connection the local side opens.
    /// The initiator flag always wins over whatever the template says.
    pub fn as_initiator(&self) -> Self {
        let mut config = self.clone();
        config.initiator = true;
        config
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshConfig {
    pub server: String,
    pub room: String,
    #[serde(default)]
    pub connect: ConnectOptions,
    #[serde(default)]
    pub peer: PeerConfig,
}

impl MeshConfig {
    pub fn new(server: impl Into<String>, room: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            room: room.into(),
            connect: ConnectOptions::default(),
            peer: PeerConfig::default(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), MeshError> {
        if self.server.is_empty() {
            return Err(MeshError::Config("server must not be empty"));
        }
        if self.room.is_empty() {
            return Err(MeshError::Config("room must not be empty"));
        }
        Ok(())
    }
}
