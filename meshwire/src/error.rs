use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeshError {
    /// Constructor-time misconfiguration. The one synchronous failure the
    /// coordinator raises; everything that happens after construction is
    /// reported asynchronously, attributed to the offending peer.
    #[error("invalid mesh config: {0}")]
    Config(&'static str),
}
