use thiserror::Error;

/// Errors surfaced back to a client over its own connection. Routing
/// misses and transport failures are not errors; they are handled in
/// place by the router and lifecycle cleanup.
#[derive(Debug, Error)]
pub enum SignalingError {
    /// Inbound frame that is not a well-formed signaling envelope.
    #[error("malformed signaling envelope: {0}")]
    MalformedEnvelope(#[from] serde_json::Error),
}
