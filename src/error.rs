/// Faults surfaced by the transport layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("websocket handshake failed: {0}")]
    Handshake(String),

    #[error("connection closed")]
    Closed,
}

/// Errors returned from [`LiveClient::connect`](crate::LiveClient::connect).
///
/// Everything after a successful connect is contained inside the session:
/// send faults are logged and dropped, inbound faults surface through
/// [`LiveEvent`](crate::LiveEvent) or not at all.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("no api key configured")]
    MissingApiKey,

    #[error("a session is already connected; disconnect it first")]
    AlreadyConnected,

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("failed to encode frame: {0}")]
    Codec(#[from] serde_json::Error),
}
