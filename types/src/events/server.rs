/// A decoded inbound frame.
///
/// The service multiplexes unordered responses over one connection; the two
/// keys this client recognizes are `setupComplete` (presence-only handshake
/// acknowledgment, payload ignored) and `serverContent` (opaque payload,
/// forwarded to the caller undecoded). A frame carrying neither is unknown
/// to this client.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerMessage {
    #[serde(default)]
    pub setup_complete: Option<serde_json::Value>,
    #[serde(default)]
    pub server_content: Option<serde_json::Value>,
}

impl ServerMessage {
    pub fn is_unknown(&self) -> bool {
        self.setup_complete.is_none() && self.server_content.is_none()
    }
}
