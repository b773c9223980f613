pub mod client;
mod server;

pub use client::{ClientContent, GenerationConfig, MediaChunk, RealtimeInput, Setup};
pub use server::ServerMessage;

/// Messages this client sends over the live connection. The serialized form
/// is externally tagged, so each variant becomes the single top-level key of
/// the frame (`setup`, `realtimeInput`, `clientContent`).
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ClientEvent {
    Setup(Setup),
    RealtimeInput(RealtimeInput),
    ClientContent(ClientContent),
}
