mod client;
mod error;
mod transport;

pub use gemini_live_types as types;

pub use client::{Config, ConfigBuilder, LiveClient, LiveEvent, LiveEventRx, SessionState};
pub use client::{connect, connect_with_config};
pub use error::{ClientError, TransportError};
pub use transport::{Transport, TransportEvent, TransportHandle, WsTransport};
