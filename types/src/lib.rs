pub mod audio;
pub mod events;
pub mod session;
mod content;

pub use content::{Content, Part, SystemInstruction};
pub use events::{ClientEvent, ServerMessage};
pub use session::{ResponseModality, SetupConfig, SpeechConfig};
