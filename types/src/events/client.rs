use crate::audio;
use crate::content::{Content, SystemInstruction};
use crate::session::{ResponseModality, SetupConfig, SpeechConfig};

/// The mandatory first frame of a session, sent exactly once after the
/// transport opens and before any other traffic.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Setup {
    pub model: String,
    pub generation_config: GenerationConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<ResponseModality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech_config: Option<SpeechConfig>,
}

impl From<&SetupConfig> for Setup {
    fn from(config: &SetupConfig) -> Self {
        Self {
            model: config.model().to_string(),
            generation_config: GenerationConfig {
                response_modalities: vec![config.response_modality()],
                speech_config: config.speech_config().cloned(),
            },
            system_instruction: config.system_instruction().map(SystemInstruction::from_text),
        }
    }
}

/// One chunk of continuous binary media, streamed as base64 text.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeInput {
    pub media_chunks: Vec<MediaChunk>,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaChunk {
    pub mime_type: String,
    pub data: audio::Base64EncodedAudioBytes,
}

impl RealtimeInput {
    /// Wraps one raw PCM16 buffer as a single media chunk.
    pub fn pcm16_chunk(buffer: &[u8]) -> Self {
        Self {
            media_chunks: vec![MediaChunk {
                mime_type: audio::PCM16_MIME_TYPE.to_string(),
                data: audio::encode_audio(buffer),
            }],
        }
    }
}

/// A discrete conversational turn from the caller.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientContent {
    pub turns: Vec<Content>,
    pub turn_complete: bool,
}

impl ClientContent {
    /// A single completed user turn holding one text part.
    pub fn user_turn(text: &str) -> Self {
        Self {
            turns: vec![Content::user_text(text)],
            turn_complete: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ClientEvent;
    use base64::Engine;

    #[test]
    fn setup_frame_omits_absent_optional_fields() {
        let config = SetupConfig::new("m1", ResponseModality::Audio);
        let event = ClientEvent::Setup(Setup::from(&config));
        let json = serde_json::to_string(&event).unwrap();
        let expected = r#"{"setup":{"model":"m1","generationConfig":{"responseModalities":["AUDIO"]}}}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn setup_frame_includes_instruction_and_voice_when_present() {
        let config = SetupConfig::new("models/gemini-2.0-flash-exp", ResponseModality::Text)
            .with_system_instruction("be brief")
            .with_voice("Aoede");
        let event = ClientEvent::Setup(Setup::from(&config));
        let json = serde_json::to_string(&event).unwrap();
        let expected = concat!(
            r#"{"setup":{"model":"models/gemini-2.0-flash-exp","#,
            r#""generationConfig":{"responseModalities":["TEXT"],"#,
            r#""speechConfig":{"voiceConfig":{"prebuiltVoiceConfig":{"voiceName":"Aoede"}}}},"#,
            r#""systemInstruction":{"parts":[{"text":"be brief"}]}}}"#,
        );
        assert_eq!(json, expected);
    }

    #[test]
    fn realtime_input_frame_round_trips_audio_bytes() {
        let buffer: Vec<u8> = vec![0x00, 0x10, 0x7f, 0x80, 0xfe, 0xff];
        let event = ClientEvent::RealtimeInput(RealtimeInput::pcm16_chunk(&buffer));
        let json = serde_json::to_string(&event).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let chunk = &value["realtimeInput"]["mediaChunks"][0];
        assert_eq!(chunk["mimeType"], "audio/pcm;rate=16000");
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(chunk["data"].as_str().unwrap())
            .unwrap();
        assert_eq!(decoded, buffer);
    }

    #[test]
    fn client_content_frame_is_a_completed_user_turn() {
        let event = ClientEvent::ClientContent(ClientContent::user_turn("hello"));
        let json = serde_json::to_string(&event).unwrap();
        let expected = r#"{"clientContent":{"turns":[{"role":"user","parts":[{"text":"hello"}]}],"turnComplete":true}}"#;
        assert_eq!(json, expected);
    }
}
