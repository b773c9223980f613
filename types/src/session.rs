/// Modality the model is asked to respond with. The live API accepts exactly
/// one per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseModality {
    Text,
    Audio,
}

/// Voice selection for audio responses.
///
/// The wire shape nests the voice name three levels deep
/// (`voiceConfig.prebuiltVoiceConfig.voiceName`); callers only ever supply
/// the name, so [`SpeechConfig::voice`] builds the nesting.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechConfig {
    pub voice_config: VoiceConfig,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    pub prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrebuiltVoiceConfig {
    pub voice_name: String,
}

impl SpeechConfig {
    pub fn voice(voice_name: &str) -> Self {
        Self {
            voice_config: VoiceConfig {
                prebuilt_voice_config: PrebuiltVoiceConfig {
                    voice_name: voice_name.to_string(),
                },
            },
        }
    }
}

/// Session configuration supplied by the caller at connect time.
///
/// Immutable once the session is connected; a new configuration requires a
/// new session. Absent optional fields are omitted from the setup frame
/// entirely, never sent as null.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupConfig {
    model: String,
    response_modality: ResponseModality,
    system_instruction: Option<String>,
    speech_config: Option<SpeechConfig>,
}

impl SetupConfig {
    pub fn new(model: &str, response_modality: ResponseModality) -> Self {
        Self {
            model: model.to_string(),
            response_modality,
            system_instruction: None,
            speech_config: None,
        }
    }

    pub fn with_system_instruction(mut self, instruction: &str) -> Self {
        self.system_instruction = Some(instruction.to_string());
        self
    }

    pub fn with_voice(mut self, voice_name: &str) -> Self {
        self.speech_config = Some(SpeechConfig::voice(voice_name));
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn response_modality(&self) -> ResponseModality {
        self.response_modality
    }

    pub fn system_instruction(&self) -> Option<&str> {
        self.system_instruction.as_deref()
    }

    pub fn speech_config(&self) -> Option<&SpeechConfig> {
        self.speech_config.as_ref()
    }
}
