use base64::Engine;

/// MIME tag the live API expects for raw input audio: 16 kHz mono PCM16.
pub const PCM16_MIME_TYPE: &str = "audio/pcm;rate=16000";

/// Sample rate the live API accepts for input audio.
pub const INPUT_SAMPLE_RATE_HZ: u32 = 16_000;

pub type Base64EncodedAudioBytes = String;

/// Encodes a raw audio buffer for the `data` field of a media chunk.
///
/// Standard base64 over the raw bytes. Decoding the result yields the
/// original buffer byte for byte, including bytes >= 0x80.
pub fn encode_audio(audio: &[u8]) -> Base64EncodedAudioBytes {
    base64::engine::general_purpose::STANDARD.encode(audio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_round_trips_arbitrary_bytes() {
        let buffer: Vec<u8> = vec![0x00, 0x01, 0x7f, 0x80, 0xc3, 0xff];
        let encoded = encode_audio(&buffer);
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(&encoded)
            .unwrap();
        assert_eq!(decoded, buffer);
    }

    #[test]
    fn encode_round_trips_full_byte_range() {
        let buffer: Vec<u8> = (0..=255).collect();
        let encoded = encode_audio(&buffer);
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(&encoded)
            .unwrap();
        assert_eq!(decoded, buffer);
    }

    #[test]
    fn encode_handles_empty_buffer() {
        assert_eq!(encode_audio(&[]), "");
    }
}
