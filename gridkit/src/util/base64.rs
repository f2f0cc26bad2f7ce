//! Base64 text and byte codecs.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// Decoding error for the Base64 codecs.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encode raw bytes to a Base64 string.
pub fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode a Base64 string to raw bytes.
pub fn decode_bytes(encoded: &str) -> Result<Vec<u8>, CodecError> {
    Ok(STANDARD.decode(encoded)?)
}

/// Encode UTF-8 text to a Base64 string.
pub fn encode_text(text: &str) -> String {
    encode_bytes(text.as_bytes())
}

/// Decode a Base64 string back to UTF-8 text.
pub fn decode_text(encoded: &str) -> Result<String, CodecError> {
    Ok(String::from_utf8(decode_bytes(encoded)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_round_trip() {
        let encoded = encode_text("héllo, wörld");
        assert_eq!(decode_text(&encoded).unwrap(), "héllo, wörld");
    }

    #[test]
    fn test_known_vector() {
        assert_eq!(encode_text("hello"), "aGVsbG8=");
        assert_eq!(decode_text("aGVsbG8=").unwrap(), "hello");
    }

    #[test]
    fn test_invalid_base64_is_an_error() {
        assert!(decode_text("not base64!!").is_err());
    }

    #[test]
    fn test_non_utf8_decoded_bytes_are_an_error() {
        let encoded = encode_bytes(&[0xff, 0xfe]);
        assert!(decode_text(&encoded).is_err());
        assert_eq!(decode_bytes(&encoded).unwrap(), vec![0xff, 0xfe]);
    }
}
