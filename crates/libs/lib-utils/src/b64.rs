//! # Base64 Encoding/Decoding
//!
//! Standard (padded) base64, the transport encoding Jupiter uses for
//! serialized transactions.

use base64::{engine::general_purpose, Engine as _};

/// Encode bytes to a standard base64 string.
pub fn b64_encode(content: impl AsRef<[u8]>) -> String {
    general_purpose::STANDARD.encode(content)
}

/// Decode a standard base64 string to bytes.
pub fn b64_decode(b64: &str) -> Result<Vec<u8>, Error> {
    general_purpose::STANDARD
        .decode(b64.trim())
        .map_err(|_| Error::FailToB64Decode)
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    FailToB64Decode,
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_padded_payload() {
        assert_eq!(b64_decode("AQID").unwrap(), vec![1, 2, 3]);
        assert_eq!(b64_decode("AQIDBA==\n").unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_decode_rejects_url_safe_garbage() {
        assert_eq!(b64_decode("not base64!"), Err(Error::FailToB64Decode));
    }

    #[test]
    fn test_encode() {
        assert_eq!(b64_encode([1u8, 2, 3, 4]), "AQIDBA==");
    }
}
