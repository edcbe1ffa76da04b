// ## File: `src/crypto/types.rs`

use std::fmt;

use crate::constants::{KEY_ORIGIN_ALPHABET, KEY_ORIGIN_LEN};

/// AES-128 block size (bytes).
pub const BLOCK_LEN_16: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Key material has the wrong length.
    InvalidKeyLen { expected: usize, actual: usize },

    /// Key origin contains characters outside the protocol alphabet.
    InvalidKeyOrigin,

    /// Embedded RSA public key could not be parsed.
    PublicKey(String),

    /// RSA wrapping of the ephemeral key failed.
    Wrap(String),

    /// Block cipher failure (bad padding, truncated ciphertext).
    Cipher(String),

    /// Base64 / UTF-8 decoding failure on inbound data.
    Decode(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CryptoError::*;
        match self {
            InvalidKeyLen { expected, actual } =>
                write!(f, "invalid key length: expected={}, actual={}", expected, actual),
            InvalidKeyOrigin =>
                write!(f, "key origin must be [0-9A-Za-z] only"),
            PublicKey(msg) =>
                write!(f, "embedded public key rejected: {}", msg),
            Wrap(msg) =>
                write!(f, "key wrap failed: {}", msg),
            Cipher(msg) =>
                write!(f, "cipher failure: {}", msg),
            Decode(msg) =>
                write!(f, "decode failure: {}", msg),
        }
    }
}

impl std::error::Error for CryptoError {}

/// Ephemeral 16-character key, used directly as the AES-128 key.
///
/// Never transmitted and never printed; `Debug` is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyOrigin(String);

impl KeyOrigin {
    /// Validate an externally supplied key origin.
    pub fn parse(raw: &str) -> Result<Self, CryptoError> {
        if raw.len() != KEY_ORIGIN_LEN {
            return Err(CryptoError::InvalidKeyLen {
                expected: KEY_ORIGIN_LEN,
                actual: raw.len(),
            });
        }
        if !raw.bytes().all(|b| KEY_ORIGIN_ALPHABET.contains(&b)) {
            return Err(CryptoError::InvalidKeyOrigin);
        }
        Ok(Self(raw.to_string()))
    }

    /// Caller guarantees length and alphabet (generator path).
    pub(crate) fn from_generated(raw: String) -> Self {
        debug_assert_eq!(raw.len(), KEY_ORIGIN_LEN);
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for KeyOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyOrigin(<redacted>)")
    }
}

/// Output of signing one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureResult {
    /// MD5 (hex) of the trimmed base64 ciphertext.
    pub sign: String,
    /// Base64 RSA-wrapped key origin.
    pub wrapped_key: String,
    /// Raw key material, kept only to derive the other fields.
    pub key_origin: KeyOrigin,
    /// SHA-256 (hex) of the key origin.
    pub identity_tag: String,
    /// Epoch millis, signed and sent as a header.
    pub timestamp: u64,
}
