use crate::{canonical::CanonicalError, crypto::CryptoError};

/// Unified signing error covering extraction and crypto.
/// - Every variant is protocol-fatal: the caller must not send the request.
/// - `From<T>` impls enable `?` across the signing pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignError {
    /// Parameters could not be turned into a canonical string.
    Canonical(CanonicalError),

    /// Cryptographic error (key wrap, cipher, key material).
    Crypto(CryptoError),
}

impl std::fmt::Display for SignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignError::Canonical(e) => write!(f, "canonical error: {}", e),
            SignError::Crypto(e) => write!(f, "crypto error: {}", e),
        }
    }
}

impl std::error::Error for SignError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SignError::Canonical(e) => Some(e),
            SignError::Crypto(e) => Some(e),
        }
    }
}

impl From<CanonicalError> for SignError {
    fn from(e: CanonicalError) -> Self {
        SignError::Canonical(e)
    }
}

impl From<CryptoError> for SignError {
    fn from(e: CryptoError) -> Self {
        SignError::Crypto(e)
    }
}
