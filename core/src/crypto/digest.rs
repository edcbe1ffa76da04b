// ## File: `src/crypto/digest.rs`

//! Hex digests used by the signer. Lowercase hex, UTF-8 input.

use md5::Md5;
use sha2::{Digest as _, Sha256};

/// Supported digest algorithms.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DigestAlg {
    /// 32 hex chars; produces `sign`.
    Md5,
    /// 64 hex chars; produces `usertype`.
    Sha256,
}

impl DigestAlg {
    pub fn hex_len(self) -> usize {
        match self {
            DigestAlg::Md5 => 32,
            DigestAlg::Sha256 => 64,
        }
    }

    #[inline]
    pub fn hex_digest(self, data: &[u8]) -> String {
        match self {
            DigestAlg::Md5 => hex::encode(Md5::digest(data)),
            DigestAlg::Sha256 => hex::encode(Sha256::digest(data)),
        }
    }
}

#[inline]
pub fn md5_hex(input: &str) -> String {
    DigestAlg::Md5.hex_digest(input.as_bytes())
}

#[inline]
pub fn sha256_hex(input: &str) -> String {
    DigestAlg::Sha256.hex_digest(input.as_bytes())
}
