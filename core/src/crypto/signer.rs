// ## File: `src/crypto/signer.rs`

//! Hybrid request signer.
//!
//! Pipeline for one encoded canonical string:
//! 1. fresh 16-char key origin
//! 2. `identity_tag` = sha256_hex(key_origin)
//! 3. `wrapped_key`  = base64(RSA-PKCS1v15(key_origin))
//! 4. ciphertext     = AES-128-ECB/PKCS#7(key_origin, encoded)
//! 5. `sign`         = md5_hex(trim(base64(ciphertext)))
//!
//! Every step is fallible and every failure propagates. There is no
//! fallback signature; an unsigned request would be silently rejected upstream.

use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::debug;

use crate::crypto::digest::{md5_hex, sha256_hex};
use crate::crypto::aes_ecb::aes128_ecb_encrypt;
use crate::crypto::key::generate_key_origin;
use crate::crypto::types::{CryptoError, KeyOrigin, SignatureResult};
use crate::crypto::wrap::wrap_key_origin;

/// Sign an already-encoded canonical string with a fresh key origin.
pub fn sign_encoded(encoded: &str, timestamp: u64) -> Result<SignatureResult, CryptoError> {
    sign_encoded_with_key(encoded, timestamp, generate_key_origin())
}

/// Deterministic core of [`sign_encoded`]: same key origin and input give the
/// same `sign` and `identity_tag`. `wrapped_key` still varies because PKCS#1
/// v1.5 padding is randomized.
pub fn sign_encoded_with_key(
    encoded: &str,
    timestamp: u64,
    key_origin: KeyOrigin,
) -> Result<SignatureResult, CryptoError> {
    let identity_tag = sha256_hex(key_origin.as_str());
    let wrapped_key = wrap_key_origin(&key_origin)?;
    let sign = payload_sign(encoded, &key_origin)?;

    debug!(timestamp, encoded_len = encoded.len(), "request signature generated");

    Ok(SignatureResult {
        sign,
        wrapped_key,
        key_origin,
        identity_tag,
        timestamp,
    })
}

/// Base64 ciphertext of `encoded` under `key_origin`, trimmed.
pub fn encrypt_payload_b64(encoded: &str, key_origin: &KeyOrigin) -> Result<String, CryptoError> {
    let ciphertext = aes128_ecb_encrypt(key_origin.as_bytes(), encoded.as_bytes())?;
    Ok(STANDARD.encode(ciphertext).trim().to_string())
}

/// The `sign` header value for `encoded` under `key_origin`.
#[inline]
pub fn payload_sign(encoded: &str, key_origin: &KeyOrigin) -> Result<String, CryptoError> {
    Ok(md5_hex(&encrypt_payload_b64(encoded, key_origin)?))
}
