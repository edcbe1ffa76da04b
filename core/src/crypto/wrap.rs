// ## File: `src/crypto/wrap.rs`

//! RSA key wrapping (RSA/ECB/PKCS1Padding on the app side).
//!
//! Design notes:
//! - The public key is a protocol constant; it is parsed once per process.
//! - Parse failures surface as `CryptoError::PublicKey` on every call,
//!   never as a panic and never as an empty header.

use base64::{engine::general_purpose::STANDARD, Engine};
use once_cell::sync::OnceCell;
use rsa::pkcs8::DecodePublicKey;
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Encrypt, RsaPublicKey};

use crate::constants::{RSA_MODULUS_LEN, RSA_PUBLIC_KEY_PEM};
use crate::crypto::types::{CryptoError, KeyOrigin};

static PUBLIC_KEY: OnceCell<RsaPublicKey> = OnceCell::new();

/// Parsed embedded public key.
pub fn embedded_public_key() -> Result<&'static RsaPublicKey, CryptoError> {
    PUBLIC_KEY.get_or_try_init(|| {
        let key = RsaPublicKey::from_public_key_pem(RSA_PUBLIC_KEY_PEM)
            .map_err(|e| CryptoError::PublicKey(e.to_string()))?;
        if key.size() != RSA_MODULUS_LEN {
            return Err(CryptoError::PublicKey(format!(
                "modulus is {} bytes, expected {}",
                key.size(),
                RSA_MODULUS_LEN
            )));
        }
        Ok(key)
    })
}

/// Encrypt raw bytes under `key` with PKCS#1 v1.5 padding; returns ciphertext.
pub fn rsa_encrypt_pkcs1v15(key: &RsaPublicKey, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let mut rng = rand::thread_rng();
    key.encrypt(&mut rng, Pkcs1v15Encrypt, plaintext)
        .map_err(|e| CryptoError::Wrap(e.to_string()))
}

/// Wrap the key origin for transport: base64(RSA-PKCS1v15(key_origin)).
pub fn wrap_key_origin(key_origin: &KeyOrigin) -> Result<String, CryptoError> {
    let key = embedded_public_key()?;
    let ciphertext = rsa_encrypt_pkcs1v15(key, key_origin.as_bytes())?;
    Ok(STANDARD.encode(ciphertext))
}
