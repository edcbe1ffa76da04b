// ## File: `src/crypto/aes_ecb.rs`

//! AES-ECB with PKCS#7 padding. AES-128 for signing; decryption also takes 192/256-bit keys.
//!
//! Design notes:
//! - ECB is what the upstream app uses (AES/ECB/PKCS5Padding). It is an exact
//!   compatibility requirement; do not switch to a chained mode.
//! - No IV. Each 16-byte block is encrypted independently.
//! - Used twice: signing (key = key origin) and decrypting `ecy: 1` responses
//!   (key = base64-decoded play URL key).

use aes::{Aes128, Aes192, Aes256};
use base64::{engine::general_purpose::STANDARD, Engine};
use ecb::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, InvalidLength, KeyInit};

use crate::crypto::types::{CryptoError, BLOCK_LEN_16};

type Aes128EcbEnc = ecb::Encryptor<Aes128>;
type Aes128EcbDec = ecb::Decryptor<Aes128>;
type Aes192EcbDec = ecb::Decryptor<Aes192>;
type Aes256EcbDec = ecb::Decryptor<Aes256>;

/// Encrypt `plaintext` under a 16-byte key. Output length is a multiple of 16.
pub fn aes128_ecb_encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let cipher = Aes128EcbEnc::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLen {
        expected: BLOCK_LEN_16,
        actual: key.len(),
    })?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

fn check_ciphertext_len(ciphertext: &[u8]) -> Result<(), CryptoError> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN_16 != 0 {
        return Err(CryptoError::Cipher(format!(
            "ciphertext length {} is not a positive multiple of {}",
            ciphertext.len(),
            BLOCK_LEN_16
        )));
    }
    Ok(())
}

fn unpad_failed<E>(_: E) -> CryptoError {
    CryptoError::Cipher("invalid PKCS#7 padding".into())
}

/// Decrypt and unpad under a 16-byte key. Fails closed on bad length or padding.
pub fn aes128_ecb_decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    check_ciphertext_len(ciphertext)?;
    let cipher = Aes128EcbDec::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLen {
        expected: BLOCK_LEN_16,
        actual: key.len(),
    })?;
    cipher.decrypt_padded_vec_mut::<Pkcs7>(ciphertext).map_err(unpad_failed)
}

/// ECB decrypt with the AES variant picked from the key length (16/24/32).
///
/// The play URL key published by the version endpoint is not always 16 bytes
/// once decoded, so response decryption accepts every AES key size.
pub fn aes_ecb_decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    check_ciphertext_len(ciphertext)?;
    let bad_len = |_: InvalidLength| CryptoError::InvalidKeyLen { expected: BLOCK_LEN_16, actual: key.len() };
    match key.len() {
        16 => aes128_ecb_decrypt(key, ciphertext),
        24 => Aes192EcbDec::new_from_slice(key)
            .map_err(bad_len)?
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(unpad_failed),
        32 => Aes256EcbDec::new_from_slice(key)
            .map_err(bad_len)?
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(unpad_failed),
        other => Err(CryptoError::InvalidKeyLen { expected: BLOCK_LEN_16, actual: other }),
    }
}

/// Decrypt an encrypted response `data` field.
///
/// - `data_b64`: base64 ciphertext from the response body.
/// - `key_b64`: base64 play URL key from the version config (16, 24 or 32 bytes decoded).
pub fn decrypt_response_payload(data_b64: &str, key_b64: &str) -> Result<String, CryptoError> {
    let key = STANDARD
        .decode(key_b64.trim())
        .map_err(|e| CryptoError::Decode(format!("key: {}", e)))?;
    let data = STANDARD
        .decode(data_b64.trim())
        .map_err(|e| CryptoError::Decode(format!("payload: {}", e)))?;

    let plaintext = aes_ecb_decrypt(&key, &data)?;
    String::from_utf8(plaintext).map_err(|e| CryptoError::Decode(e.to_string()))
}
