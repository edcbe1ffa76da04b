// ## File: `src/headers/session.rs`

//! Obfuscated auxiliary session header.
//!
//! token XOR device-id bytes (device id cycled), base64url without padding.
//! Upstream derivation is unconfirmed; callers treat this as best-effort.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::RngCore;

use crate::constants::SESSION_TOKEN_LEN;
use crate::headers::types::SessionTagError;

/// Fresh random session token.
pub fn random_session_token() -> Vec<u8> {
    let mut token = vec![0u8; SESSION_TOKEN_LEN];
    rand::thread_rng().fill_bytes(&mut token);
    token
}

/// XOR `token` against `device_id` cyclically and base64url-encode the result.
pub fn session_tag(token: &[u8], device_id: &str) -> Result<String, SessionTagError> {
    let key = device_id.as_bytes();
    if key.is_empty() {
        return Err(SessionTagError::EmptyDeviceId);
    }
    if token.is_empty() {
        return Err(SessionTagError::EmptyToken);
    }

    let mixed: Vec<u8> = token
        .iter()
        .zip(key.iter().cycle())
        .map(|(t, k)| t ^ k)
        .collect();

    Ok(URL_SAFE_NO_PAD.encode(mixed))
}
