// ## File: `src/crypto/key.rs`

//! Ephemeral key origin generation.
//!
//! - 16 characters, uniform over `[0-9A-Za-z]`.
//! - Thread-local RNG; concurrent callers never share state.

use rand::Rng;

use crate::constants::{KEY_ORIGIN_ALPHABET, KEY_ORIGIN_LEN};
use crate::crypto::types::KeyOrigin;

/// Draw a fresh key origin.
pub fn generate_key_origin() -> KeyOrigin {
    let mut rng = rand::thread_rng();
    let raw: String = (0..KEY_ORIGIN_LEN)
        .map(|_| KEY_ORIGIN_ALPHABET[rng.gen_range(0..KEY_ORIGIN_ALPHABET.len())] as char)
        .collect();
    KeyOrigin::from_generated(raw)
}
