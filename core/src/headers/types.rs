// ## File: `src/headers/types.rs`

//! headers/types.rs
//! Outbound header set and per-request overrides.
//!
//! Notes:
//! - Header names are case-sensitive to the upstream; they are stored verbatim.
//! - Emission order is preserved so captured traffic and our output line up.
//! - An empty value is not the same as a missing header upstream; the set never
//!   drops empty values on its own.

use std::fmt;

/// Ordered outbound headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: Vec<(String, String)>,
}

impl HeaderSet {
    pub fn with_capacity(n: usize) -> Self {
        Self { entries: Vec::with_capacity(n) }
    }

    /// Insert or replace (keeps the original position on replace).
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn into_vec(self) -> Vec<(String, String)> {
        self.entries
    }
}

/// Per-request knobs for [`crate::headers::build_headers`].
#[derive(Clone, Default)]
pub struct HeaderOverrides {
    /// Takes precedence over the context language (still normalised).
    pub language: Option<String>,
    /// Emit the obfuscated `sessionTag` header.
    pub with_session_tag: bool,
    /// Session token for the tag; random bytes when absent.
    pub session_token: Option<Vec<u8>>,
}

impl fmt::Debug for HeaderOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderOverrides")
            .field("language", &self.language)
            .field("with_session_tag", &self.with_session_tag)
            .field("session_token", &self.session_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Why the session tag could not be derived. Never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionTagError {
    EmptyDeviceId,
    EmptyToken,
}

impl fmt::Display for SessionTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionTagError::EmptyDeviceId => write!(f, "device id is empty"),
            SessionTagError::EmptyToken => write!(f, "session token is empty"),
        }
    }
}

impl std::error::Error for SessionTagError {}
