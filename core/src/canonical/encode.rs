// ## File: `src/canonical/encode.rs`

//! Canonical string construction and the upstream's percent-encoding variant.
//!
//! Design notes:
//! - Base pass is form-urlencoding: alphanumerics and `*-._` pass through,
//!   space becomes `+`, every other byte becomes upper-case `%XX`.
//! - The fix-up table below is applied afterwards, in order. It is a protocol
//!   constant; reordering it changes the signed bytes.

use url::form_urlencoded;

/// Post-encoding substitutions, applied top to bottom.
pub const ENCODE_FIXUPS: [(&str, &str); 8] = [
    ("+", "%20"),
    ("'", "%27"),
    ("%21", "!"),
    ("(", "%28"),
    (")", "%29"),
    ("\r", "%0D"),
    ("\n", "%0A"),
    ("~", "%7E"),
];

/// Values concatenated without separator, followed by the decimal timestamp.
pub fn canonical_string(values: &[String], timestamp: u64) -> String {
    let mut out = values.concat();
    out.push_str(&timestamp.to_string());
    out
}

/// Percent-encode `input` exactly as the upstream app does before signing.
pub fn special_url_encode(input: &str) -> String {
    let mut encoded: String = form_urlencoded::byte_serialize(input.as_bytes()).collect();
    for (from, to) in ENCODE_FIXUPS {
        if encoded.contains(from) {
            encoded = encoded.replace(from, to);
        }
    }
    encoded
}
