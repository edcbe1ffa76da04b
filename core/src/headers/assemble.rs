// ## File: `src/headers/assemble.rs`
//! src/headers/assemble.rs
//!
//! Outbound header assembly.
//!
//! Design notes:
//! - The only place where a signature and the device context meet.
//! - Geo headers are always emitted; without an override they are empty strings.
//!   The upstream treats a missing header differently from an empty one.
//! - `mcc` is emitted only when non-empty.
//! - The session tag is optional and may silently degrade; the signature may not.

use tracing::debug;

use crate::constants::{app, header_names as h};
use crate::crypto::SignatureResult;
use crate::device::{normalize_language, DeviceContext};
use crate::headers::session::{random_session_token, session_tag};
use crate::headers::types::{HeaderOverrides, HeaderSet};

/// Transport (3) + identity (7) + geo (5) + mcc + signature (4) + session tag.
const MAX_HEADERS: usize = 21;

/// Build the full header set for one signed request.
pub fn build_headers(
    signature: &SignatureResult,
    context: &DeviceContext,
    overrides: &HeaderOverrides,
) -> HeaderSet {
    let mut headers = HeaderSet::with_capacity(MAX_HEADERS);

    // Transport
    headers.insert(h::ACCEPT_ENCODING, app::ACCEPT_ENCODING);
    headers.insert(h::USER_AGENT, app::USER_AGENT);
    headers.insert(h::CONNECTION, app::CONNECTION);

    // App identity
    let language = overrides.language.as_deref().unwrap_or(&context.language);
    headers.insert(h::CLIENT_TYPE, app::CLIENT_TYPE);
    headers.insert(h::VERSION_CODE, app::VERSION_CODE.to_string());
    headers.insert(h::DEVICE_ID, context.device_id.as_str());
    headers.insert(h::AD_ID, context.ad_id.as_str());
    headers.insert(h::LANG, normalize_language(language));
    headers.insert(h::TIMEZONE, context.timezone.as_str());
    headers.insert(h::LOCALE_FLAG, app::LOCALE_FLAG);

    // Geo: blank, never absent
    match &context.geo {
        Some(geo) => {
            headers.insert(h::GEO_LATITUDE, geo.latitude_text());
            headers.insert(h::GEO_LONGITUDE, geo.longitude_text());
            headers.insert(h::GEO_ISO_CODE, geo.iso_code.as_str());
            headers.insert(h::GEO_ISO_NAME, geo.iso_name.as_str());
            headers.insert(h::GEO_RELIABLE, geo.reliable_text());
        }
        None => {
            for name in [h::GEO_LATITUDE, h::GEO_LONGITUDE, h::GEO_ISO_CODE, h::GEO_ISO_NAME, h::GEO_RELIABLE] {
                headers.insert(name, "");
            }
        }
    }

    if !context.mcc.is_empty() {
        headers.insert(h::MCC, context.mcc.as_str());
    }

    // Signature
    headers.insert(h::SIGN, signature.sign.as_str());
    headers.insert(h::WRAPPED_KEY, signature.wrapped_key.as_str());
    headers.insert(h::IDENTITY_TAG, signature.identity_tag.as_str());
    headers.insert(h::TIMESTAMP, signature.timestamp.to_string());

    if overrides.with_session_tag {
        let token = overrides
            .session_token
            .clone()
            .unwrap_or_else(random_session_token);
        match session_tag(&token, &context.device_id) {
            Ok(tag) => headers.insert(h::SESSION_TAG, tag),
            Err(e) => debug!(error = %e, "session tag skipped"),
        }
    }

    headers
}
