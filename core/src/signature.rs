//! Stable public signing API.
//!
//! `sign` for query-parameter requests, `sign_body` for JSON bodies. Both build
//! the canonical string, encode it, and hand it to the hybrid signer.

use crate::canonical::{canonical_string, extract_flat, extract_nested, special_url_encode};
use crate::canonical::{ParamValue, QueryParams};
use crate::crypto::{sign_encoded, SignatureResult};
use crate::types::SignError;

/// Encoded canonical string for flat query params.
pub fn encoded_query_string(params: &QueryParams, timestamp: u64) -> Result<String, SignError> {
    let values = extract_flat(params)?;
    Ok(special_url_encode(&canonical_string(&values, timestamp)))
}

/// Encoded canonical string for a nested body.
pub fn encoded_body_string(body: &ParamValue, timestamp: u64) -> String {
    let values = extract_nested(body);
    special_url_encode(&canonical_string(&values, timestamp))
}

/// Sign a GET request's query params.
pub fn sign(params: &QueryParams, timestamp: u64) -> Result<SignatureResult, SignError> {
    let encoded = encoded_query_string(params, timestamp)?;
    Ok(sign_encoded(&encoded, timestamp)?)
}

/// Sign a POST request's JSON body.
pub fn sign_body(body: &ParamValue, timestamp: u64) -> Result<SignatureResult, SignError> {
    let encoded = encoded_body_string(body, timestamp);
    Ok(sign_encoded(&encoded, timestamp)?)
}
