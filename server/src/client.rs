//! Upstream HTTP client
//!
//! Every call is signed with a fresh timestamp and carries the device context
//! snapshot taken at call time. No retries; one attempt per request with the
//! configured timeout.

use std::sync::Arc;

use gargan_core::canonical::{ParamValue, QueryParams};
use gargan_core::constants::header_names;
use gargan_core::crypto::decrypt_response_payload;
use gargan_core::device::DeviceContextStore;
use gargan_core::headers::{build_headers, HeaderOverrides, HeaderSet};
use gargan_core::signature::{sign, sign_body};
use gargan_core::utils::{current_time_millis, short_id};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::{debug, error, warn};
use url::Url;

use crate::config::ServerConfig;
use crate::error::{ProxyError, Result};

/// Signed client for the Gargan API.
#[derive(Clone)]
pub struct GarganClient {
    http: reqwest::Client,
    base_url: Url,
    store: Arc<DeviceContextStore>,
    play_url_key: Option<String>,
    session_tag: bool,
}

impl GarganClient {
    pub fn new(config: &ServerConfig, store: Arc<DeviceContextStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.upstream_url()?,
            store,
            play_url_key: config.play_url_key.clone().filter(|k| !k.is_empty()),
            session_tag: config.session_tag,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn store(&self) -> &Arc<DeviceContextStore> {
        &self.store
    }

    /// Signed GET; `params` are signed and sent as the query string in caller order.
    pub async fn get(&self, endpoint: &str, params: &QueryParams) -> Result<Value> {
        let signature = sign(params, current_time_millis())?;
        let headers = build_headers(&signature, &self.store.get(), &self.overrides());

        debug!(endpoint, params = params.len(), "GET upstream");
        let request = self
            .http
            .get(self.endpoint_url(endpoint)?)
            .query(&params.to_query_pairs())
            .headers(to_header_map(&headers)?);

        self.execute(endpoint, request).await
    }

    /// Signed POST with a JSON body.
    pub async fn post(&self, endpoint: &str, body: &ParamValue) -> Result<Value> {
        let signature = sign_body(body, current_time_millis())?;
        let context = self.store.get();
        let headers = build_headers(&signature, &context, &self.overrides());

        debug!(endpoint, device = short_id(&context.device_id), "POST upstream");
        let request = self
            .http
            .post(self.endpoint_url(endpoint)?)
            .headers(to_header_map(&headers)?)
            .json(&body.to_json());

        self.execute(endpoint, request).await
    }

    fn overrides(&self) -> HeaderOverrides {
        HeaderOverrides {
            with_session_tag: self.session_tag,
            ..Default::default()
        }
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        self.base_url
            .join(endpoint)
            .map_err(|e| ProxyError::Configuration {
                message: format!("Invalid endpoint {}: {}", endpoint, e),
            })
    }

    async fn execute(&self, endpoint: &str, request: reqwest::RequestBuilder) -> Result<Value> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let encrypted = response
            .headers()
            .get(header_names::RESPONSE_ENCRYPTED)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let bytes = response.bytes().await?;

        let result = decode_response(status, encrypted.as_deref(), &bytes, self.play_url_key.as_deref());
        if let Err(e) = &result {
            error!(endpoint, status, error = %e, "upstream call failed");
        }
        result
    }
}

/// Assembled header set as a reqwest header map. Names go out lowercased.
pub fn to_header_map(headers: &HeaderSet) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers.iter() {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| ProxyError::Configuration {
            message: format!("invalid header name {}: {}", name, e),
        })?;
        let value = HeaderValue::from_str(value).map_err(|e| ProxyError::Configuration {
            message: format!("invalid header value for {:?}: {}", name, e),
        })?;
        map.insert(name, value);
    }
    Ok(map)
}

/// Turn an upstream response into JSON.
///
/// - status >= 400: `ProxyError::Upstream` with the body (JSON, or text) as details.
/// - `ecy: 1` with a string `data` field: decrypted with `play_url_key` in place.
///   Decryption failure leaves the payload untouched.
pub fn decode_response(
    status: u16,
    encrypted: Option<&str>,
    body: &[u8],
    play_url_key: Option<&str>,
) -> Result<Value> {
    if status >= 400 {
        let details = serde_json::from_slice(body)
            .ok()
            .or_else(|| {
                let text = String::from_utf8_lossy(body);
                (!text.is_empty()).then(|| Value::String(text.into_owned()))
            });
        return Err(ProxyError::Upstream { status, details });
    }

    let mut value: Value = serde_json::from_slice(body)?;
    if encrypted.map(str::trim) == Some("1") {
        match play_url_key {
            Some(key) => decrypt_data_field(&mut value, key),
            None => warn!("encrypted response but no play URL key configured"),
        }
    }
    Ok(value)
}

fn decrypt_data_field(value: &mut Value, key: &str) {
    let Some(slot) = value.get_mut("data") else {
        return;
    };
    let Some(cipher_text) = slot.as_str() else {
        return;
    };

    match decrypt_response_payload(cipher_text, key) {
        Ok(plain) => {
            *slot = serde_json::from_str(&plain).unwrap_or(Value::String(plain));
        }
        Err(e) => warn!(error = %e, "response decryption failed, passing payload through"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gargan_core::crypto::{sign_encoded_with_key, KeyOrigin};
    use gargan_core::device::DeviceContext;
    use serde_json::json;

    const KEY_16: &str = "MDEyMzQ1Njc4OWFiY2RlZg==";

    #[test]
    fn plain_response_passes_through() {
        let value = decode_response(200, None, br#"{"code":0,"data":{"a":1}}"#, None).unwrap();
        assert_eq!(value, json!({"code": 0, "data": {"a": 1}}));
    }

    #[test]
    fn encrypted_data_is_decrypted_and_parsed() {
        let body = br#"{"code":0,"data":"csoL4H6c+G9dGF2BjtlBZSuhg9Up1X4Ld8VwNCV9mlY="}"#;
        let value = decode_response(200, Some("1"), body, Some(KEY_16)).unwrap();
        assert_eq!(value["data"]["playUrl"], "https://x/y.m3u8");
    }

    #[test]
    fn decryption_failure_keeps_payload() {
        let body = br#"{"data":"not-base64!"}"#;
        let value = decode_response(200, Some("1"), body, Some(KEY_16)).unwrap();
        assert_eq!(value["data"], "not-base64!");
    }

    #[test]
    fn ecy_without_key_keeps_payload() {
        let body = br#"{"data":"hUx5gyknIuFJ+3r3IfxcxA=="}"#;
        let value = decode_response(200, Some("1"), body, None).unwrap();
        assert_eq!(value["data"], "hUx5gyknIuFJ+3r3IfxcxA==");
    }

    #[test]
    fn error_status_carries_details() {
        let err = decode_response(403, None, br#"{"msg":"blocked"}"#, None).unwrap_err();
        match err {
            ProxyError::Upstream { status, details } => {
                assert_eq!(status, 403);
                assert_eq!(details, Some(json!({"msg": "blocked"})));
            }
            other => panic!("unexpected {other:?}"),
        }

        let err = decode_response(502, None, b"Bad Gateway", None).unwrap_err();
        assert!(matches!(err, ProxyError::Upstream { details: Some(Value::String(_)), .. }));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(decode_response(200, None, b"<html>", None), Err(ProxyError::Json(_))));
    }

    #[test]
    fn header_map_keeps_empty_geo_values() {
        let signature = sign_encoded_with_key("x", 1, KeyOrigin::parse("AbCdEfGh12345678").unwrap()).unwrap();
        let context = DeviceContext {
            device_id: "6e4e81ec362f7630".into(),
            ad_id: "4071e87a-08cc-4ee3-9922-0577f83c73b2".into(),
            language: "en".into(),
            timezone: "UTC".into(),
            mcc: String::new(),
            geo: None,
        };
        let headers = build_headers(&signature, &context, &HeaderOverrides::default());
        let map = to_header_map(&headers).unwrap();
        assert_eq!(map.len(), headers.len());
        assert_eq!(map.get("geoIsoCode").unwrap(), "");
        assert_eq!(map.get("versionCode").unwrap(), "218");
    }

    #[test]
    fn client_builds_from_default_config() {
        let client = GarganClient::new(&ServerConfig::default(), Arc::new(DeviceContextStore::default())).unwrap();
        assert_eq!(
            client.endpoint_url("/gargan/homePage/getHome").unwrap().as_str(),
            "https://api.gargan.video/gargan/homePage/getHome"
        );
    }
}
