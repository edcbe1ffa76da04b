// ## File: `src/device/types.rs`

//! Device identity carried on every outbound request.
//!
//! Serialized in camelCase so the admin surface speaks the same field names
//! as the upstream headers.

use serde::{Deserialize, Serialize};

use crate::canonical::format_number;

/// Optional geo override. Absent means "no GPS fix": geo headers are sent empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoOverride {
    pub latitude: f64,
    pub longitude: f64,
    pub iso_code: String,
    pub iso_name: String,
    #[serde(default)]
    pub reliable: bool,
    /// Mobile country code of the region; copied to the context `mcc` on `set_geo`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcc: Option<String>,
}

impl GeoOverride {
    pub fn latitude_text(&self) -> String {
        format_number(self.latitude)
    }

    pub fn longitude_text(&self) -> String {
        format_number(self.longitude)
    }

    pub fn reliable_text(&self) -> &'static str {
        if self.reliable { "true" } else { "false" }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceContext {
    /// 16 lowercase hex chars.
    pub device_id: String,
    /// UUID v4.
    pub ad_id: String,
    pub language: String,
    pub timezone: String,
    /// Mobile country code; header omitted when empty.
    #[serde(default)]
    pub mcc: String,
    #[serde(default)]
    pub geo: Option<GeoOverride>,
}

impl DeviceContext {
    /// Shallow merge: every `Some` field in `patch` replaces the current one.
    pub fn apply(&mut self, patch: DeviceContextPatch) {
        if let Some(v) = patch.device_id {
            self.device_id = v;
        }
        if let Some(v) = patch.ad_id {
            self.ad_id = v;
        }
        if let Some(v) = patch.language {
            self.language = v;
        }
        if let Some(v) = patch.timezone {
            self.timezone = v;
        }
        if let Some(v) = patch.mcc {
            self.mcc = v;
        }
        if let Some(v) = patch.geo {
            self.geo = Some(v);
        }
    }
}

/// Partial update for [`DeviceContext`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceContextPatch {
    pub device_id: Option<String>,
    pub ad_id: Option<String>,
    pub language: Option<String>,
    pub timezone: Option<String>,
    pub mcc: Option<String>,
    pub geo: Option<GeoOverride>,
}

/// Externally supplied identity, read at (re)initialisation time.
/// Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceSeed {
    pub device_id: Option<String>,
    pub ad_id: Option<String>,
    pub language: Option<String>,
    pub timezone: Option<String>,
    pub mcc: Option<String>,
}

impl DeviceSeed {
    pub const ENV_DEVICE_ID: &'static str = "DEVICE_ID";
    pub const ENV_AD_ID: &'static str = "AD_ID";
    pub const ENV_LANGUAGE: &'static str = "LANGUAGE";
    pub const ENV_TIMEZONE: &'static str = "TIMEZONE";
    pub const ENV_MCC: &'static str = "MCC";

    /// Read the seed from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the seed through an arbitrary lookup (env, config file, tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            device_id: get(Self::ENV_DEVICE_ID),
            ad_id: get(Self::ENV_AD_ID),
            language: get(Self::ENV_LANGUAGE),
            timezone: get(Self::ENV_TIMEZONE),
            mcc: get(Self::ENV_MCC),
        }
    }
}
