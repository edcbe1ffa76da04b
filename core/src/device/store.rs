// ## File: `src/device/store.rs`

//! Process-lifetime device context, owned and injected explicitly.
//!
//! Design notes:
//! - One store per server process; handlers share it behind an `Arc`.
//! - Lazy initialisation runs under the lock, so two concurrent first
//!   requests cannot each mint a different identity.
//! - Readers get a cloned snapshot; a request's headers never mix identities
//!   even if an admin call mutates the store mid-flight.

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::constants::DEFAULT_LANGUAGE;
use crate::device::generate::{generate_ad_id, generate_device_id, local_timezone_label};
use crate::device::types::{DeviceContext, DeviceContextPatch, DeviceSeed, GeoOverride};

#[derive(Debug, Default)]
pub struct DeviceContextStore {
    seed: DeviceSeed,
    inner: Mutex<Option<DeviceContext>>,
}

impl DeviceContextStore {
    pub fn new(seed: DeviceSeed) -> Self {
        Self {
            seed,
            inner: Mutex::new(None),
        }
    }

    /// Store seeded from `DEVICE_ID`, `AD_ID`, `LANGUAGE`, `TIMEZONE`, `MCC`.
    pub fn from_env() -> Self {
        Self::new(DeviceSeed::from_env())
    }

    pub fn seed(&self) -> &DeviceSeed {
        &self.seed
    }

    /// Whether the context has been materialised yet.
    pub fn is_initialized(&self) -> bool {
        self.inner.lock().is_some()
    }

    /// Current context, initialising it on first use.
    pub fn get(&self) -> DeviceContext {
        let mut guard = self.inner.lock();
        guard.get_or_insert_with(|| self.materialize()).clone()
    }

    /// Drop the memoised context and build a new one.
    pub fn reset(&self) -> DeviceContext {
        let fresh = self.materialize();
        *self.inner.lock() = Some(fresh.clone());
        info!(device_id = %fresh.device_id, "device context reset");
        fresh
    }

    /// Shallow-merge `patch` into the (initialised) context.
    pub fn set(&self, patch: DeviceContextPatch) -> DeviceContext {
        self.update(|ctx| ctx.apply(patch))
    }

    /// Replace the geo block. A geo `mcc` also becomes the context `mcc`.
    pub fn set_geo(&self, geo: GeoOverride) -> DeviceContext {
        self.update(|ctx| {
            if let Some(mcc) = geo.mcc.as_deref().filter(|m| !m.is_empty()) {
                ctx.mcc = mcc.to_string();
            }
            ctx.geo = Some(geo);
        })
    }

    /// Back to "no GPS fix".
    pub fn clear_geo(&self) -> DeviceContext {
        self.update(|ctx| ctx.geo = None)
    }

    fn update<F>(&self, f: F) -> DeviceContext
    where
        F: FnOnce(&mut DeviceContext),
    {
        let mut guard = self.inner.lock();
        let ctx = guard.get_or_insert_with(|| self.materialize());
        f(ctx);
        debug!(device_id = %ctx.device_id, "device context updated");
        ctx.clone()
    }

    fn materialize(&self) -> DeviceContext {
        let seed = &self.seed;
        DeviceContext {
            device_id: seed.device_id.clone().unwrap_or_else(generate_device_id),
            ad_id: seed.ad_id.clone().unwrap_or_else(generate_ad_id),
            language: seed.language.clone().unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            timezone: seed.timezone.clone().unwrap_or_else(local_timezone_label),
            mcc: seed.mcc.clone().unwrap_or_default(),
            geo: None,
        }
    }
}
