// Device context lifecycle: lazy init, memoisation, reset, patches, geo.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::thread;

    use gargan_core::device::{
        generate_ad_id, generate_device_id, timezone_label, DeviceContextPatch,
        DeviceContextStore, DeviceSeed, GeoOverride,
    };

    fn jakarta() -> GeoOverride {
        GeoOverride {
            latitude: -6.2088,
            longitude: 106.8456,
            iso_code: "ID".into(),
            iso_name: "Indonesia".into(),
            reliable: true,
            mcc: Some("510".into()),
        }
    }

    fn seed_from(pairs: &[(&str, &str)]) -> DeviceSeed {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        DeviceSeed::from_lookup(|name| map.get(name).cloned())
    }

    // ## 1. Generators

    #[test]
    fn device_id_is_16_lower_hex() {
        let id = generate_device_id();
        assert_eq!(id.len(), 16);
        assert!(id.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    }

    #[test]
    fn ad_id_is_uuid_v4() {
        let id = generate_ad_id();
        let parsed = uuid::Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(id, id.to_lowercase());
    }

    #[test]
    fn timezone_labels() {
        assert_eq!(timezone_label(0), "UTC");
        assert_eq!(timezone_label(7 * 3600), "GMT+7");
        assert_eq!(timezone_label(-5 * 3600), "GMT-5");
        assert_eq!(timezone_label(-(3 * 3600 + 1800)), "GMT-3:30");
        assert_eq!(timezone_label(5 * 3600 + 45 * 60), "GMT+5:45");
    }

    // ## 2. Seed

    #[test]
    fn seed_ignores_blank_values() {
        let seed = seed_from(&[("DEVICE_ID", "abc"), ("AD_ID", "  "), ("MCC", "")]);
        assert_eq!(seed.device_id.as_deref(), Some("abc"));
        assert_eq!(seed.ad_id, None);
        assert_eq!(seed.mcc, None);
    }

    #[test]
    fn seeded_values_win_over_generated() {
        let store = DeviceContextStore::new(seed_from(&[
            ("DEVICE_ID", "6e4e81ec362f7630"),
            ("LANGUAGE", "th"),
            ("TIMEZONE", "GMT+7"),
            ("MCC", "520"),
        ]));
        let ctx = store.get();
        assert_eq!(ctx.device_id, "6e4e81ec362f7630");
        assert_eq!(ctx.language, "th");
        assert_eq!(ctx.timezone, "GMT+7");
        assert_eq!(ctx.mcc, "520");
        assert_eq!(ctx.ad_id.len(), 36);
        assert!(ctx.geo.is_none());
    }

    #[test]
    fn unseeded_defaults() {
        let ctx = DeviceContextStore::default().get();
        assert_eq!(ctx.language, "en");
        assert_eq!(ctx.mcc, "");
        assert!(!ctx.timezone.is_empty());
    }

    // ## 3. Lifecycle

    #[test]
    fn get_is_memoised() {
        let store = DeviceContextStore::default();
        assert!(!store.is_initialized());
        let a = store.get();
        assert!(store.is_initialized());
        let b = store.get();
        assert_eq!(a, b);
    }

    #[test]
    fn reset_mints_new_identity() {
        let store = DeviceContextStore::default();
        let before = store.get();
        let after = store.reset();
        assert_ne!(before.device_id, after.device_id);
        assert_ne!(before.ad_id, after.ad_id);
        assert_eq!(store.get(), after);
    }

    #[test]
    fn reset_keeps_seeded_identity() {
        let store = DeviceContextStore::new(seed_from(&[("DEVICE_ID", "0011223344556677")]));
        store.set(DeviceContextPatch { device_id: Some("ffffffffffffffff".into()), ..Default::default() });
        assert_eq!(store.reset().device_id, "0011223344556677");
    }

    #[test]
    fn set_merges_only_present_fields() {
        let store = DeviceContextStore::default();
        let before = store.get();
        let after = store.set(DeviceContextPatch {
            language: Some("vi".into()),
            mcc: Some("452".into()),
            ..Default::default()
        });
        assert_eq!(after.language, "vi");
        assert_eq!(after.mcc, "452");
        assert_eq!(after.device_id, before.device_id);
        assert_eq!(after.ad_id, before.ad_id);
        assert_eq!(after.timezone, before.timezone);
    }

    #[test]
    fn set_initialises_lazily() {
        let store = DeviceContextStore::default();
        let ctx = store.set(DeviceContextPatch::default());
        assert!(store.is_initialized());
        assert_eq!(store.get(), ctx);
    }

    #[test]
    fn set_geo_copies_mcc() {
        let store = DeviceContextStore::default();
        let ctx = store.set_geo(jakarta());
        assert_eq!(ctx.geo, Some(jakarta()));
        assert_eq!(ctx.mcc, "510");
    }

    #[test]
    fn set_geo_without_mcc_keeps_existing() {
        let store = DeviceContextStore::new(seed_from(&[("MCC", "520")]));
        let ctx = store.set_geo(GeoOverride { mcc: None, ..jakarta() });
        assert_eq!(ctx.mcc, "520");
        let ctx = store.set_geo(GeoOverride { mcc: Some(String::new()), ..jakarta() });
        assert_eq!(ctx.mcc, "520");
    }

    #[test]
    fn clear_geo_removes_override() {
        let store = DeviceContextStore::default();
        store.set_geo(jakarta());
        let ctx = store.clear_geo();
        assert!(ctx.geo.is_none());
        // mcc copied by set_geo survives
        assert_eq!(ctx.mcc, "510");
    }

    #[test]
    fn concurrent_first_use_yields_one_identity() {
        let store = Arc::new(DeviceContextStore::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.get().device_id)
            })
            .collect();
        let ids: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(ids.windows(2).all(|w| w[0] == w[1]));
    }

    // ## 4. Serde

    #[test]
    fn geo_override_uses_camel_case() {
        let geo: GeoOverride = serde_json::from_str(
            r#"{"latitude":13.75,"longitude":100.5,"isoCode":"TH","isoName":"Thailand"}"#,
        )
        .unwrap();
        assert_eq!(geo.iso_code, "TH");
        assert!(!geo.reliable);
        assert_eq!(geo.mcc, None);
        assert_eq!(geo.latitude_text(), "13.75");
        assert_eq!(geo.reliable_text(), "false");
    }

    #[test]
    fn patch_deserialises_partial_json() {
        let patch: DeviceContextPatch = serde_json::from_str(r#"{"deviceId":"abc","lang":"x"}"#).unwrap();
        assert_eq!(patch.device_id.as_deref(), Some("abc"));
        assert_eq!(patch.language, None);
    }
}
