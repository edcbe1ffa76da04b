// This suite pins down canonical value ordering:

// * flat params sort by key, independent of insertion order
// * nested payloads sort keys at every level, keep sequence order, skip nulls
// * scalar spelling (`false`, `27466`, `1.5`) matches the upstream

#[cfg(test)]
mod tests {
    use gargan_core::canonical::{extract_flat, extract_nested, format_number, CanonicalError, ParamValue, QueryParams};
    use proptest::prelude::*;
    use serde_json::json;

    fn play_params() -> QueryParams {
        QueryParams::new()
            .with("category", 0)
            .with("contentId", 27466)
            .with("definition", "GROOT_LD")
            .with("projection", false)
            .with("adComplete", false)
            .with("advanced", false)
            .with("tryCode", 0)
            .with("reliableDef", 0)
    }

    // ## 1. Flat params

    #[test]
    fn play_info_params_sort_by_code_point() {
        // adComplete, advanced, category, contentId, definition, projection, reliableDef, tryCode
        let values = extract_flat(&play_params()).unwrap();
        assert_eq!(
            values,
            vec!["false", "false", "0", "27466", "GROOT_LD", "false", "0", "0"]
        );
    }

    #[test]
    fn uppercase_sorts_before_lowercase() {
        let params = QueryParams::new().with("b", "2").with("B", "1").with("a", "3");
        assert_eq!(extract_flat(&params).unwrap(), vec!["1", "3", "2"]);
    }

    #[test]
    fn empty_params_give_no_values() {
        assert!(extract_flat(&QueryParams::new()).unwrap().is_empty());
    }

    #[test]
    fn null_in_flat_params_is_spelled_null() {
        let params = QueryParams::new().with("a", ParamValue::Null);
        assert_eq!(extract_flat(&params).unwrap(), vec!["null"]);
    }

    #[test]
    fn nested_value_in_flat_params_is_rejected() {
        let params = QueryParams::new().with("ids", vec![1, 2]);
        let err = extract_flat(&params).unwrap_err();
        assert_eq!(
            err,
            CanonicalError::NestedInFlat { key: "ids".into(), kind: "sequence" }
        );
    }

    // ## 2. Nested payloads

    #[test]
    fn nested_body_walk_matches_reference() {
        let body = ParamValue::from(json!({
            "size": 18,
            "keyword": "love (2024) it's!",
            "page": 1,
            "crTagIds": [3, null, "x~y"],
            "nested": { "b": true, "a": 1.5 }
        }));
        assert_eq!(
            extract_nested(&body),
            vec!["3", "x~y", "love (2024) it's!", "1.5", "true", "1", "18"]
        );
    }

    #[test]
    fn nulls_contribute_nothing() {
        let body = ParamValue::map()
            .with("a", ParamValue::Null)
            .with("b", vec![ParamValue::Null, ParamValue::Null])
            .with("c", ParamValue::map().with("d", ParamValue::Null));
        assert!(extract_nested(&body).is_empty());
        assert!(extract_nested(&ParamValue::Null).is_empty());
    }

    #[test]
    fn sequences_keep_order_and_duplicates() {
        let body = ParamValue::from(vec!["z", "a", "z"]);
        assert_eq!(extract_nested(&body), vec!["z", "a", "z"]);
    }

    #[test]
    fn scalar_root_is_a_single_value() {
        assert_eq!(extract_nested(&ParamValue::from(false)), vec!["false"]);
    }

    // ## 3. Number spelling

    #[test]
    fn number_text_matches_upstream_spelling() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(-6.2088), "-6.2088");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn json_numbers_keep_integer_form() {
        let v = ParamValue::from(json!(27466));
        assert_eq!(v.scalar_text().unwrap(), "27466");
        let big = ParamValue::from(json!(u64::MAX));
        assert_eq!(big.scalar_text().unwrap(), u64::MAX.to_string());
    }

    // ## 4. Properties

    proptest! {
        #[test]
        fn prop_flat_order_ignores_insertion_order(
            map in proptest::collection::btree_map("[a-zA-Z]{1,8}", "[ -~]{0,8}", 0..12),
            seed in any::<u64>(),
        ) {
            let mut entries: Vec<(String, String)> = map.clone().into_iter().collect();
            // deterministic shuffle
            let n = entries.len();
            if n > 1 {
                for i in 0..n {
                    let j = ((seed.wrapping_mul(i as u64 + 31)) % n as u64) as usize;
                    entries.swap(i, j);
                }
            }
            let params: QueryParams = entries.into_iter().collect();
            let expected: Vec<String> = map.values().cloned().collect();
            prop_assert_eq!(extract_flat(&params).unwrap(), expected);
        }

        #[test]
        fn prop_nested_sorts_every_level(
            inner in proptest::collection::btree_map("[a-z]{1,6}", 0i64..1000, 1..6),
            outer_key in "[a-z]{1,6}",
        ) {
            let mut reversed = ParamValue::map();
            for (k, v) in inner.iter().rev() {
                reversed = reversed.with(k.clone(), *v);
            }
            let body = ParamValue::map().with(outer_key, reversed);
            let expected: Vec<String> = inner.values().map(|v| v.to_string()).collect();
            prop_assert_eq!(extract_nested(&body), expected);
        }
    }
}
