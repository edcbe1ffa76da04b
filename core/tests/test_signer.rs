// Hybrid signer coverage:

// * reference vectors for a fixed key origin (sign + identity tag)
// * the wrapped key is one RSA block, base64
// * the ciphertext decrypts back to the encoded canonical string
// * fresh key origins per call

#[cfg(test)]
mod tests {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use gargan_core::canonical::{ParamValue, QueryParams};
    use gargan_core::constants::{KEY_ORIGIN_ALPHABET, KEY_ORIGIN_LEN, RSA_MODULUS_LEN};
    use gargan_core::crypto::{
        aes128_ecb_decrypt, aes128_ecb_encrypt, embedded_public_key, encrypt_payload_b64,
        generate_key_origin, md5_hex, payload_sign, sha256_hex, sign_encoded,
        sign_encoded_with_key, wrap_key_origin, CryptoError, DigestAlg, KeyOrigin,
    };
    use gargan_core::signature::{encoded_body_string, encoded_query_string, sign, sign_body};
    use proptest::prelude::*;
    use serde_json::json;

    const TS: u64 = 1_700_000_000_000;
    const FIXED_KEY: &str = "AbCdEfGh12345678";

    fn fixed_key() -> KeyOrigin {
        KeyOrigin::parse(FIXED_KEY).unwrap()
    }

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

    fn search_body() -> ParamValue {
        ParamValue::from(json!({
            "size": 18,
            "keyword": "love (2024) it's!",
            "page": 1,
            "crTagIds": [3, null, "x~y"],
            "nested": { "b": true, "a": 1.5 }
        }))
    }

    // ## 1. Digests

    #[test]
    fn digest_reference_vectors() {
        assert_eq!(md5_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(DigestAlg::Md5.hex_len(), md5_hex("").len());
        assert_eq!(DigestAlg::Sha256.hex_len(), sha256_hex("").len());
    }

    // ## 2. AES-128-ECB

    #[test]
    fn aes128_block_reference_vector() {
        let key: Vec<u8> = (0u8..16).collect();
        let plaintext = hex::decode("00112233445566778899aabbccddeeff").unwrap();
        let out = aes128_ecb_encrypt(&key, &plaintext).unwrap();
        // one data block plus one full padding block
        assert_eq!(out.len(), 32);
        assert_eq!(hex::encode(&out[..16]), "69c4e0d86a7b0430d8cdb78070b4c55a");
    }

    #[test]
    fn aes128_rejects_wrong_key_len() {
        let err = aes128_ecb_encrypt(b"short", b"x").unwrap_err();
        assert_eq!(err, CryptoError::InvalidKeyLen { expected: 16, actual: 5 });
    }

    #[test]
    fn aes128_decrypt_rejects_truncated_ciphertext() {
        let err = aes128_ecb_decrypt(FIXED_KEY.as_bytes(), &[0u8; 15]).unwrap_err();
        assert!(matches!(err, CryptoError::Cipher(_)));
    }

    // ## 3. Key origin

    #[test]
    fn key_origin_parse_validates() {
        assert!(KeyOrigin::parse(FIXED_KEY).is_ok());
        assert_eq!(
            KeyOrigin::parse("abc").unwrap_err(),
            CryptoError::InvalidKeyLen { expected: 16, actual: 3 }
        );
        assert_eq!(
            KeyOrigin::parse("AbCdEfGh1234567!").unwrap_err(),
            CryptoError::InvalidKeyOrigin
        );
    }

    #[test]
    fn key_origin_debug_is_redacted() {
        let shown = format!("{:?}", fixed_key());
        assert!(!shown.contains(FIXED_KEY));
    }

    #[test]
    fn consecutive_key_origins_differ() {
        assert_ne!(generate_key_origin(), generate_key_origin());
    }

    // ## 4. RSA wrap

    #[test]
    fn embedded_key_is_1024_bit() {
        use rsa::traits::PublicKeyParts;
        assert_eq!(embedded_public_key().unwrap().size(), RSA_MODULUS_LEN);
    }

    #[test]
    fn wrapped_key_is_one_rsa_block() {
        let wrapped = wrap_key_origin(&fixed_key()).unwrap();
        assert_eq!(STANDARD.decode(&wrapped).unwrap().len(), RSA_MODULUS_LEN);
    }

    // ## 5. Reference signatures

    #[test]
    fn play_info_reference_signature() {
        let encoded = encoded_query_string(&play_params(), TS).unwrap();
        assert_eq!(encoded, "falsefalse027466GROOT_LDfalse001700000000000");

        assert_eq!(
            encrypt_payload_b64(&encoded, &fixed_key()).unwrap(),
            "H7pflBarQXfj2WiKklyeJBs0gKapDfJYS3uzJqlOt4MjUDwcWXcAm8DuECq40xPz"
        );

        let result = sign_encoded_with_key(&encoded, TS, fixed_key()).unwrap();
        assert_eq!(result.sign, "5335b0e658b1d64a8043528677e790af");
        assert_eq!(
            result.identity_tag,
            "f4d797fa313f2770746f818fa9333f3dba50f940cef7ff9423edb506941402b0"
        );
        assert_eq!(result.timestamp, TS);
        assert_eq!(result.key_origin.as_str(), FIXED_KEY);
    }

    #[test]
    fn search_body_reference_signature() {
        let encoded = encoded_body_string(&search_body(), TS);
        assert_eq!(encoded, "3x%7Eylove%20%282024%29%20it%27s!1.5true1181700000000000");

        assert_eq!(
            encrypt_payload_b64(&encoded, &fixed_key()).unwrap(),
            "L53HUFJlNyMeHs7nrjwYgZgTMEolYpnQhyDIRufNCtrK9fSHb7FBDs55gwjAIrd23mq4o0BB2G5+ix7LFuXCHw=="
        );
        assert_eq!(
            payload_sign(&encoded, &fixed_key()).unwrap(),
            "719c7ab0142081c3b6bef00d5d1fd4ab"
        );
    }

    #[test]
    fn ciphertext_decrypts_to_encoded_string() {
        let encoded = encoded_body_string(&search_body(), TS);
        let b64 = encrypt_payload_b64(&encoded, &fixed_key()).unwrap();
        let ct = STANDARD.decode(b64).unwrap();
        let pt = aes128_ecb_decrypt(FIXED_KEY.as_bytes(), &ct).unwrap();
        assert_eq!(String::from_utf8(pt).unwrap(), encoded);
    }

    // ## 6. Public API

    #[test]
    fn sign_fills_every_field() {
        let result = sign(&play_params(), TS).unwrap();
        assert_eq!(result.sign.len(), 32);
        assert_eq!(result.identity_tag.len(), 64);
        assert_eq!(result.identity_tag, sha256_hex(result.key_origin.as_str()));
        assert_eq!(result.timestamp, TS);
        assert!(!result.wrapped_key.is_empty());
    }

    #[test]
    fn sign_uses_a_fresh_key_each_call() {
        let a = sign(&play_params(), TS).unwrap();
        let b = sign(&play_params(), TS).unwrap();
        assert_ne!(a.key_origin, b.key_origin);
        assert_ne!(a.sign, b.sign);
    }

    #[test]
    fn sign_body_matches_manual_pipeline() {
        let result = sign_body(&search_body(), TS).unwrap();
        let encoded = encoded_body_string(&search_body(), TS);
        assert_eq!(result.sign, payload_sign(&encoded, &result.key_origin).unwrap());
    }

    #[test]
    fn sign_rejects_nested_flat_params() {
        let params = QueryParams::new().with("ids", vec![1, 2]);
        assert!(sign(&params, TS).is_err());
    }

    #[test]
    fn sign_encoded_handles_empty_input() {
        let result = sign_encoded("", TS).unwrap();
        assert_eq!(result.sign.len(), 32);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_key_origin_shape(_seed in any::<u8>()) {
            let key = generate_key_origin();
            prop_assert_eq!(key.as_str().len(), KEY_ORIGIN_LEN);
            prop_assert!(key.as_bytes().iter().all(|b| KEY_ORIGIN_ALPHABET.contains(b)));
        }

        #[test]
        fn prop_payload_roundtrips(input in "[ -~]{0,64}") {
            let key = generate_key_origin();
            let ct = STANDARD.decode(encrypt_payload_b64(&input, &key).unwrap()).unwrap();
            prop_assert_eq!(ct.len() % 16, 0);
            let pt = aes128_ecb_decrypt(key.as_bytes(), &ct).unwrap();
            prop_assert_eq!(String::from_utf8(pt).unwrap(), input);
        }
    }
}
