//! Protocol constants fixed by the upstream server.
//!
//! Changing anything in here breaks compatibility with the remote API.
//! Treat these as versioned values, never as configuration.

/// Protocol revision these constants were captured from (app version code 218).
pub const PROTOCOL_REVISION: u16 = 1;

/// RSA public key used to wrap the ephemeral AES key (1024-bit, SPKI PEM).
pub const RSA_PUBLIC_KEY_PEM: &str = "-----BEGIN PUBLIC KEY-----
MIGfMA0GCSqGSIb3DQEBAQUAA4GNADCBiQKBgQCQZSK95u6frUySB1bNwfh8B69R
G0pJtVP7W0S37xqzTPhPKABdPfP/yKUiLaJSXaKfgnpHki7gTaxNiVjQsPSxNpSb
Bd7m0K2dv8UkwFxJQWWWTx6XbD7hlBiFEH17PAtdYhuFTqd8FhZmUPKcFFqu/oFL
ouiXIpJmJgfiQNzoLQIDAQAB
-----END PUBLIC KEY-----";

/// Modulus size of the embedded key, in bytes.
pub const RSA_MODULUS_LEN: usize = 128;

/// Ephemeral key origin length (also the AES-128 key length).
pub const KEY_ORIGIN_LEN: usize = 16;

/// Alphabet the key origin is drawn from.
pub const KEY_ORIGIN_ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// App identity as seen in intercepted traffic.
pub mod app {
    pub const CLIENT_TYPE: &str = "android_gargan";
    pub const VERSION_CODE: u32 = 218;
    pub const USER_AGENT: &str = "okhttp/4.12.0";
    pub const ACCEPT_ENCODING: &str = "gzip";
    pub const CONNECTION: &str = "Keep-Alive";
    pub const LOCALE_FLAG: &str = "true";
}

/// Outbound header names. Case matters to the upstream.
pub mod header_names {
    pub const ACCEPT_ENCODING: &str = "Accept-Encoding";
    pub const USER_AGENT: &str = "User-Agent";
    pub const CONNECTION: &str = "Connection";

    pub const CLIENT_TYPE: &str = "clientType";
    pub const VERSION_CODE: &str = "versionCode";
    pub const DEVICE_ID: &str = "deviceId";
    pub const AD_ID: &str = "adId";
    pub const LANG: &str = "lang";
    pub const TIMEZONE: &str = "timezone";
    pub const LOCALE_FLAG: &str = "keke";
    pub const MCC: &str = "mcc";

    pub const GEO_LATITUDE: &str = "geoLatitude";
    pub const GEO_LONGITUDE: &str = "geoLongitude";
    pub const GEO_ISO_CODE: &str = "geoIsoCode";
    pub const GEO_ISO_NAME: &str = "geoIsoName";
    pub const GEO_RELIABLE: &str = "geoReliable";

    pub const SIGN: &str = "sign";
    pub const WRAPPED_KEY: &str = "aesKey";
    pub const IDENTITY_TAG: &str = "usertype";
    pub const TIMESTAMP: &str = "currentTime";

    /// Best-effort obfuscated session header. Not confirmed against live traffic.
    pub const SESSION_TAG: &str = "sessionTag";

    /// Response header flagging an encrypted `data` payload.
    pub const RESPONSE_ENCRYPTED: &str = "ecy";
}

/// Languages the app ships with.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "zh_CN", "zh_TW", "in_ID", "th", "vi", "ms", "ar", "es", "fr", "pt", "ru",
];

/// Fallback for anything not in the table.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Random session token length used when none is supplied.
pub const SESSION_TOKEN_LEN: usize = 16;
