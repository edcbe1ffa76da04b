//! gargan-core
//!
//! Request-signing protocol for the Gargan mobile API.
//! No async runtime, no network, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Signing pipeline
pub mod canonical;
pub mod crypto;
pub mod signature;

// Identity + outbound headers
pub mod device;
pub mod headers;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::canonical::{ParamValue, QueryParams};
    pub use crate::crypto::{decrypt_response_payload, SignatureResult};
    pub use crate::device::{DeviceContext, DeviceContextPatch, DeviceContextStore, DeviceSeed, GeoOverride};
    pub use crate::headers::{build_headers, HeaderOverrides, HeaderSet};
    pub use crate::signature::{sign, sign_body};
    pub use crate::types::SignError;
    pub use crate::utils::current_time_millis;
}
