//! canonical/mod.rs
//! Turns request parameters into the exact string the signer consumes.
//!
//! Flow: params -> ordered values (`extract`) -> values + timestamp
//! (`canonical_string`) -> upstream percent-encoding (`special_url_encode`).

pub mod types;
pub mod value;
pub mod extract;
pub mod encode;

pub use types::*;
pub use value::*;
pub use extract::*;
pub use encode::*;
