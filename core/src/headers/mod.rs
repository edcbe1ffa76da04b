// ## src/headers/mod.rs

//! headers/mod.rs
//! Outbound request headers for the Gargan API.
//!
//! Notes:
//! - Header names and fixed values are protocol constants (`crate::constants`).
//! - Four signature headers, five geo headers, identity and transport headers.
//! - The optional session tag is the only best-effort header.

pub mod types;
pub mod session;
pub mod assemble;

pub use types::*;
pub use session::*;
pub use assemble::*;
