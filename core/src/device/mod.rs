//! device/mod.rs
//! Stable per-process device identity consumed by the header assembler.
//!
//! - `types`: context, geo override, patch and external seed.
//! - `generate`: random defaults shaped like the real app's identifiers.
//! - `language`: table-driven language normalisation.
//! - `store`: mutex-guarded lazy context with get/reset/set/set_geo.

pub mod types;
pub mod generate;
pub mod language;
pub mod store;

pub use types::*;
pub use generate::*;
pub use language::*;
pub use store::*;
