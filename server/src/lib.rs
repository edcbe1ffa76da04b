//! Gargan proxy server
//!
//! Republishes the signed Gargan mobile API as a plain REST API.
//! All signing and device identity live in `gargan_core`; this crate owns
//! the runtime, the upstream HTTP client and the warp routes.

#![recursion_limit = "256"]

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod params;
pub mod routes;
pub mod service;

pub use client::GarganClient;
pub use config::ServerConfig;
pub use error::{ProxyError, Result};
pub use routes::routes;
pub use service::MovieboxService;
