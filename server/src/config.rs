//! Proxy server configuration

use std::net::SocketAddr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_PLAY_URL_KEY, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS,
    DEFAULT_UPSTREAM_BASE_URL,
};
use crate::error::{ProxyError, Result};

#[derive(Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP bind address
    pub bind_address: String,

    /// HTTP port
    pub port: u16,

    /// Upstream API base URL
    pub upstream_base_url: String,

    /// Base64 AES key for `ecy: 1` response payloads; `None` disables decryption
    pub play_url_key: Option<String>,

    /// Per-request upstream timeout in seconds
    pub upstream_timeout_secs: u64,

    /// Send the auxiliary session tag header
    pub session_tag: bool,

    /// Permissive CORS for browser clients
    pub enable_cors: bool,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .map_err(|e| ProxyError::Configuration {
                message: format!("Invalid bind address: {}", e),
            })
    }

    pub fn upstream_url(&self) -> Result<Url> {
        Url::parse(&self.upstream_base_url).map_err(|e| ProxyError::Configuration {
            message: format!("Invalid upstream base URL {:?}: {}", self.upstream_base_url, e),
        })
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            play_url_key: Some(DEFAULT_PLAY_URL_KEY.to_string()),
            upstream_timeout_secs: DEFAULT_TIMEOUT_SECS,
            session_tag: false,
            enable_cors: true,
        }
    }
}

// Key material stays out of startup logs.
impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("bind_address", &self.bind_address)
            .field("port", &self.port)
            .field("upstream_base_url", &self.upstream_base_url)
            .field("play_url_key", &self.play_url_key.as_ref().map(|_| "<set>"))
            .field("upstream_timeout_secs", &self.upstream_timeout_secs)
            .field("session_tag", &self.session_tag)
            .field("enable_cors", &self.enable_cors)
            .finish()
    }
}
