//! Proxy server entry point

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use gargan_core::device::DeviceContextStore;
use gargan_core::utils::short_id;
use gargan_server::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_PLAY_URL_KEY, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS,
    DEFAULT_UPSTREAM_BASE_URL,
};
use gargan_server::{routes, GarganClient, MovieboxService, ServerConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bind address
    #[arg(long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
    bind_address: String,

    /// Port
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Upstream API base URL
    #[arg(long, env = "UPSTREAM_BASE_URL", default_value = DEFAULT_UPSTREAM_BASE_URL)]
    upstream_base_url: String,

    /// Base64 key for encrypted (`ecy: 1`) responses; empty disables decryption
    #[arg(long, env = "PLAY_URL_KEY", default_value = DEFAULT_PLAY_URL_KEY, hide_env_values = true)]
    play_url_key: String,

    /// Upstream timeout in seconds
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    upstream_timeout_secs: u64,

    /// Send the auxiliary session tag header
    #[arg(long, env = "SESSION_TAG")]
    session_tag: bool,

    /// Disable CORS headers
    #[arg(long)]
    no_cors: bool,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        ServerConfig {
            bind_address: args.bind_address,
            port: args.port,
            upstream_base_url: args.upstream_base_url,
            play_url_key: Some(args.play_url_key).filter(|k| !k.is_empty()),
            upstream_timeout_secs: args.upstream_timeout_secs,
            session_tag: args.session_tag,
            enable_cors: !args.no_cors,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gargan_server=info,gargan_core=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from(Args::parse());
    let addr = config.socket_addr()?;

    info!("Starting Gargan proxy");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: {:?}", config);

    // Identity is seeded from DEVICE_ID, AD_ID, LANGUAGE, TIMEZONE, MCC
    let store = Arc::new(DeviceContextStore::from_env());
    let device = store.get();
    info!(device = short_id(&device.device_id), language = %device.language, "device context ready");

    let client = GarganClient::new(&config, store).context("building upstream client")?;
    let app = routes(MovieboxService::new(client), config.enable_cors);

    let (bound, server) = warp::serve(app)
        .try_bind_with_graceful_shutdown(addr, async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutdown signal received");
            }
        })
        .with_context(|| format!("binding {}", addr))?;

    info!("Listening on http://{}", bound);
    server.await;
    info!("Server stopped");

    Ok(())
}
