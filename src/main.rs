use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use paystub_engine::api::{AppState, create_router};
use paystub_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/us_2025";
const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir = env::var("PAYSTUB_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind = env::var("PAYSTUB_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());

    let tables = ConfigLoader::load(&config_dir)
        .with_context(|| format!("loading tax tables from {}", config_dir))?;
    let app = create_router(AppState::new(tables));

    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("invalid PAYSTUB_BIND address '{}'", bind))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
