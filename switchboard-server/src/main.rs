use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use switchboard_server::{Config, app};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let addr = config.addr();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Signaling server listening on http://{}", addr);

    axum::serve(listener, app(&config)).await?;
    Ok(())
}
