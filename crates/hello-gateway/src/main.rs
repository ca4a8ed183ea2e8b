//! `hello-gateway` binary.
//!
//! Configuration comes from `HELLO_GATEWAY_*` environment variables; see
//! [`GatewayConfig::from_env`].

use anyhow::{Context, Result};
use hello_gateway::{telemetry, GatewayConfig, GreetingGateway, VERSION};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let config = GatewayConfig::from_env().context("invalid environment configuration")?;
    telemetry::init_logging(&config.logging).context("failed to initialise logging")?;

    info!(version = VERSION, "hello-gateway starting");

    let gateway = GreetingGateway::new(config).context("invalid gateway configuration")?;
    let running = gateway.start().await.context("failed to start gateway")?;

    info!(addr = %running.local_addr(), "Listening");

    running
        .run_until(shutdown_signal())
        .await
        .context("gateway stopped with an error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
