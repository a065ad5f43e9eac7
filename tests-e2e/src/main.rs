mod common;
mod scenarios;

use anyhow::Result;
use common::TestContext;
use e2e_wallet_adapter::registry;
use solana_sdk::signer::Signer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting E2E wallet scenarios...");

    // 1. Initialize Context (constructs and registers the mock wallet)
    let ctx = TestContext::new().await?;
    info!(
        rpc_url = %ctx.rpc_url,
        wallet = %ctx.wallet()?.keypair().pubkey(),
        "Test context initialized"
    );

    // 2. Run Scenarios
    scenarios::happy_path::run(&ctx).await?;
    scenarios::rejection::run(&ctx).await?;
    scenarios::disconnect::run(&ctx).await?;

    registry::clear();
    info!("All scenarios completed successfully");
    Ok(())
}
