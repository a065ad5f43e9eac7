use crate::common::TestContext;
use anyhow::{ensure, Result};
use e2e_wallet_adapter::{WalletAdapter, WalletEventKind};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::info;

pub async fn run(ctx: &TestContext) -> Result<()> {
    info!("Running Disconnect Scenario...");
    let wallet = ctx.wallet()?;

    let disconnects = Arc::new(AtomicUsize::new(0));
    let counter = disconnects.clone();
    wallet.once(WalletEventKind::Disconnect, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    wallet.disconnect().await?;
    ensure!(!wallet.connected(), "Wallet still connected after disconnect");
    ensure!(wallet.public_key().is_none(), "Public key exposed after disconnect");
    ensure!(disconnects.load(Ordering::SeqCst) == 1, "Disconnect event not emitted");

    wallet.connect().await?;
    ensure!(wallet.connected(), "Wallet did not reconnect");

    info!("Disconnect Scenario passed");
    Ok(())
}
