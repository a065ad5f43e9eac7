use crate::common::{fresh_recipient, transfer, TestContext};
use anyhow::{bail, ensure, Context, Result};
use e2e_wallet_adapter::{SendTransactionOptions, WalletAdapter, WalletAdapterError};
use tracing::info;

pub async fn run(ctx: &TestContext) -> Result<()> {
    info!("Running Rejection Scenario...");
    let wallet = ctx.wallet()?;
    let pubkey = wallet.public_key().context("Wallet exposes no public key")?;
    let recipient = fresh_recipient();
    let lamports = 1_000_000;

    // 1. Rejected transfer must not reach the cluster
    info!("[1/2] Sending transfer with rejection armed...");
    wallet.reject_next();
    match wallet
        .send_transaction(
            transfer(&pubkey, &recipient, lamports),
            &ctx.client,
            SendTransactionOptions::default(),
        )
        .await
    {
        Err(WalletAdapterError::UserRejected) => info!("Expected rejection received"),
        Err(e) => bail!("Expected user rejection, got: {}", e),
        Ok(signature) => bail!("Transfer {} succeeded unexpectedly!", signature),
    }
    ensure!(
        ctx.balance(&recipient).await? == 0,
        "Rejected transfer reached the cluster"
    );

    // 2. The rejection is one-shot
    info!("[2/2] Sending transfer after rejection...");
    let signature = wallet
        .send_transaction(
            transfer(&pubkey, &recipient, lamports),
            &ctx.client,
            SendTransactionOptions::default(),
        )
        .await
        .context("Transfer after rejection failed")?;
    ctx.confirm(&signature).await?;
    ensure!(
        ctx.balance(&recipient).await? == lamports,
        "Transfer after rejection did not land"
    );

    info!("Rejection Scenario passed");
    Ok(())
}
