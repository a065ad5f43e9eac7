use crate::common::{fresh_recipient, transfer, TestContext};
use anyhow::{bail, ensure, Context, Result};
use e2e_wallet_adapter::{SendTransactionOptions, WalletAdapter, WalletEvent, WalletEventKind};
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use std::sync::{Arc, Mutex};
use tracing::info;

pub async fn run(ctx: &TestContext) -> Result<()> {
    info!("Running Happy Path Scenario...");
    let wallet = ctx.wallet()?;

    // 1. Connect
    info!("[1/3] Connecting...");
    let events = Arc::new(Mutex::new(Vec::new()));
    let seen = events.clone();
    let listener = wallet.on(WalletEventKind::Connect, move |event| {
        if let Ok(mut seen) = seen.lock() {
            seen.push(event.clone());
        }
    });
    wallet.connect().await?;
    wallet.off(listener);

    let pubkey = wallet.public_key().context("Wallet exposes no public key")?;
    let connect_events = events.lock().map(|events| events.clone()).unwrap_or_default();
    ensure!(
        connect_events == vec![WalletEvent::Connect(pubkey)],
        "Unexpected connect events: {:?}",
        connect_events
    );

    // 2. Sign Message
    info!("[2/3] Signing message...");
    let message = b"e2e wallet happy path";
    let signature = wallet.sign_message(message).await?;
    if !signature.verify(pubkey.as_ref(), message) {
        bail!("Message signature does not verify against {}", pubkey);
    }

    // 3. Transfer
    info!("[3/3] Sending transfer...");
    let recipient = fresh_recipient();
    let lamports = LAMPORTS_PER_SOL / 10;
    let signature = wallet
        .send_transaction(
            transfer(&pubkey, &recipient, lamports),
            &ctx.client,
            SendTransactionOptions::default(),
        )
        .await
        .context("Transfer failed")?;
    ctx.confirm(&signature).await?;

    let balance = ctx.balance(&recipient).await?;
    ensure!(balance == lamports, "Recipient balance {} != {}", balance, lamports);

    info!(%signature, "Happy Path Scenario passed");
    Ok(())
}
