use anyhow::{anyhow, Context, Result};
use e2e_wallet_adapter::{registry, E2EWalletAdapterConfig, MockWalletAdapter};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_instruction,
    transaction::Transaction,
};
use std::env;
use std::sync::Arc;
use tracing::{debug, info};

pub struct TestContext {
    pub client: RpcClient,
    pub rpc_url: String,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        let rpc_url = env::var("RPC_URL").unwrap_or_else(|_| "http://127.0.0.1:8899".to_string());
        let airdrop_lamports = match env::var("AIRDROP_LAMPORTS") {
            Ok(value) => value.parse().context("AIRDROP_LAMPORTS must be an integer")?,
            Err(_) => 2 * LAMPORTS_PER_SOL,
        };

        let client = RpcClient::new_with_commitment(rpc_url.clone(), CommitmentConfig::confirmed());
        let config = E2EWalletAdapterConfig::from_env().context("Failed to load wallet config")?;

        // The harness keeps no handle: scenarios reach the wallet through the registry
        let pubkey = MockWalletAdapter::new(config).keypair().pubkey();

        let ctx = Self { client, rpc_url };
        ctx.fund_account(&pubkey, airdrop_lamports).await?;
        Ok(ctx)
    }

    /// The mock wallet currently registered for this process
    pub fn wallet(&self) -> Result<Arc<MockWalletAdapter>> {
        registry::active().ok_or_else(|| anyhow!("No mock wallet registered"))
    }

    pub async fn fund_account(&self, target: &Pubkey, lamports: u64) -> Result<()> {
        info!(%target, lamports, "Requesting airdrop");
        let signature = self
            .client
            .request_airdrop(target, lamports)
            .await
            .context("Airdrop request failed")?;
        self.confirm(&signature).await
    }

    pub async fn confirm(&self, signature: &Signature) -> Result<()> {
        self.client
            .poll_for_signature_with_commitment(signature, self.client.commitment())
            .await
            .with_context(|| format!("Transaction {} was not confirmed", signature))?;
        debug!(%signature, "Transaction confirmed");
        Ok(())
    }

    pub async fn balance(&self, pubkey: &Pubkey) -> Result<u64> {
        Ok(self.client.get_balance(pubkey).await?)
    }
}

/// Unsigned transfer paid by `payer`, left for the wallet to stamp and sign
pub fn transfer(payer: &Pubkey, recipient: &Pubkey, lamports: u64) -> Transaction {
    let ix = system_instruction::transfer(payer, recipient, lamports);
    Transaction::new_with_payer(&[ix], Some(payer))
}

/// Address unknown to the cluster, whose balance starts at zero
pub fn fresh_recipient() -> Pubkey {
    Keypair::new().pubkey()
}
