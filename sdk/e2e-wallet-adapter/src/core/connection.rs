use crate::types::SendOptions;
use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::RpcSendTransactionConfig;
use solana_sdk::hash::Hash;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::VersionedTransaction;
use std::error::Error;

/// Network client the adapter delegates to when sending transactions.
///
/// Errors are opaque to the adapter and reach the caller unchanged.
#[async_trait]
pub trait SolConnection: Send + Sync {
    /// Recent blockhash used to stamp transactions that carry none
    async fn get_latest_blockhash(&self) -> Result<Hash, Box<dyn Error + Send + Sync>>;

    /// Submit a signed transaction and return the signature the network assigned
    async fn send_transaction(
        &self,
        tx: &VersionedTransaction,
        options: &SendOptions,
    ) -> Result<Signature, Box<dyn Error + Send + Sync>>;
}

impl SendOptions {
    /// RPC send configuration carrying these options
    pub fn to_rpc_config(&self) -> RpcSendTransactionConfig {
        RpcSendTransactionConfig {
            skip_preflight: self.skip_preflight,
            preflight_commitment: self.preflight_commitment,
            max_retries: self.max_retries,
            min_context_slot: self.min_context_slot,
            ..Default::default()
        }
    }
}

#[async_trait]
impl SolConnection for RpcClient {
    async fn get_latest_blockhash(&self) -> Result<Hash, Box<dyn Error + Send + Sync>> {
        Ok(RpcClient::get_latest_blockhash(self).await?)
    }

    async fn send_transaction(
        &self,
        tx: &VersionedTransaction,
        options: &SendOptions,
    ) -> Result<Signature, Box<dyn Error + Send + Sync>> {
        Ok(self.send_transaction_with_config(tx, options.to_rpc_config()).await?)
    }
}
