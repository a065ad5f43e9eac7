use crate::core::connection::SolConnection;
use crate::core::transaction::SignableTransaction;
use crate::error::Result;
use crate::types::{SendTransactionOptions, WalletReadyState};
use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;

/// The wallet capability applications drive.
/// Implemented by:
/// 1. Mock wallets holding a local Keypair (E2E tests)
/// 2. Real wallet bridges exposing the same connect/sign/send contract
#[async_trait]
pub trait WalletAdapter: Send + Sync {
    fn name(&self) -> &'static str;

    fn url(&self) -> &'static str;

    fn icon(&self) -> &'static str;

    fn ready_state(&self) -> WalletReadyState;

    /// Public key, exposed only while connected
    fn public_key(&self) -> Option<Pubkey>;

    fn connecting(&self) -> bool;

    fn connected(&self) -> bool {
        self.public_key().is_some()
    }

    async fn connect(&self) -> Result<()>;

    async fn disconnect(&self) -> Result<()>;

    /// Sign a transaction, returning it with the wallet's signature attached
    async fn sign_transaction<T: SignableTransaction>(&self, transaction: T) -> Result<T>;

    /// Sign a batch with a single approval. Output order matches input order.
    async fn sign_all_transactions<T: SignableTransaction>(
        &self,
        transactions: Vec<T>,
    ) -> Result<Vec<T>>;

    /// Prepare, sign and submit a transaction through `connection`
    async fn send_transaction<T, C>(
        &self,
        transaction: T,
        connection: &C,
        options: SendTransactionOptions,
    ) -> Result<Signature>
    where
        T: SignableTransaction,
        C: SolConnection + ?Sized;

    /// Detached signature over raw message bytes
    async fn sign_message(&self, message: &[u8]) -> Result<Signature>;
}
