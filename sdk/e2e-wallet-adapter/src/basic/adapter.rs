use crate::basic::events::{EventEmitter, ListenerId, WalletEvent, WalletEventKind};
use crate::basic::reject::RejectFlag;
use crate::config::E2EWalletAdapterConfig;
use crate::core::connection::SolConnection;
use crate::core::constants::{WALLET_ICON, WALLET_NAME, WALLET_URL};
use crate::core::signer::WalletAdapter;
use crate::core::transaction::SignableTransaction;
use crate::error::{Result, WalletAdapterError};
use crate::registry;
use crate::types::{AdapterState, SendTransactionOptions, WalletReadyState};
use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

/// In-memory wallet for end-to-end tests.
///
/// Behaves like an installed browser wallet that approves everything, unless
/// [`reject_next`](Self::reject_next) was called, in which case exactly the
/// next signing or sending operation fails with
/// [`WalletAdapterError::UserRejected`].
pub struct MockWalletAdapter {
    keypair: Keypair,
    ready_state: WalletReadyState,
    state: RwLock<AdapterState>,
    reject: RejectFlag,
    events: EventEmitter,
}

impl MockWalletAdapter {
    /// Create an adapter and register it as the active wallet.
    /// Starts out connected, with the configured or a freshly generated keypair.
    pub fn new(config: E2EWalletAdapterConfig) -> Arc<Self> {
        let adapter = Arc::new(Self {
            keypair: config.keypair.unwrap_or_else(Keypair::new),
            ready_state: WalletReadyState::Installed,
            state: RwLock::new(AdapterState::Connected),
            reject: RejectFlag::new(),
            events: EventEmitter::new(),
        });
        registry::register(&adapter);
        adapter
    }

    /// Create an adapter around a freshly generated keypair
    pub fn generate() -> Arc<Self> {
        Self::new(E2EWalletAdapterConfig::default())
    }

    /// The underlying keypair, for tests that need to check signatures
    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }

    pub fn state(&self) -> AdapterState {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make the next signing or sending operation fail as if the user declined it
    pub fn reject_next(&self) {
        debug!(pubkey = %self.keypair.pubkey(), "next operation will be rejected");
        self.reject.arm();
    }

    pub fn on<F>(&self, kind: WalletEventKind, listener: F) -> ListenerId
    where
        F: Fn(&WalletEvent) + Send + Sync + 'static,
    {
        self.events.on(kind, listener)
    }

    pub fn once<F>(&self, kind: WalletEventKind, listener: F) -> ListenerId
    where
        F: Fn(&WalletEvent) + Send + Sync + 'static,
    {
        self.events.once(kind, listener)
    }

    pub fn off(&self, id: ListenerId) -> bool {
        self.events.off(id)
    }

    pub fn listener_count(&self, kind: WalletEventKind) -> usize {
        self.events.listener_count(kind)
    }

    fn set_state(&self, state: AdapterState) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = state;
    }

    fn check_for_reject(&self) -> Result<()> {
        if self.reject.take() {
            warn!(pubkey = %self.keypair.pubkey(), "E2E wallet rejected operation");
            return Err(WalletAdapterError::UserRejected);
        }
        Ok(())
    }
}

#[async_trait]
impl WalletAdapter for MockWalletAdapter {
    fn name(&self) -> &'static str {
        WALLET_NAME
    }

    fn url(&self) -> &'static str {
        WALLET_URL
    }

    fn icon(&self) -> &'static str {
        WALLET_ICON
    }

    fn ready_state(&self) -> WalletReadyState {
        self.ready_state
    }

    fn public_key(&self) -> Option<Pubkey> {
        self.state().is_connected().then(|| self.keypair.pubkey())
    }

    fn connecting(&self) -> bool {
        self.state() == AdapterState::Connecting
    }

    async fn connect(&self) -> Result<()> {
        self.set_state(AdapterState::Connecting);
        let pubkey = self.keypair.pubkey();
        self.set_state(AdapterState::Connected);
        debug!(%pubkey, "mock wallet connected");

        self.events.emit(&WalletEvent::Connect(pubkey));
        Ok(())
    }

    async fn disconnect(&self) -> Result<()> {
        self.set_state(AdapterState::Disconnected);
        debug!(pubkey = %self.keypair.pubkey(), "mock wallet disconnected");

        self.events.emit(&WalletEvent::Disconnect);
        Ok(())
    }

    async fn sign_transaction<T: SignableTransaction>(&self, mut transaction: T) -> Result<T> {
        self.check_for_reject()?;
        transaction.sign_with(&[&self.keypair])?;
        debug!(pubkey = %self.keypair.pubkey(), "signed transaction");
        Ok(transaction)
    }

    async fn sign_all_transactions<T: SignableTransaction>(
        &self,
        mut transactions: Vec<T>,
    ) -> Result<Vec<T>> {
        self.check_for_reject()?;
        for transaction in transactions.iter_mut() {
            transaction.sign_with(&[&self.keypair])?;
        }
        debug!(
            pubkey = %self.keypair.pubkey(),
            count = transactions.len(),
            "signed transactions"
        );
        Ok(transactions)
    }

    async fn send_transaction<T, C>(
        &self,
        mut transaction: T,
        connection: &C,
        options: SendTransactionOptions,
    ) -> Result<Signature>
    where
        T: SignableTransaction,
        C: SolConnection + ?Sized,
    {
        self.check_for_reject()?;

        if transaction.needs_blockhash() {
            let blockhash = connection
                .get_latest_blockhash()
                .await
                .map_err(WalletAdapterError::Connection)?;
            transaction.set_recent_blockhash(blockhash);
        }

        {
            let mut signers: Vec<&Keypair> = options.signers.iter().collect();
            signers.push(&self.keypair);
            transaction.sign_with(&signers)?;
        }

        let signature = connection
            .send_transaction(&transaction.to_versioned(), &options.send_options)
            .await
            .map_err(WalletAdapterError::Connection)?;
        debug!(pubkey = %self.keypair.pubkey(), %signature, "sent transaction");
        Ok(signature)
    }

    async fn sign_message(&self, message: &[u8]) -> Result<Signature> {
        self.check_for_reject()?;
        Ok(self.keypair.try_sign_message(message)?)
    }
}

impl std::fmt::Debug for MockWalletAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockWalletAdapter")
            .field("pubkey", &self.keypair.pubkey())
            .field("state", &self.state())
            .field("ready_state", &self.ready_state)
            .field("reject_next", &self.reject.is_armed())
            .finish()
    }
}
