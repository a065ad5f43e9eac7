#![allow(dead_code)]

use async_trait::async_trait;
use e2e_wallet_adapter::{SendOptions, SolConnection};
use solana_sdk::{
    hash::Hash,
    pubkey::Pubkey,
    signature::Signature,
    system_instruction,
    transaction::{Transaction, VersionedTransaction},
};
use std::error::Error;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub fn test_blockhash() -> Hash {
    Hash::new_from_array([9u8; 32])
}

/// Signature every successful send on `MockConnection` returns
pub fn test_signature() -> Signature {
    Signature::from([7u8; 64])
}

/// Connection that records what it is asked to do instead of talking to a node
#[derive(Default)]
pub struct MockConnection {
    sent: Mutex<Vec<(VersionedTransaction, SendOptions)>>,
    blockhash_requests: AtomicUsize,
    offline: bool,
}

impl MockConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connection whose every call fails with `io::ErrorKind::ConnectionRefused`
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<(VersionedTransaction, SendOptions)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn blockhash_requests(&self) -> usize {
        self.blockhash_requests.load(Ordering::SeqCst)
    }

    fn check_online(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.offline {
            return Err(Box::new(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "node offline",
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl SolConnection for MockConnection {
    async fn get_latest_blockhash(&self) -> Result<Hash, Box<dyn Error + Send + Sync>> {
        self.blockhash_requests.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        Ok(test_blockhash())
    }

    async fn send_transaction(
        &self,
        tx: &VersionedTransaction,
        options: &SendOptions,
    ) -> Result<Signature, Box<dyn Error + Send + Sync>> {
        self.check_online()?;
        self.sent.lock().unwrap().push((tx.clone(), options.clone()));
        Ok(test_signature())
    }
}

/// Unsigned, unstamped transfer paid by `payer`
pub fn transfer_transaction(payer: &Pubkey) -> Transaction {
    transfer_to(payer, &Pubkey::new_unique(), 1_000)
}

pub fn transfer_to(payer: &Pubkey, recipient: &Pubkey, lamports: u64) -> Transaction {
    let ix = system_instruction::transfer(payer, recipient, lamports);
    Transaction::new_with_payer(&[ix], Some(payer))
}

/// Check that `signature` is a valid signature by `pubkey` over the sent message
pub fn signed_by(tx: &VersionedTransaction, pubkey: &Pubkey) -> bool {
    let message = tx.message.serialize();
    tx.message
        .static_account_keys()
        .iter()
        .position(|key| key == pubkey)
        .and_then(|position| tx.signatures.get(position))
        .map(|signature| signature.verify(pubkey.as_ref(), &message))
        .unwrap_or(false)
}
