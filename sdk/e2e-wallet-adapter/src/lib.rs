pub mod basic;
pub mod config;
pub mod core;
pub mod error;
pub mod registry;
pub mod types;

pub use crate::basic::adapter::MockWalletAdapter;
pub use crate::basic::events::{ListenerId, WalletEvent, WalletEventKind};
pub use crate::config::E2EWalletAdapterConfig;
pub use crate::core::connection::SolConnection;
pub use crate::core::constants::{GLOBAL_ADAPTER_NAME, WALLET_NAME};
pub use crate::core::signer::WalletAdapter;
pub use crate::core::transaction::SignableTransaction;
pub use crate::error::{Result, WalletAdapterError};
pub use crate::types::{AdapterState, SendOptions, SendTransactionOptions, WalletReadyState};
