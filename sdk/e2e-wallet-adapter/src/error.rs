use solana_sdk::signer::SignerError;
use thiserror::Error;

/// Errors raised by the E2E wallet adapter
#[derive(Debug, Error)]
pub enum WalletAdapterError {
    /// A rejection armed with `reject_next` was consumed
    #[error("E2E wallet rejected transaction")]
    UserRejected,

    /// Error returned by the connection, passed through untouched
    #[error(transparent)]
    Connection(Box<dyn std::error::Error + Send + Sync>),

    /// Error returned by the signing primitive
    #[error(transparent)]
    Signer(#[from] SignerError),

    /// Invalid or unreadable adapter configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl WalletAdapterError {
    pub fn is_user_rejected(&self) -> bool {
        matches!(self, Self::UserRejected)
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, WalletAdapterError>;
