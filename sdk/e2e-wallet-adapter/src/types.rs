use serde::{Deserialize, Serialize};
use solana_sdk::clock::Slot;
use solana_sdk::commitment_config::CommitmentLevel;
use solana_sdk::signature::Keypair;

/// Availability of a wallet, independent of its connection status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalletReadyState {
    /// The wallet is present and usable
    Installed,
    NotDetected,
    Loadable,
    Unsupported,
}

/// Connection state of an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdapterState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

impl AdapterState {
    /// Check if the public key is exposed in this state
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }
}

/// Options forwarded to the connection when a transaction is submitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SendOptions {
    pub skip_preflight: bool,
    pub preflight_commitment: Option<CommitmentLevel>,
    pub max_retries: Option<usize>,
    pub min_context_slot: Option<Slot>,
}

/// Options accepted by `send_transaction`
#[derive(Debug, Default)]
pub struct SendTransactionOptions {
    /// Extra signers applied before the wallet signs
    pub signers: Vec<Keypair>,

    pub send_options: SendOptions,
}

impl SendTransactionOptions {
    pub fn with_signer(mut self, signer: Keypair) -> Self {
        self.signers.push(signer);
        self
    }

    pub fn with_send_options(mut self, send_options: SendOptions) -> Self {
        self.send_options = send_options;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_state_serializes_by_name() {
        let json = serde_json::to_string(&WalletReadyState::Installed).unwrap();
        assert_eq!(json, "\"Installed\"");
    }

    #[test]
    fn send_options_use_camel_case() {
        let options: SendOptions =
            serde_json::from_str(r#"{"skipPreflight":true,"maxRetries":3}"#).unwrap();
        assert!(options.skip_preflight);
        assert_eq!(options.max_retries, Some(3));
        assert_eq!(options.preflight_commitment, None);
    }

    #[test]
    fn default_state_is_disconnected() {
        assert_eq!(AdapterState::default(), AdapterState::Disconnected);
        assert!(!AdapterState::Connecting.is_connected());
        assert!(AdapterState::Connected.is_connected());
    }
}
