use crate::core::constants::KEYPAIR_ENV_VAR;
use crate::error::{Result, WalletAdapterError};
use solana_sdk::signature::{read_keypair_file, Keypair};
use std::env;

/// Construction options for `MockWalletAdapter`
#[derive(Debug, Default)]
pub struct E2EWalletAdapterConfig {
    /// Keypair to use. A fresh one is generated when absent.
    pub keypair: Option<Keypair>,
}

impl E2EWalletAdapterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keypair(mut self, keypair: Keypair) -> Self {
        self.keypair = Some(keypair);
        self
    }

    /// Load the keypair from a Solana JSON keypair file (`~` is expanded)
    pub fn from_keypair_file(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let keypair = read_keypair_file(&*expanded).map_err(|e| {
            WalletAdapterError::Config(format!("Failed to read keypair file {}: {}", path, e))
        })?;
        Ok(Self::new().with_keypair(keypair))
    }

    /// Read the keypair file named by `E2E_WALLET_KEYPAIR`, if set
    pub fn from_env() -> Result<Self> {
        match env::var(KEYPAIR_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::from_keypair_file(path.trim()),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::write_keypair_file;
    use solana_sdk::signer::Signer;

    #[test]
    fn default_config_has_no_keypair() {
        assert!(E2EWalletAdapterConfig::default().keypair.is_none());
    }

    #[test]
    fn loads_keypair_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("id.json");
        let keypair = Keypair::new();
        write_keypair_file(&keypair, &path).unwrap();

        let config = E2EWalletAdapterConfig::from_keypair_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.keypair.unwrap().pubkey(), keypair.pubkey());
    }

    #[test]
    fn missing_keypair_file_is_a_config_error() {
        let err = E2EWalletAdapterConfig::from_keypair_file("/nonexistent/e2e/id.json")
            .unwrap_err();
        assert!(matches!(err, WalletAdapterError::Config(_)));
    }

    #[test]
    fn from_env_reads_keypair_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("env-id.json");
        let keypair = Keypair::new();
        write_keypair_file(&keypair, &path).unwrap();

        env::set_var(KEYPAIR_ENV_VAR, &path);
        let config = E2EWalletAdapterConfig::from_env();
        env::remove_var(KEYPAIR_ENV_VAR);

        assert_eq!(config.unwrap().keypair.unwrap().pubkey(), keypair.pubkey());
    }
}
