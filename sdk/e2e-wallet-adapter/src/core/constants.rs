/// Wallet name reported to applications
pub const WALLET_NAME: &str = "E2E";

pub const WALLET_URL: &str = "https://E2E.app";

pub const WALLET_ICON: &str = "E2E";

/// Name the active adapter is registered under for external test drivers
pub const GLOBAL_ADAPTER_NAME: &str = "solanaE2E";

/// Environment variable naming a keypair file to load instead of generating one
pub const KEYPAIR_ENV_VAR: &str = "E2E_WALLET_KEYPAIR";
