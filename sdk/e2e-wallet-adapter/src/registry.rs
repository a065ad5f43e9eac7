//! Process-wide lookup point for the active mock wallet.
//!
//! An external driver that holds no reference to the adapter finds it here,
//! under [`GLOBAL_ADAPTER_NAME`]. Adapters register themselves on
//! construction and stay registered until [`unregister`] or [`clear`].

use crate::basic::adapter::MockWalletAdapter;
use crate::core::constants::GLOBAL_ADAPTER_NAME;
use solana_sdk::signer::Signer;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use tracing::{debug, info};

type Registry = RwLock<HashMap<&'static str, Arc<MockWalletAdapter>>>;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Default::default)
}

/// Make `adapter` the active wallet, replacing any previous one
pub(crate) fn register(adapter: &Arc<MockWalletAdapter>) {
    let previous = registry()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(GLOBAL_ADAPTER_NAME, adapter.clone());
    info!(
        name = GLOBAL_ADAPTER_NAME,
        pubkey = %adapter.keypair().pubkey(),
        replaced = previous.is_some(),
        "registered mock wallet"
    );
}

/// Adapter registered under `name`
pub fn lookup(name: &str) -> Option<Arc<MockWalletAdapter>> {
    registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
        .cloned()
}

/// The adapter registered under the well-known name
pub fn active() -> Option<Arc<MockWalletAdapter>> {
    lookup(GLOBAL_ADAPTER_NAME)
}

/// Remove `adapter` if it is still the active one.
/// Returns false when another adapter has replaced it in the meantime.
pub fn unregister(adapter: &Arc<MockWalletAdapter>) -> bool {
    let mut registry = registry().write().unwrap_or_else(PoisonError::into_inner);
    match registry.get(GLOBAL_ADAPTER_NAME) {
        Some(current) if Arc::ptr_eq(current, adapter) => {
            registry.remove(GLOBAL_ADAPTER_NAME);
            debug!(name = GLOBAL_ADAPTER_NAME, "unregistered mock wallet");
            true
        }
        _ => false,
    }
}

/// Remove whichever adapter is active and return it
pub fn clear() -> Option<Arc<MockWalletAdapter>> {
    registry()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .remove(GLOBAL_ADAPTER_NAME)
}
