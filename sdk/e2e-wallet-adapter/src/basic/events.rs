use solana_sdk::pubkey::Pubkey;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Lifecycle events emitted by a wallet adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    /// Emitted on every `connect`, carrying the exposed public key
    Connect(Pubkey),
    Disconnect,
}

impl WalletEvent {
    pub fn kind(&self) -> WalletEventKind {
        match self {
            WalletEvent::Connect(_) => WalletEventKind::Connect,
            WalletEvent::Disconnect => WalletEventKind::Disconnect,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalletEventKind {
    Connect,
    Disconnect,
}

/// Handle returned by `on`/`once`, used to remove the listener again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type Listener = Arc<dyn Fn(&WalletEvent) + Send + Sync>;

struct Registration {
    id: ListenerId,
    kind: WalletEventKind,
    once: bool,
    listener: Listener,
}

/// Per-adapter publish/subscribe.
///
/// Listeners run synchronously inside `emit`, in registration order, with no
/// lock held, so a listener may subscribe or unsubscribe re-entrantly.
#[derive(Default)]
pub struct EventEmitter {
    next_id: AtomicU64,
    registrations: Mutex<Vec<Registration>>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(&self, kind: WalletEventKind, listener: F) -> ListenerId
    where
        F: Fn(&WalletEvent) + Send + Sync + 'static,
    {
        self.register(kind, false, Arc::new(listener))
    }

    /// Register a listener that is removed after its first delivery
    pub fn once<F>(&self, kind: WalletEventKind, listener: F) -> ListenerId
    where
        F: Fn(&WalletEvent) + Send + Sync + 'static,
    {
        self.register(kind, true, Arc::new(listener))
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn off(&self, id: ListenerId) -> bool {
        let mut registrations = self.registrations();
        let before = registrations.len();
        registrations.retain(|registration| registration.id != id);
        registrations.len() != before
    }

    pub fn listener_count(&self, kind: WalletEventKind) -> usize {
        self.registrations()
            .iter()
            .filter(|registration| registration.kind == kind)
            .count()
    }

    /// Deliver `event` to its listeners. Returns how many were called.
    pub fn emit(&self, event: &WalletEvent) -> usize {
        let kind = event.kind();
        let listeners: Vec<Listener> = {
            let mut registrations = self.registrations();
            let matching = registrations
                .iter()
                .filter(|registration| registration.kind == kind)
                .map(|registration| registration.listener.clone())
                .collect();
            registrations.retain(|registration| !(registration.once && registration.kind == kind));
            matching
        };

        for listener in &listeners {
            listener(event);
        }
        listeners.len()
    }

    fn register(&self, kind: WalletEventKind, once: bool, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.registrations().push(Registration {
            id,
            kind,
            once,
            listener,
        });
        id
    }

    fn registrations(&self) -> MutexGuard<'_, Vec<Registration>> {
        self.registrations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.registrations().len())
            .finish()
    }
}
