use std::sync::atomic::{AtomicBool, Ordering};

/// One-shot switch that makes the next signing attempt fail.
///
/// Every attempt consumes the flag with a single swap, so one arming is seen
/// by exactly one attempt even when attempts race.
#[derive(Debug, Default)]
pub struct RejectFlag {
    armed: AtomicBool,
}

impl RejectFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }

    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }

    /// Disarm and report whether the flag was armed
    pub fn take(&self) -> bool {
        self.armed.swap(false, Ordering::SeqCst)
    }
}
