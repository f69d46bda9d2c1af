//! Hover flyout for collapsed-rail groups
//!
//! When the rail is icon-only, a group's children open in an overlay next to
//! the icon. The overlay must survive the pointer crossing the gap between
//! trigger and overlay, so closing is delayed - and the delayed close must
//! be cancellable, or the menu would close under a pointer that already came
//! back.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Per-group flyout state machine: `{closed, open}` plus an armed close
/// timer while the pointer is away.
pub struct FlyoutMenu {
    name: String,
    close_delay: Duration,
    open: Arc<AtomicBool>,
    pending_close: Option<tokio::task::JoinHandle<()>>,
}

impl FlyoutMenu {
    pub fn new(name: impl Into<String>, close_delay: Duration) -> Self {
        Self {
            name: name.into(),
            close_delay,
            open: Arc::new(AtomicBool::new(false)),
            pending_close: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Pointer entered the trigger or the overlay: open, and disarm any
    /// pending close.
    pub fn pointer_enter(&mut self) {
        self.disarm();
        self.open.store(true, Ordering::SeqCst);
    }

    /// Pointer left: arm the delayed close. Re-entering before the delay
    /// elapses cancels it.
    pub fn pointer_leave(&mut self) {
        if !self.is_open() {
            return;
        }
        self.disarm();

        let open = Arc::clone(&self.open);
        let delay = self.close_delay;
        let name = self.name.clone();
        self.pending_close = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            open.store(false, Ordering::SeqCst);
            log::debug!("Flyout '{}' closed after pointer-leave delay", name);
        }));
    }

    /// Close immediately (escape key, navigation)
    pub fn close_now(&mut self) {
        self.disarm();
        self.open.store(false, Ordering::SeqCst);
    }

    fn disarm(&mut self) {
        if let Some(pending) = self.pending_close.take() {
            pending.abort();
        }
    }
}

impl Drop for FlyoutMenu {
    fn drop(&mut self) {
        self.disarm();
    }
}
