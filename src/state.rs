//! Shared theme state with explicit publish/subscribe
//!
//! The store is the single owner of the current `ThemeMode`. Views register
//! with `subscribe` and receive every mode change over their own channel;
//! there is no ambient or global lookup. Delivery is synchronous and
//! single-threaded: `toggle` pushes the new mode into each subscription
//! before returning, and views drain their channel on the next `sync`.

use std::sync::mpsc;

use crate::view::theme::ThemeMode;

/// Owner of the current theme mode.
pub struct ThemeStore {
    mode: ThemeMode,
    subscribers: Vec<mpsc::Sender<ThemeMode>>,
}

impl ThemeStore {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            subscribers: Vec::new(),
        }
    }

    /// The current mode.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip the mode and publish the new value to all live subscriptions.
    ///
    /// Total: flips Light to Dark and Dark to Light unconditionally.
    /// Subscriptions whose receiving end was dropped are pruned here.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        tracing::debug!(mode = self.mode.name(), "theme toggled");

        let mode = self.mode;
        self.subscribers.retain(|tx| tx.send(mode).is_ok());

        self.mode
    }

    /// Register a new observer of mode changes.
    ///
    /// The subscription only carries changes published after this call;
    /// callers read the starting value from `mode`.
    pub fn subscribe(&mut self) -> ThemeSubscription {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        ThemeSubscription { rx }
    }

    /// Number of live subscriptions (stale ones are pruned on toggle).
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// Receiving end of a `ThemeStore` subscription.
pub struct ThemeSubscription {
    rx: mpsc::Receiver<ThemeMode>,
}

impl ThemeSubscription {
    /// Drain pending notifications, returning the most recent mode if any
    /// changes were published since the last poll.
    pub fn poll(&self) -> Option<ThemeMode> {
        self.rx.try_iter().last()
    }
}
