// SPDX-License-Identifier: MPL-2.0
//! Scoped keyboard bindings for the lightbox.
//!
//! A [`KeyBinding`] is a guard: it is registered when created through
//! [`KeyBindings::install`] and unregistered when dropped. The application
//! only routes keyboard events to the lightbox while at least one binding is
//! alive, so releasing the guard is what removes the listener.
//!
//! # Usage
//!
//! ```
//! use iced_folio::application::gallery::KeyBindings;
//!
//! let bindings = KeyBindings::new();
//! let guard = bindings.install();
//! assert_eq!(bindings.active_count(), 1);
//!
//! drop(guard);
//! assert!(!bindings.is_listening());
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Registry of live lightbox key bindings.
///
/// Cloning shares the registry; every clone sees the same count.
#[derive(Debug, Clone, Default)]
pub struct KeyBindings {
    active: Arc<AtomicUsize>,
}

impl KeyBindings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new binding. It stays registered until the guard is dropped.
    #[must_use = "dropping the guard immediately unregisters the binding"]
    pub fn install(&self) -> KeyBinding {
        self.active.fetch_add(1, Ordering::SeqCst);
        KeyBinding {
            active: Arc::clone(&self.active),
        }
    }

    /// Number of bindings currently registered.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// Returns `true` if keyboard events should reach the lightbox.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.active_count() > 0
    }
}

/// Guard for one registered binding; unregisters itself on drop.
#[derive(Debug)]
pub struct KeyBinding {
    active: Arc<AtomicUsize>,
}

impl Drop for KeyBinding {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
    }
}
