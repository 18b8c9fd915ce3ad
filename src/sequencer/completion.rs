// SPDX-License-Identifier: MPL-2.0
//! Single-shot completion signal.

use std::fmt;
use tokio::sync::oneshot;

/// Notification fired when a sequencer run reaches its terminal stage.
///
/// The callback is a `FnOnce` held in an `Option`, so it runs at most once
/// and is dropped unfired when the run is cancelled.
#[derive(Default)]
pub struct Completion {
    callback: Option<Box<dyn FnOnce() + Send>>,
}

impl Completion {
    #[must_use]
    pub fn new(callback: impl FnOnce() + Send + 'static) -> Self {
        Self {
            callback: Some(Box::new(callback)),
        }
    }

    /// A completion nobody listens to.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Completion backed by a oneshot channel. The receiver resolves to
    /// `Ok(())` on completion and to an error if the run is cancelled or
    /// dropped first.
    #[must_use]
    pub fn channel() -> (Self, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        let completion = Self::new(move || {
            // Receiver may already be gone.
            let _ = tx.send(());
        });
        (completion, rx)
    }

    /// Whether the callback is still armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.callback.is_some()
    }

    /// Runs the callback if it has not run yet. Returns whether it ran.
    pub(crate) fn fire(&mut self) -> bool {
        match self.callback.take() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Drops the callback without running it.
    pub(crate) fn disarm(&mut self) {
        self.callback = None;
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("armed", &self.is_armed())
            .finish()
    }
}
