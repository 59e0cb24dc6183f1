//! Notification seam.
//!
//! Surfaces receive a [`Notifier`] at construction instead of reaching
//! for a process-wide handler slot. Advisories are transient and
//! non-blocking; errors are the single blocking message a failed
//! finalize produces.

use std::sync::Mutex;

use tracing::{error, warn};

/// Sink for user-facing notifications raised by an authoring surface.
pub trait Notifier {
    /// A transient, non-blocking advisory (auto-dismissed by the UI).
    fn advisory(&self, message: &str);

    /// A blocking validation or submission error.
    fn error(&self, message: &str);
}

/// Notifier that forwards to the tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn advisory(&self, message: &str) {
        warn!(target: "lychee::notify", "{message}");
    }

    fn error(&self, message: &str) {
        error!(target: "lychee::notify", "{message}");
    }
}

/// Notifier that records messages for inspection in tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    advisories: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// A fresh recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advisories recorded so far.
    #[must_use]
    pub fn advisories(&self) -> Vec<String> {
        self.advisories.lock().map(|g| g.clone()).unwrap_or_default()
    }

    /// Errors recorded so far.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn advisory(&self, message: &str) {
        if let Ok(mut guard) = self.advisories.lock() {
            guard.push(message.to_owned());
        }
    }

    fn error(&self, message: &str) {
        if let Ok(mut guard) = self.errors.lock() {
            guard.push(message.to_owned());
        }
    }
}
