//! Turn cancellation signal.

use std::sync::atomic::{AtomicBool, Ordering};

/// Signal for aborting a turn.
///
/// Checked at round boundaries only; in-flight calls are allowed to
/// finish.
pub struct AbortSignal {
    aborted: AtomicBool,
}

impl AbortSignal {
    /// Create a new abort signal.
    pub fn new() -> Self {
        Self {
            aborted: AtomicBool::new(false),
        }
    }

    /// Check if aborted.
    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::Relaxed)
    }

    /// Trigger the abort.
    pub fn abort(&self) {
        self.aborted.store(true, Ordering::Relaxed);
    }
}

impl Default for AbortSignal {
    fn default() -> Self {
        Self::new()
    }
}
