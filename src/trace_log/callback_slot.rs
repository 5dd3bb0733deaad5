use std::sync::{Arc, Mutex, PoisonError};

use crate::log::log_sink::LogSink;

/// Single-slot registry for the external trace-log callback.
///
/// Holds at most one sink; `set` replaces whatever was there. The lock is only
/// held long enough to swap or clone the `Arc`, never while a callback runs.
#[derive(Default)]
pub struct CallbackSlot {
    current: Mutex<Option<Arc<dyn LogSink>>>,
}

impl CallbackSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `callback`, returning the one it replaced.
    pub fn set(&self, callback: Arc<dyn LogSink>) -> Option<Arc<dyn LogSink>> {
        self.lock().replace(callback)
    }

    /// Empties the slot, returning the callback that was active.
    pub fn clear(&self) -> Option<Arc<dyn LogSink>> {
        self.lock().take()
    }

    #[must_use]
    pub fn current(&self) -> Option<Arc<dyn LogSink>> {
        self.lock().clone()
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Arc<dyn LogSink>>> {
        // A panicking callback never runs under this lock, so the data is intact.
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for CallbackSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackSlot")
            .field("is_set", &self.is_set())
            .finish()
    }
}
