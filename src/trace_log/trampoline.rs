use std::{ffi::CStr, fmt, sync::Arc};

use crate::{
    log::{log_level::LogLevel, log_sink::LogSink},
    trace_log::{callback_slot::CallbackSlot, message_buffer::MessageBuffer},
};

/// What the library registers in its callback slot.
///
/// Invoked for every library-originated log line. It looks the external
/// callback up at call time, so swapping callbacks never needs a
/// re-registration. If the slot turns out to be empty (a line that raced a
/// clear), the line goes to the fallback the library supplies, which is its
/// default sink.
#[derive(Clone)]
pub struct Trampoline {
    slot: Arc<CallbackSlot>,
}

/// Where a dispatched line ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Callback,
    Fallback,
}

impl Trampoline {
    #[must_use]
    pub fn new(slot: Arc<CallbackSlot>) -> Self {
        Self { slot }
    }

    /// Delivers an already rendered line.
    pub fn dispatch<F>(&self, level: LogLevel, message: &CStr, fallback: F) -> Delivery
    where
        F: FnOnce(LogLevel, &CStr),
    {
        match self.slot.current() {
            Some(callback) => {
                callback.log_c(level, message);
                Delivery::Callback
            }
            None => {
                fallback(level, message);
                Delivery::Fallback
            }
        }
    }

    /// Renders `args` into a bounded buffer, then dispatches it.
    pub fn dispatch_args<F>(&self, level: LogLevel, args: fmt::Arguments<'_>, fallback: F) -> Delivery
    where
        F: FnOnce(LogLevel, &CStr),
    {
        let rendered = MessageBuffer::render(args);
        self.dispatch(level, rendered.as_c_str(), fallback)
    }

    /// Whether `self` and `other` read the same slot.
    #[must_use]
    pub fn same_slot(&self, other: &Trampoline) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

impl fmt::Debug for Trampoline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trampoline").field("slot", &self.slot).finish()
    }
}
