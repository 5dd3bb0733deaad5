use std::{
    ffi::CStr,
    fmt,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::{
    log::log_level::LogLevel,
    trace_log::{library::TraceLogLibrary, message_buffer::MessageBuffer, trampoline::Trampoline},
};

/// In-memory stand-in for raylib's logger.
///
/// Routes lines the way raylib does: anything below the threshold is dropped,
/// then a registered trampoline takes the line, otherwise the built-in sink
/// does. Both the calls that reached [`emit_log`](TraceLogLibrary::emit_log)
/// and the lines that reached the built-in sink are recorded, so callbacks can
/// be tested without linking raylib.
#[derive(Debug, Default)]
pub struct RecordingLibrary {
    state: Mutex<RecordingState>,
}

#[derive(Debug)]
struct RecordingState {
    emitted: Vec<(LogLevel, String)>,
    default_sink: Vec<(LogLevel, String)>,
    trampoline: Option<Trampoline>,
    registrations: usize,
    threshold: LogLevel,
}

impl Default for RecordingState {
    fn default() -> Self {
        Self {
            emitted: Vec::new(),
            default_sink: Vec::new(),
            trampoline: None,
            registrations: 0,
            // raylib starts at LOG_INFO
            threshold: LogLevel::Info,
        }
    }
}

impl RecordingLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A line raised by the library itself, with its own format and arguments.
    pub fn library_log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        let Some(trampoline) = self.admit(level) else {
            return;
        };
        match trampoline {
            Some(t) => {
                t.dispatch_args(level, args, |l, m| self.push_default(l, m));
            }
            None => {
                let rendered = MessageBuffer::render(args);
                self.push_default(level, rendered.as_c_str());
            }
        }
    }

    /// Every `(level, text)` passed to `emit_log`, in order.
    #[must_use]
    pub fn emitted(&self) -> Vec<(LogLevel, String)> {
        self.lock().emitted.clone()
    }

    /// Every line the built-in handler printed, in order.
    #[must_use]
    pub fn default_sink(&self) -> Vec<(LogLevel, String)> {
        self.lock().default_sink.clone()
    }

    #[must_use]
    pub fn installed_trampoline(&self) -> Option<Trampoline> {
        self.lock().trampoline.clone()
    }

    #[must_use]
    pub fn has_trampoline(&self) -> bool {
        self.lock().trampoline.is_some()
    }

    /// Number of `register_log_callback` calls, `None` included.
    #[must_use]
    pub fn registrations(&self) -> usize {
        self.lock().registrations
    }

    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.lock().threshold
    }

    /// `None` when the level is filtered, otherwise the trampoline to use.
    fn admit(&self, level: LogLevel) -> Option<Option<Trampoline>> {
        let state = self.lock();
        if level < state.threshold {
            return None;
        }
        Some(state.trampoline.clone())
    }

    fn push_default(&self, level: LogLevel, message: &CStr) {
        self.lock()
            .default_sink
            .push((level, message.to_string_lossy().into_owned()));
    }

    fn lock(&self) -> MutexGuard<'_, RecordingState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TraceLogLibrary for RecordingLibrary {
    fn emit_log(&self, level: LogLevel, message: &CStr) {
        self.lock()
            .emitted
            .push((level, message.to_string_lossy().into_owned()));

        // TraceLog(level, "%s", text) then takes the library's normal path.
        let Some(trampoline) = self.admit(level) else {
            return;
        };
        match trampoline {
            Some(t) => {
                t.dispatch(level, message, |l, m| self.push_default(l, m));
            }
            None => self.push_default(level, message),
        }
    }

    fn register_log_callback(&self, trampoline: Option<Trampoline>) {
        let mut state = self.lock();
        state.trampoline = trampoline;
        state.registrations += 1;
    }

    fn set_log_level(&self, level: LogLevel) {
        self.lock().threshold = level;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::trace_log::callback_slot::CallbackSlot;
    use std::sync::Arc;

    #[test]
    fn lines_below_threshold_are_dropped() {
        let lib = RecordingLibrary::new();
        lib.library_log(LogLevel::Debug, format_args!("hidden"));
        lib.library_log(LogLevel::Info, format_args!("shown"));
        assert_eq!(lib.default_sink(), vec![(LogLevel::Info, "shown".to_string())]);

        lib.set_log_level(LogLevel::All);
        lib.library_log(LogLevel::Debug, format_args!("now shown"));
        assert_eq!(lib.default_sink().len(), 2);
    }

    #[test]
    fn emit_log_is_recorded_even_when_filtered() {
        let lib = RecordingLibrary::new();
        lib.set_log_level(LogLevel::Error);
        lib.emit_log(LogLevel::Info, c"quiet");
        assert_eq!(lib.emitted(), vec![(LogLevel::Info, "quiet".to_string())]);
        assert!(lib.default_sink().is_empty());
    }

    #[test]
    fn registered_trampoline_with_empty_slot_falls_back() {
        let lib = RecordingLibrary::new();
        lib.register_log_callback(Some(Trampoline::new(Arc::new(CallbackSlot::new()))));
        lib.library_log(LogLevel::Warning, format_args!("{}%", 75));
        assert_eq!(lib.default_sink(), vec![(LogLevel::Warning, "75%".to_string())]);
        assert_eq!(lib.registrations(), 1);
    }
}
