use std::{fmt, sync::Arc};

use crate::{
    config::{Config, ConfigError, TRACE_LOG_SECTION},
    log::{log_level::LogLevel, log_sink::LogSink, noop_log_sink::NoopLogSink},
    sink_debug, sink_info,
    trace_log::{
        callback_slot::CallbackSlot, forwarder, library::TraceLogLibrary, trampoline::Trampoline,
    },
};

/// Owns the external trace-log callback for one library instance.
///
/// With a callback set, the library's callback slot holds a [`Trampoline`]
/// reading this redirector's [`CallbackSlot`]; with none, the slot is empty
/// and the library prints with its built-in handler.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use rl_tracelog::log::LogLevel;
/// use rl_tracelog::trace_log::{CallbackRedirector, RecordingLibrary};
///
/// let redirector = CallbackRedirector::new(RecordingLibrary::new());
/// redirector.set_callback(Some(Arc::new(|level: LogLevel, msg: &str| {
///     println!("[{level}] {msg}");
/// })));
/// rl_tracelog::trace_log!(redirector, LogLevel::Info, "loaded {} textures", 3);
/// redirector.clear_callback();
/// ```
pub struct CallbackRedirector<L: TraceLogLibrary> {
    library: L,
    slot: Arc<CallbackSlot>,
    diagnostics: Arc<dyn LogSink>,
}

impl<L: TraceLogLibrary> CallbackRedirector<L> {
    pub fn new(library: L) -> Self {
        Self::with_diagnostics(library, Arc::new(NoopLogSink))
    }

    /// Like [`new`](Self::new), reporting callback changes to `diagnostics`.
    pub fn with_diagnostics(library: L, diagnostics: Arc<dyn LogSink>) -> Self {
        Self {
            library,
            slot: Arc::new(CallbackSlot::new()),
            diagnostics,
        }
    }

    /// Creates a redirector and applies `[TraceLog] level` if present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLevel`] if the level name is unknown.
    pub fn from_config(
        library: L,
        config: &Config,
        diagnostics: Arc<dyn LogSink>,
    ) -> Result<Self, ConfigError> {
        let level = config.get_level(TRACE_LOG_SECTION, "level")?;
        let redirector = Self::with_diagnostics(library, diagnostics);
        if let Some(level) = level {
            redirector.set_log_level(level);
        }
        Ok(redirector)
    }

    /// Renders `args` into the bounded buffer and emits the literal text.
    pub fn render_and_emit(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        forwarder::render_and_emit(&self.library, level, args);
    }

    /// Emits `message` verbatim; `%` sequences are not interpreted.
    pub fn emit(&self, level: LogLevel, message: &str) {
        forwarder::emit(&self.library, level, message);
    }

    /// Replaces the external callback, or restores the library's default
    /// handling with `None`.
    pub fn set_callback(&self, callback: Option<Arc<dyn LogSink>>) {
        match callback {
            Some(cb) => {
                let replaced = self.slot.set(cb).is_some();
                self.library
                    .register_log_callback(Some(Trampoline::new(self.slot.clone())));
                sink_info!(
                    &self.diagnostics,
                    "[TraceLog] External callback installed (replaced previous: {})",
                    replaced
                );
            }
            None => self.clear_callback(),
        }
    }

    /// Unregisters the trampoline, then drops the external callback.
    pub fn clear_callback(&self) {
        self.library.register_log_callback(None);
        let had = self.slot.clear().is_some();
        sink_info!(
            &self.diagnostics,
            "[TraceLog] External callback cleared (was set: {})",
            had
        );
    }

    #[must_use]
    pub fn has_callback(&self) -> bool {
        self.slot.is_set()
    }

    pub fn set_log_level(&self, level: LogLevel) {
        self.library.set_log_level(level);
        sink_debug!(&self.diagnostics, "[TraceLog] Threshold set to {}", level);
    }

    pub fn library(&self) -> &L {
        &self.library
    }
}

impl<L: TraceLogLibrary + fmt::Debug> fmt::Debug for CallbackRedirector<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackRedirector")
            .field("library", &self.library)
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::trace_log::recording_library::RecordingLibrary;
    use std::sync::Mutex;

    type Lines = Arc<Mutex<Vec<(LogLevel, String)>>>;

    fn recorder() -> (Lines, Arc<dyn LogSink>) {
        let lines: Lines = Arc::new(Mutex::new(Vec::new()));
        let sink_lines = lines.clone();
        let sink: Arc<dyn LogSink> = Arc::new(move |lvl: LogLevel, msg: &str| {
            sink_lines.lock().unwrap().push((lvl, msg.to_string()));
        });
        (lines, sink)
    }

    #[test]
    fn set_stores_then_registers_trampoline() {
        let r = CallbackRedirector::new(RecordingLibrary::new());
        let (_, cb) = recorder();

        r.set_callback(Some(cb));
        assert!(r.has_callback());
        assert!(r.library().has_trampoline());
        assert_eq!(r.library().registrations(), 1);
    }

    #[test]
    fn clear_unregisters_and_empties_slot() {
        let r = CallbackRedirector::new(RecordingLibrary::new());
        let (_, cb) = recorder();
        r.set_callback(Some(cb));

        r.set_callback(None);
        assert!(!r.has_callback());
        assert!(!r.library().has_trampoline());
    }

    #[test]
    fn replacing_callback_keeps_same_trampoline_slot() {
        let r = CallbackRedirector::new(RecordingLibrary::new());
        let (_, a) = recorder();
        let (_, b) = recorder();
        r.set_callback(Some(a));
        let first = r.library().installed_trampoline().unwrap();
        r.set_callback(Some(b));
        let second = r.library().installed_trampoline().unwrap();
        assert!(first.same_slot(&second));
    }

    #[test]
    fn emit_reaches_callback_through_library_path() {
        let r = CallbackRedirector::new(RecordingLibrary::new());
        let (lines, cb) = recorder();
        r.set_callback(Some(cb));

        r.emit(LogLevel::Info, "100% done");
        assert_eq!(r.library().emitted(), vec![(LogLevel::Info, "100% done".to_string())]);
        assert_eq!(
            *lines.lock().unwrap(),
            vec![(LogLevel::Info, "100% done".to_string())]
        );
        assert!(r.library().default_sink().is_empty());
    }

    #[test]
    fn diagnostics_see_callback_changes() {
        let (diag, diag_sink) = recorder();
        let r = CallbackRedirector::with_diagnostics(RecordingLibrary::new(), diag_sink);
        let (_, cb) = recorder();
        r.set_callback(Some(cb));
        r.clear_callback();

        let diag = diag.lock().unwrap();
        if cfg!(feature = "log-info") {
            assert_eq!(diag.len(), 2);
            assert!(diag[0].1.contains("installed"));
            assert!(diag[1].1.contains("cleared"));
        } else {
            assert!(diag.is_empty());
        }
    }

    #[test]
    fn from_config_applies_level() {
        let cfg = Config::parse("[TraceLog]\nlevel = error\n");
        let r = CallbackRedirector::from_config(RecordingLibrary::new(), &cfg, Arc::new(NoopLogSink))
            .unwrap();
        assert_eq!(r.library().log_level(), LogLevel::Error);
    }

    #[test]
    fn from_config_rejects_unknown_level() {
        let cfg = Config::parse("[TraceLog]\nlevel = shouty\n");
        let res = CallbackRedirector::from_config(RecordingLibrary::new(), &cfg, Arc::new(NoopLogSink));
        assert!(matches!(res, Err(ConfigError::InvalidLevel { .. })));
    }
}
