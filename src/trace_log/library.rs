use std::ffi::CStr;

use crate::{log::log_level::LogLevel, trace_log::trampoline::Trampoline};

/// The logging surface of the underlying native library.
///
/// Mirrors raylib's `TraceLog(level, "%s", text)`, `SetTraceLogCallback` and
/// `SetTraceLogLevel`. Implementations decide how a registered trampoline is
/// reached from the library's own log path.
pub trait TraceLogLibrary: Send + Sync {
    /// Emits `message` as literal text; it is never read as a format string.
    fn emit_log(&self, level: LogLevel, message: &CStr);

    /// Installs `trampoline` in the library's callback slot, or restores the
    /// built-in handler with `None`.
    fn register_log_callback(&self, trampoline: Option<Trampoline>);

    /// Sets the minimum level the library lets through.
    fn set_log_level(&self, level: LogLevel);
}

impl<L: TraceLogLibrary + ?Sized> TraceLogLibrary for &L {
    fn emit_log(&self, level: LogLevel, message: &CStr) {
        (**self).emit_log(level, message);
    }

    fn register_log_callback(&self, trampoline: Option<Trampoline>) {
        (**self).register_log_callback(trampoline);
    }

    fn set_log_level(&self, level: LogLevel) {
        (**self).set_log_level(level);
    }
}

impl<L: TraceLogLibrary + ?Sized> TraceLogLibrary for std::sync::Arc<L> {
    fn emit_log(&self, level: LogLevel, message: &CStr) {
        (**self).emit_log(level, message);
    }

    fn register_log_callback(&self, trampoline: Option<Trampoline>) {
        (**self).register_log_callback(trampoline);
    }

    fn set_log_level(&self, level: LogLevel) {
        (**self).set_log_level(level);
    }
}
