//! C ABI for foreign hosts. Declared in `csrc/include/rl_tracelog.h`, next to
//! `rl_tracelog_log_v`, which the C helper implements directly.

use std::{
    ffi::{CStr, c_char, c_int},
    sync::{Arc, OnceLock},
};

use crate::{
    log::{log_level::LogLevel, log_sink::LogSink},
    raylib::raylib_library::RaylibLibrary,
    trace_log::{
        library::TraceLogLibrary,
        native_callback::{NativeCallback, NativeLogCallback},
        redirector::CallbackRedirector,
    },
};

/// The process-wide redirector behind the C ABI.
pub fn global() -> &'static CallbackRedirector<RaylibLibrary> {
    static REDIRECTOR: OnceLock<CallbackRedirector<RaylibLibrary>> = OnceLock::new();
    REDIRECTOR.get_or_init(|| CallbackRedirector::new(RaylibLibrary::new()))
}

/// Passes `message` to `TraceLog` verbatim.
///
/// # Safety
///
/// `message` must be null or point to a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rl_tracelog_emit(log_level: c_int, message: *const c_char) {
    if message.is_null() {
        return;
    }
    // SAFETY: guaranteed by the caller.
    let message = unsafe { CStr::from_ptr(message) };
    global()
        .library()
        .emit_log(LogLevel::from_raw(log_level), message);
}

/// Routes raylib's log output to `callback`; NULL restores the default.
#[unsafe(no_mangle)]
pub extern "C" fn rl_tracelog_set_callback(callback: Option<NativeLogCallback>) {
    global().set_callback(
        callback.map(|f| Arc::new(NativeCallback::new(f)) as Arc<dyn LogSink>),
    );
}

#[unsafe(no_mangle)]
pub extern "C" fn rl_tracelog_set_level(log_level: c_int) {
    global().set_log_level(LogLevel::from_raw(log_level));
}
