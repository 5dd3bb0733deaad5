use std::{
    ffi::{CStr, c_char, c_int},
    io::{self, Write},
    panic::{self, AssertUnwindSafe},
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::{
    log::log_level::LogLevel,
    raylib::ffi,
    trace_log::{
        library::TraceLogLibrary,
        trampoline::{Delivery, Trampoline},
    },
};

/// Trampoline the C helper forwards to. raylib's callback carries no user
/// data, so this is process-wide like raylib's own slot.
static ACTIVE_TRAMPOLINE: Mutex<Option<Trampoline>> = Mutex::new(None);

fn active() -> MutexGuard<'static, Option<Trampoline>> {
    ACTIVE_TRAMPOLINE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// The system raylib, linked by the build script.
///
/// raylib has a single callback slot per process, so only one redirector may
/// drive it: the one returned by [`global`](crate::raylib::global).
///
/// raylib's logger is not reentrant and belongs to the thread that owns the
/// window; callers keep all trace-log calls on that thread.
#[derive(Debug)]
pub struct RaylibLibrary {
    _private: (),
}

impl RaylibLibrary {
    pub(super) const fn new() -> Self {
        Self { _private: () }
    }
}

impl TraceLogLibrary for RaylibLibrary {
    fn emit_log(&self, level: LogLevel, message: &CStr) {
        // SAFETY: "%s" consumes exactly the one NUL-terminated argument passed.
        unsafe { ffi::TraceLog(level.as_raw(), c"%s".as_ptr(), message.as_ptr()) }
    }

    fn register_log_callback(&self, trampoline: Option<Trampoline>) {
        match trampoline {
            Some(t) => {
                // Store first so the C side never fires into an empty slot.
                *active() = Some(t);
                // SAFETY: plain assignment of raylib's callback pointer.
                unsafe { ffi::rl_tracelog_install_trampoline(1) }
            }
            None => {
                // SAFETY: as above; NULL restores raylib's built-in output.
                unsafe { ffi::rl_tracelog_install_trampoline(0) }
                *active() = None;
            }
        }
    }

    fn set_log_level(&self, level: LogLevel) {
        // SAFETY: stores an int in raylib's global threshold.
        unsafe { ffi::SetTraceLogLevel(level.as_raw()) }
    }
}

/// Called by the C trampoline with a line it rendered into its 4096-byte buffer.
#[unsafe(no_mangle)]
pub extern "C" fn rl_tracelog_receive(log_level: c_int, message: *const c_char) {
    if message.is_null() {
        return;
    }
    // SAFETY: the C trampoline passes its NUL-terminated stack buffer, alive for this call.
    let message = unsafe { CStr::from_ptr(message) };
    let _ = receive(LogLevel::from_raw(log_level), message, print_builtin);
}

/// Dispatches through the active trampoline, or straight to `fallback` when
/// none is active. `None` means the callback panicked; the panic stops here
/// so it never unwinds into raylib.
fn receive<F>(level: LogLevel, message: &CStr, fallback: F) -> Option<Delivery>
where
    F: FnOnce(LogLevel, &CStr),
{
    let trampoline = active().clone();
    panic::catch_unwind(AssertUnwindSafe(|| match trampoline {
        Some(t) => t.dispatch(level, message, fallback),
        None => {
            fallback(level, message);
            Delivery::Fallback
        }
    }))
    .ok()
}

/// Prints the way raylib's built-in handler does. Going back through
/// `TraceLog` would land in this trampoline again while it is registered.
fn print_builtin(level: LogLevel, message: &CStr) {
    let mut out = io::stdout().lock();
    let _ = write_builtin(&mut out, level, message);
    let _ = out.flush();
}

fn write_builtin<W: Write>(out: &mut W, level: LogLevel, message: &CStr) -> io::Result<()> {
    let text = message.to_string_lossy();
    match level.label() {
        "" => writeln!(out, "{text}"),
        label => writeln!(out, "{label}: {text}"),
    }
}
