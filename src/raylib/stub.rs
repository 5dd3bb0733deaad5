//! Inspection of the stand-in raylib from `csrc/raylib_stub.c`.

use std::ffi::{CStr, c_char, c_int, c_uint};

use crate::log::log_level::LogLevel;

unsafe extern "C" {
    fn rl_stub_reset();
    fn rl_stub_log_on_install(enabled: c_int);
    fn rl_stub_callback_installed() -> c_int;
    fn rl_stub_default_count() -> c_uint;
    fn rl_stub_default_level() -> c_int;
    fn rl_stub_default_line() -> *const c_char;
}

/// Unregisters any callback, restores the `Info` threshold and forgets the
/// default-sink history.
pub fn reset() {
    // SAFETY: plain stores into the stub's globals.
    unsafe { rl_stub_reset() }
}

/// When on, registering a callback immediately logs one line through it.
pub fn log_on_install(enabled: bool) {
    // SAFETY: as above.
    unsafe { rl_stub_log_on_install(c_int::from(enabled)) }
}

#[must_use]
pub fn callback_installed() -> bool {
    // SAFETY: reads an int.
    unsafe { rl_stub_callback_installed() != 0 }
}

/// Number of lines that reached the built-in sink since the last reset.
#[must_use]
pub fn default_count() -> u32 {
    // SAFETY: reads an int.
    unsafe { rl_stub_default_count() }
}

/// Last line the built-in sink received.
#[must_use]
pub fn last_default() -> Option<(LogLevel, Vec<u8>)> {
    if default_count() == 0 {
        return None;
    }
    // SAFETY: the stub returns its static, NUL-terminated line buffer.
    let (level, line) = unsafe {
        (
            rl_stub_default_level(),
            CStr::from_ptr(rl_stub_default_line()),
        )
    };
    Some((LogLevel::from_raw(level), line.to_bytes().to_vec()))
}
