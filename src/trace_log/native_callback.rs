use std::{
    ffi::{CStr, CString, c_char, c_int},
    fmt,
};

use crate::log::{log_level::LogLevel, log_sink::LogSink};

/// C signature of a host-supplied log callback: level and rendered text.
pub type NativeLogCallback = extern "C" fn(log_level: c_int, message: *const c_char);

/// Adapts a C function pointer to [`LogSink`].
///
/// The message is passed as a NUL-terminated string that lives only for the
/// duration of the call. Lines that are already C strings reach the host
/// byte for byte.
#[derive(Clone, Copy)]
pub struct NativeCallback(NativeLogCallback);

impl NativeCallback {
    #[must_use]
    pub const fn new(callback: NativeLogCallback) -> Self {
        Self(callback)
    }
}

impl LogSink for NativeCallback {
    fn log(&self, level: LogLevel, msg: &str) {
        let bytes = msg.as_bytes();
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        let text = CString::new(&bytes[..end]).unwrap_or_default();
        self.log_c(level, &text);
    }

    fn log_c(&self, level: LogLevel, msg: &CStr) {
        (self.0)(level.as_raw(), msg.as_ptr());
    }
}

impl fmt::Debug for NativeCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeCallback")
            .field(&(self.0 as *const ()))
            .finish()
    }
}
