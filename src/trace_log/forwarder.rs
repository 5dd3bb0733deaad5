//! Formatted and literal log emission through a [`TraceLogLibrary`].
//!
//! Rust call sites format with `fmt::Arguments` instead of C varargs; the
//! rendered text always reaches the library as a literal, so `%` in a message
//! is never reinterpreted.

use std::{ffi::CString, fmt};

use crate::{
    log::log_level::LogLevel,
    trace_log::{library::TraceLogLibrary, message_buffer::MessageBuffer},
};

/// Renders `args` into a [`MessageBuffer`] and emits the result.
///
/// Output past the buffer capacity is silently truncated.
pub fn render_and_emit<L>(library: &L, level: LogLevel, args: fmt::Arguments<'_>)
where
    L: TraceLogLibrary + ?Sized,
{
    let rendered = MessageBuffer::render(args);
    library.emit_log(level, rendered.as_c_str());
}

/// Emits `message` verbatim. Text after an interior NUL is dropped, as C
/// would read it.
pub fn emit<L>(library: &L, level: LogLevel, message: &str)
where
    L: TraceLogLibrary + ?Sized,
{
    library.emit_log(level, &literal(message));
}

fn literal(message: &str) -> CString {
    let bytes = message.as_bytes();
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    // The prefix holds no NUL, so this cannot fail.
    CString::new(&bytes[..end]).unwrap_or_default()
}

/// Formats and emits a trace-log line.
///
/// The first argument is anything with a `render_and_emit(level, args)`
/// method, such as [`CallbackRedirector`](crate::trace_log::CallbackRedirector).
///
/// ```ignore
/// trace_log!(redirector, LogLevel::Info, "TEXTURE: [ID {}] loaded", id);
/// ```
#[macro_export]
macro_rules! trace_log {
    ($target:expr, $lvl:expr, $($arg:tt)*) => {
        $target.render_and_emit($lvl, format_args!($($arg)*))
    };
}
