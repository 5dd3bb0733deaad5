use std::ffi::CStr;

use crate::log::log_level::LogLevel;

/// Destination for rendered log lines.
///
/// This is the shape of an external trace-log callback: a level and the final
/// text, no return value. Closures of that shape are sinks too.
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, msg: &str);

    /// Entry point for lines that arrive as C strings.
    ///
    /// The default converts lossily and calls [`LogSink::log`]. Sinks that
    /// hand the text on to C override it to keep the bytes intact.
    fn log_c(&self, level: LogLevel, msg: &CStr) {
        self.log(level, &msg.to_string_lossy());
    }
}

impl<F> LogSink for F
where
    F: Fn(LogLevel, &str) + Send + Sync,
{
    #[inline]
    fn log(&self, level: LogLevel, msg: &str) {
        self(level, msg);
    }
}
