//! Forwards rendered trace-log lines into `tracing`.

use crate::log::{log_level::LogLevel, log_sink::LogSink};

/// [`LogSink`] that re-emits each line as a `tracing` event.
///
/// `Fatal` maps to `error!`; `All` and `Off` are not real severities and are
/// reported at `trace!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, level: LogLevel, msg: &str) {
        match level {
            LogLevel::Debug => tracing::debug!(target: "raylib", "{}", msg),
            LogLevel::Info => tracing::info!(target: "raylib", "{}", msg),
            LogLevel::Warning => tracing::warn!(target: "raylib", "{}", msg),
            LogLevel::Error | LogLevel::Fatal => tracing::error!(target: "raylib", "{}", msg),
            LogLevel::All | LogLevel::Trace | LogLevel::Off => {
                tracing::trace!(target: "raylib", "{}", msg)
            }
        }
    }
}
