use std::time::{SystemTime, UNIX_EPOCH};

use crate::log::log_level::LogLevel;

/// Represents a single log message event queued for the file logger.
#[derive(Debug, Clone)]
pub struct LogMsg {
    /// The severity level of the log (e.g., Info, Warning, Error).
    pub level: LogLevel,
    /// The timestamp of the log event in milliseconds.
    pub ts_ms: u128,
    /// The actual content or payload of the log message.
    pub text: String,
}

impl LogMsg {
    /// Creates a new `LogMsg` instance.
    ///
    /// # Arguments
    ///
    /// * `level` - The severity `LogLevel` of the message.
    /// * `text` - The message content. Accepts any type that implements `Into<String>`.
    /// * `ts_ms` - The timestamp of the event in milliseconds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rl_tracelog::log::{log_level::LogLevel, log_msg::LogMsg};
    ///
    /// let msg = LogMsg::new(LogLevel::Info, "INIT: raylib initialized", 1678900000000);
    /// assert_eq!(msg.text, "INIT: raylib initialized");
    /// ```
    pub fn new(level: LogLevel, text: impl Into<String>, ts_ms: u128) -> Self {
        Self {
            level,
            ts_ms,
            text: text.into(),
        }
    }

    /// Creates a message stamped with the current wall-clock time.
    pub fn now(level: LogLevel, text: impl Into<String>) -> Self {
        Self::new(level, text, now_millis())
    }
}

/// Milliseconds since the UNIX epoch, or 0 if the clock is before it.
#[must_use]
pub fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}
