pub mod log_level;
pub mod log_macros;
pub mod log_msg;
pub mod log_sink;
pub mod logger;
pub mod logger_handle;
pub mod noop_log_sink;
#[cfg(feature = "tracing")]
pub mod tracing_sink;
pub use log_level::LogLevel;
pub use log_sink::LogSink;
pub use noop_log_sink::NoopLogSink;
#[cfg(feature = "tracing")]
pub use tracing_sink::TracingSink;
