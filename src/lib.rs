//! rl-tracelog forwards formatted log lines into raylib's trace log and lets
//! a host replace raylib's log output with its own callback.
//!
//! - [`trace_log`]: bounded rendering, literal emission and the
//!   callback redirector, written against the [`TraceLogLibrary`] seam.
//! - `raylib` (feature `raylib`): the linked raylib backend and a C ABI for
//!   foreign hosts.
//! - [`log`]: log levels, sinks and a file logger that can capture raylib's
//!   output.
//! - [`config`]: INI configuration for the threshold and the file logger.
//!
//! [`TraceLogLibrary`]: trace_log::TraceLogLibrary

/// Handles configuration loading and management.
pub mod config;
/// Logging utilities: levels, sinks, file logger.
pub mod log;
/// raylib backend and C ABI exports.
#[cfg(feature = "raylib")]
pub mod raylib;
/// Trace-log forwarding and callback redirection.
pub mod trace_log;
