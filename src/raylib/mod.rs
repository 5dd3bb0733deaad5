//! raylib backend (feature `raylib`).
//!
//! raylib keeps one trace-log callback per process and passes it a
//! `va_list`, so the C helper in `csrc/trace_log_shim.c` renders each line and
//! hands the text to [`raylib_library`], which dispatches it through the
//! registered trampoline. [`c_api`] exports the same operations to C hosts.

pub mod c_api;
mod ffi;
pub mod raylib_library;
#[cfg(feature = "raylib-stub")]
pub mod stub;

pub use c_api::global;
pub use raylib_library::RaylibLibrary;
