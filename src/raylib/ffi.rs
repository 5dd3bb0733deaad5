use std::ffi::{c_char, c_int};

unsafe extern "C" {
    // raylib
    pub fn TraceLog(log_level: c_int, text: *const c_char, ...);
    pub fn SetTraceLogLevel(log_level: c_int);

    // csrc/trace_log_shim.c
    pub fn rl_tracelog_install_trampoline(enabled: c_int);
}
