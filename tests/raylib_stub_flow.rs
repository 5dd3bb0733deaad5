//! End-to-end runs of the C ABI against the stand-in raylib.
//! Run with `--features raylib-stub`.
#![cfg(feature = "raylib-stub")]

use std::{
    ffi::{CStr, CString, c_char, c_int},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use rl_tracelog::{
    log::{LogLevel, LogSink},
    raylib::{
        c_api::{rl_tracelog_emit, rl_tracelog_set_callback, rl_tracelog_set_level},
        global, stub,
    },
    trace_log::MESSAGE_CAPACITY,
};

unsafe extern "C" {
    // csrc/trace_log_shim.c
    fn rl_tracelog_log(log_level: c_int, format: *const c_char, ...);
}

static SERIAL: Mutex<()> = Mutex::new(());
static RECEIVED: Mutex<Vec<(c_int, Vec<u8>)>> = Mutex::new(Vec::new());

extern "C" fn host_callback(log_level: c_int, message: *const c_char) {
    // SAFETY: the redirector passes a live, NUL-terminated line.
    let text = unsafe { CStr::from_ptr(message) };
    RECEIVED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push((log_level, text.to_bytes().to_vec()));
}

/// Serializes the tests, which share raylib's process-wide state.
fn fresh() -> MutexGuard<'static, ()> {
    let guard = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
    rl_tracelog_set_callback(None);
    stub::reset();
    RECEIVED.lock().unwrap().clear();
    guard
}

fn received() -> Vec<(c_int, Vec<u8>)> {
    RECEIVED.lock().unwrap().clone()
}

#[test]
fn variadic_render_is_truncated_to_capacity_minus_one() {
    let _serial = fresh();
    rl_tracelog_set_callback(Some(host_callback));

    let long = CString::new("x".repeat(5000)).unwrap();
    unsafe { rl_tracelog_log(3, c"%s".as_ptr(), long.as_ptr()) };

    let got = received();
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].0, 3);
    assert_eq!(got[0].1.len(), MESSAGE_CAPACITY - 1);
    assert!(got[0].1.iter().all(|&b| b == b'x'));
    assert_eq!(stub::default_count(), 0);
}

#[test]
fn variadic_arguments_are_rendered_before_forwarding() {
    let _serial = fresh();
    let (id, percent): (c_int, c_int) = (7, 100);

    unsafe {
        rl_tracelog_log(
            4,
            c"TEXTURE: [ID %d] %s loaded, %d%%".as_ptr(),
            id,
            c"atlas.png".as_ptr(),
            percent,
        )
    };

    assert_eq!(
        stub::last_default(),
        Some((LogLevel::Warning, b"TEXTURE: [ID 7] atlas.png loaded, 100%".to_vec()))
    );
}

#[test]
fn non_utf8_arguments_reach_host_unchanged() {
    let _serial = fresh();
    rl_tracelog_set_callback(Some(host_callback));

    let name = CStr::from_bytes_with_nul(b"caf\xe9.png\0").unwrap();
    unsafe { rl_tracelog_log(3, c"FILEIO: [%s] loaded".as_ptr(), name.as_ptr()) };

    assert_eq!(received(), vec![(3, b"FILEIO: [caf\xe9.png] loaded".to_vec())]);
}

#[test]
fn emit_passes_text_through_unformatted() {
    let _serial = fresh();
    rl_tracelog_set_callback(Some(host_callback));

    unsafe {
        rl_tracelog_emit(3, c"100% done %s".as_ptr());
        rl_tracelog_emit(3, std::ptr::null());
    }

    assert_eq!(received(), vec![(3, b"100% done %s".to_vec())]);
}

#[test]
fn clearing_restores_builtin_sink() {
    let _serial = fresh();
    rl_tracelog_set_callback(Some(host_callback));
    assert!(stub::callback_installed());
    assert!(global().has_callback());
    unsafe { rl_tracelog_log(3, c"%s".as_ptr(), c"before".as_ptr()) };

    rl_tracelog_set_callback(None);
    unsafe { rl_tracelog_log(3, c"%s".as_ptr(), c"after".as_ptr()) };

    assert!(!stub::callback_installed());
    assert!(!global().has_callback());
    assert_eq!(received(), vec![(3, b"before".to_vec())]);
    assert_eq!(stub::last_default(), Some((LogLevel::Info, b"after".to_vec())));
    assert_eq!(stub::default_count(), 1);
}

#[test]
fn callback_is_stored_before_raylib_can_fire() {
    let _serial = fresh();
    stub::log_on_install(true);

    rl_tracelog_set_callback(Some(host_callback));

    assert_eq!(received(), vec![(3, b"STUB: callback installed".to_vec())]);
    assert_eq!(stub::default_count(), 0);
}

#[test]
fn threshold_applies_before_callback() {
    let _serial = fresh();
    rl_tracelog_set_callback(Some(host_callback));
    rl_tracelog_set_level(4);

    unsafe {
        rl_tracelog_log(3, c"%s".as_ptr(), c"skipped".as_ptr());
        rl_tracelog_log(4, c"%s".as_ptr(), c"kept".as_ptr());
    }

    assert_eq!(received(), vec![(4, b"kept".to_vec())]);
}

#[test]
fn panicking_callback_does_not_unwind_into_c() {
    let _serial = fresh();
    let boom: Arc<dyn LogSink> = Arc::new(|_: LogLevel, msg: &str| {
        if !msg.is_empty() {
            panic!("host failed on {msg}");
        }
    });
    global().set_callback(Some(boom));

    unsafe { rl_tracelog_log(5, c"%s".as_ptr(), c"AUDIO: device lost".as_ptr()) };

    rl_tracelog_set_callback(Some(host_callback));
    unsafe { rl_tracelog_log(5, c"%s".as_ptr(), c"AUDIO: recovered".as_ptr()) };

    assert_eq!(received(), vec![(5, b"AUDIO: recovered".to_vec())]);
    assert_eq!(stub::default_count(), 0);
}
