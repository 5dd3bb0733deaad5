//! Build script for rl-tracelog
//!
//! With the `raylib` feature, compiles the C helper that renders raylib's
//! `va_list` log arguments and links the system raylib. Rust cannot receive a
//! `va_list` on stable, so the C compiler generates that ABI code.
//!
//! With `raylib-stub`, `csrc/raylib_stub.c` stands in for the system raylib.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    #[cfg(feature = "raylib")]
    {
        println!("cargo:rerun-if-changed=csrc/trace_log_shim.c");
        println!("cargo:rerun-if-changed=csrc/raylib_stub.c");
        println!("cargo:rerun-if-env-changed=RAYLIB_LIB_DIR");

        let mut build = cc::Build::new();
        build.file("csrc/trace_log_shim.c");
        #[cfg(feature = "raylib-stub")]
        build.file("csrc/raylib_stub.c");
        build.opt_level(2).compile("trace_log_shim");

        #[cfg(not(feature = "raylib-stub"))]
        {
            if let Ok(dir) = std::env::var("RAYLIB_LIB_DIR") {
                println!("cargo:rustc-link-search=native={dir}");
            }
            println!("cargo:rustc-link-lib=raylib");
        }
    }
}
