//! Build script - places the nRF52840 memory layout next to the build
//! output so `cortex-m-rt`'s `link.x` can include it.
//!
//! Host builds (unit tests) do not link against `link.x`, so the copy is
//! only performed when the `embedded` feature is enabled.

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    if env::var_os("CARGO_FEATURE_EMBEDDED").is_none() {
        return;
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR set by cargo"));
    fs::copy("memory.x", out_dir.join("memory.x")).expect("memory.x missing from crate root");

    println!("cargo:rustc-link-search={}", out_dir.display());
}
