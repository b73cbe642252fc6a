//! Build script for gantry-firmware
//!
//! - Places memory.x where the linker can find it
//! - Passes the cortex-m-rt, embassy-rp and defmt linker scripts

use std::env;
use std::fs;
use std::path::PathBuf;

/// Linker scripts, in link order
const LINK_SCRIPTS: [&str; 3] = ["link.x", "link-rp.x", "defmt.x"];

fn main() {
    setup_linker();
    link_scripts();

    println!("cargo:rerun-if-changed=build.rs");
}

/// Copy memory.x into OUT_DIR and add it to the search path
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("memory.x"), include_bytes!("memory.x")).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
}

/// Link arguments for the firmware binary
fn link_scripts() {
    // Flash sections are not page-aligned
    println!("cargo:rustc-link-arg-bins=--nmagic");

    for script in LINK_SCRIPTS {
        println!("cargo:rustc-link-arg-bins=-T{script}");
    }
}
