// File: crates/outlook-core/build.rs
// Summary: Build script linking the Windows system libraries Skia's font manager needs.

fn main() {
    // Checked through the target cfg env, so cross builds from other hosts link correctly.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
