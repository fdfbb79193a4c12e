// File: crates/chart-core/build.rs
// Summary: Link Windows system libraries that Skia's font manager needs.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // Build scripts run on the host; inspect the target explicitly.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
