// File: crates/tufte-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Registry lookups (RegOpenKeyExW and friends) from the font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
