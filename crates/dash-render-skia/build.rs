// File: crates/dash-render-skia/build.rs
// Summary: Links the Windows system libraries Skia/ICU need for PNG snapshots.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW, ...
        println!("cargo:rustc-link-lib=advapi32");
    }
}
