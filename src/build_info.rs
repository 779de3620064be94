//! Build stamp generated by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Text printed by `--version`, e.g. `flappy 0.1.0 (a1b2c3d, 2026-10-19)`.
pub fn version_line() -> String {
    format!(
        "flappy {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_COMMIT,
        BUILD_DATE
    )
}
