//! Compile-time build information.

pub const BUILD_COMMIT: &str = env!("MINIGAMES_BUILD_COMMIT");
pub const BUILD_DATE: &str = env!("MINIGAMES_BUILD_DATE");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The line printed by `minigames --version`.
pub fn version_line() -> String {
    format!("minigames {} ({} {})", VERSION, BUILD_DATE, BUILD_COMMIT)
}
