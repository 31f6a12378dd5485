//! Version and usage output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("littleyears {}", VERSION)
}

pub fn usage() -> String {
    format!(
        "{}\n\
         Read-only grandparent portal for the Little Years backend.\n\n\
         USAGE:\n    littleyears [OPTIONS]\n\n\
         OPTIONS:\n\
         \x20   --backend <url>    Portal backend address (env LITTLEYEARS_BACKEND_URL)\n\
         \x20   --viewer <email>   Viewer to sign in as (env LITTLEYEARS_VIEWER)\n\
         \x20   -V, --version      Print version\n\
         \x20   -h, --help         Print this help\n\n\
         Log output goes to ~/.littleyears/logs/littleyears.log (filter: LITTLEYEARS_LOG).",
        version_line()
    )
}
