//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version line printed in verbose mode.
#[must_use]
pub fn full_version() -> String {
    format!("strassen {} ({} workers)", version(), strassen_core::fork_join::default_parallelism())
}
