//! Profile persistence (load/save).

use std::path::{Path, PathBuf};

use crate::profile::CalibrationProfile;

const PROFILE_FILENAME: &str = "strassen_calibration.json";
const CONFIG_DIR_NAME: &str = "strassen";

/// Standard profile location: `$XDG_CONFIG_HOME/strassen/` or `~/.config/strassen/`,
/// falling back to the working directory.
#[must_use]
pub fn default_profile_path() -> PathBuf {
    let config_dir = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")));

    match config_dir {
        Some(dir) => dir.join(CONFIG_DIR_NAME).join(PROFILE_FILENAME),
        None => PathBuf::from(format!(".{PROFILE_FILENAME}")),
    }
}

/// Save a profile as pretty JSON, creating parent directories as needed.
pub fn save_profile(p: &CalibrationProfile, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(p).map_err(std::io::Error::other)?;
    std::fs::write(path, content)
}

/// Load a profile; `None` if the file is missing or malformed.
#[must_use]
pub fn load_profile(path: &Path) -> Option<CalibrationProfile> {
    let content = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(p) => Some(p),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "malformed calibration profile");
            None
        }
    }
}

/// Load a profile and reject it if incompatible, invalid, or from another machine.
#[must_use]
pub fn load_validated_profile(path: &Path) -> Option<CalibrationProfile> {
    let p = load_profile(path)?;

    if !p.is_compatible() {
        tracing::info!("Profile version mismatch, ignoring cached profile");
        return None;
    }
    if !p.is_valid() {
        tracing::info!("Profile has invalid thresholds, ignoring cached profile");
        return None;
    }
    if !p.matches_machine() {
        tracing::info!("Profile core count mismatch, ignoring cached profile");
        return None;
    }
    Some(p)
}
