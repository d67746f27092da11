//! # Configuration Module
//!
//! Data directory and runtime configuration for MoodMuse.
//!
//! ## Data Storage
//!
//! The saved-playlist library lives in the platform-standard data directory:
//! - Linux: `~/.local/share/moodmuse/library.json`
//! - macOS: `~/Library/Application Support/moodmuse/library.json`
//! - Windows: `%APPDATA%\moodmuse\library.json`
//!
//! The command line can point somewhere else with `--library` or the
//! `MOODMUSE_LIBRARY` environment variable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "moodmuse";
const LIBRARY_FILE: &str = "library.json";

/// Returns the platform-appropriate data directory for MoodMuse, creating
/// it if needed.
///
/// # Errors
///
/// Fails if the system data directory cannot be determined or the
/// `moodmuse` subdirectory cannot be created.
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        anyhow::anyhow!(
            "Could not determine system data directory. Use --library to choose a library file."
        )
    })?;

    let app_dir = data_dir.join(APP_DIR);
    fs::create_dir_all(&app_dir).with_context(|| {
        format!(
            "Failed to create MoodMuse data directory at {}. Please check file permissions.",
            app_dir.display()
        )
    })?;

    Ok(app_dir)
}

/// Returns the default library file path.
///
/// ```no_run
/// use moodmuse::config::get_library_path;
///
/// let path = get_library_path()?;
/// println!("Library location: {}", path.display());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn get_library_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(LIBRARY_FILE))
}

/// Configuration for runtime behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Path to the saved-playlist library
    pub library_path: PathBuf,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            library_path: get_library_path().unwrap_or_else(|_| PathBuf::from(LIBRARY_FILE)),
        }
    }
}

impl RuntimeConfig {
    /// Configuration rooted in the platform data directory
    pub fn new() -> Result<Self> {
        Ok(Self {
            library_path: get_library_path()?,
        })
    }

    /// Configuration with an explicit library path
    #[must_use]
    pub fn with_library_path(library_path: PathBuf) -> Self {
        Self { library_path }
    }

    /// Explicit path when given, platform default otherwise.
    pub fn resolve(library_path: Option<PathBuf>) -> Result<Self> {
        match library_path {
            Some(path) => Ok(Self::with_library_path(path)),
            None => Self::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = PathBuf::from("/tmp/custom/library.json");
        let config = RuntimeConfig::resolve(Some(path.clone())).unwrap();
        assert_eq!(config.library_path, path);
        assert_eq!(RuntimeConfig::with_library_path(path.clone()), config);
    }

    #[test]
    fn test_library_path_structure() {
        // Only meaningful where the platform exposes a writable data directory
        let Ok(path) = get_library_path() else {
            return;
        };
        assert_eq!(path.file_name().unwrap(), "library.json");
        let parent = path.parent().expect("Should have parent directory");
        assert_eq!(parent.file_name().unwrap(), "moodmuse");
        assert!(parent.is_dir());
    }

    #[test]
    fn test_default_config_points_at_library_file() {
        let config = RuntimeConfig::default();
        assert!(config.library_path.ends_with(LIBRARY_FILE));
    }
}
