//! Unified path management for Vesti's local files.
//!
//! All device-local state is kept under a single config directory so it is
//! easy to find and wipe:
//!
//! ```text
//! ~/.config/vesti/
//! ├── preferences.toml    # theme mode
//! └── favorites.toml      # favorited outfit ids
//! ```

use std::path::PathBuf;

use vesti_core::error::{Result, VestiError};

/// Unified path management for the Vesti client.
pub struct VestiPaths;

impl VestiPaths {
    /// Returns the Vesti configuration directory
    /// (e.g. `~/.config/vesti/` on Linux).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("vesti"))
            .ok_or_else(|| VestiError::io("Cannot determine config directory"))
    }

    /// Returns the path to the preferences file.
    pub fn preferences_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("preferences.toml"))
    }

    /// Returns the path to the favorites file.
    pub fn favorites_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("favorites.toml"))
    }
}
