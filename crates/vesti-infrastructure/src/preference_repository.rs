//! TOML-backed preference repository.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use vesti_core::error::Result;
use vesti_core::theme::{PreferenceRepository, ThemeMode};

use crate::paths::VestiPaths;
use crate::storage::AtomicTomlFile;

/// On-disk shape of `preferences.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PreferenceDoc {
    theme: ThemeMode,
}

/// Stores the theme preference in `preferences.toml`.
pub struct TomlPreferenceRepository {
    file: AtomicTomlFile<PreferenceDoc>,
}

impl TomlPreferenceRepository {
    /// Creates a repository at the default platform location.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(VestiPaths::preferences_file()?))
    }

    /// Creates a repository backed by an explicit path (used by tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }
}

impl PreferenceRepository for TomlPreferenceRepository {
    fn load_theme(&self) -> Result<Option<ThemeMode>> {
        Ok(self.file.load()?.map(|doc| doc.theme))
    }

    fn save_theme(&self, mode: ThemeMode) -> Result<()> {
        tracing::debug!(?mode, "persisting theme preference");
        self.file.save(&PreferenceDoc { theme: mode })
    }
}
