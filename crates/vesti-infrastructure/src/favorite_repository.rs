//! TOML-backed favorite-outfit repository.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use vesti_core::error::Result;
use vesti_core::outfit::FavoriteRepository;

use crate::paths::VestiPaths;
use crate::storage::AtomicTomlFile;

/// On-disk shape of `favorites.toml`.
///
/// Ids are stored in the order they were favorited. Ids of outfits deleted
/// elsewhere may linger here; readers drop them against the live collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FavoriteDoc {
    #[serde(default)]
    outfit_ids: Vec<String>,
}

/// Stores favorited outfit ids in `favorites.toml`.
pub struct TomlFavoriteRepository {
    file: AtomicTomlFile<FavoriteDoc>,
}

impl TomlFavoriteRepository {
    /// Creates a repository at the default platform location.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(VestiPaths::favorites_file()?))
    }

    /// Creates a repository backed by an explicit path (used by tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }
}

impl FavoriteRepository for TomlFavoriteRepository {
    fn load(&self) -> Result<Vec<String>> {
        Ok(self.file.load()?.unwrap_or_default().outfit_ids)
    }

    fn save(&self, ids: &[String]) -> Result<()> {
        tracing::debug!(count = ids.len(), "persisting favorite outfit ids");
        self.file.save(&FavoriteDoc {
            outfit_ids: ids.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_store_loads_empty_vec() {
        let dir = TempDir::new().unwrap();
        let repo = TomlFavoriteRepository::with_path(dir.path().join("favorites.toml"));
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_preserves_order() {
        let dir = TempDir::new().unwrap();
        let repo = TomlFavoriteRepository::with_path(dir.path().join("favorites.toml"));

        let ids = vec!["9".to_string(), "2".to_string(), "5".to_string()];
        repo.save(&ids).unwrap();
        assert_eq!(repo.load().unwrap(), ids);
    }

    #[test]
    fn test_save_empty_clears_previous() {
        let dir = TempDir::new().unwrap();
        let repo = TomlFavoriteRepository::with_path(dir.path().join("favorites.toml"));

        repo.save(&["1".to_string()]).unwrap();
        repo.save(&[]).unwrap();
        assert!(repo.load().unwrap().is_empty());
    }
}
