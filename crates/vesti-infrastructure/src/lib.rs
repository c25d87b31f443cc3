//! Local persistence for the Vesti client.
//!
//! Everything the client stores outside the backend lives here: the theme
//! preference and the favorited outfit ids, both as small TOML files under
//! the platform config directory. Writes are atomic (tmp file + rename) so a
//! crash mid-write never corrupts a preference.

pub mod favorite_repository;
pub mod paths;
pub mod preference_repository;
pub mod storage;

pub use favorite_repository::TomlFavoriteRepository;
pub use paths::VestiPaths;
pub use preference_repository::TomlPreferenceRepository;
