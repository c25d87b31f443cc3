//! Favorite-outfit repository trait.

use crate::error::Result;

/// Durable storage for the set of favorited outfit ids.
///
/// Favorites live only on the device; the server record knows nothing about
/// them. Ids referring to outfits deleted elsewhere may linger in storage and
/// must be tolerated by readers (dropped silently, never an error).
pub trait FavoriteRepository: Send + Sync {
    /// Loads the persisted favorite ids, preserving stored order.
    fn load(&self) -> Result<Vec<String>>;

    /// Persists the full favorite id set.
    fn save(&self, ids: &[String]) -> Result<()>;
}
