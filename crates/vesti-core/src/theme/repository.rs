//! Preference repository trait.

use crate::error::Result;
use crate::theme::model::ThemeMode;

/// Durable storage for the user's presentation preference.
///
/// Implementations are device-local; the preference is never synced across
/// devices.
pub trait PreferenceRepository: Send + Sync {
    /// Reads the persisted theme mode. `Ok(None)` means nothing was
    /// persisted yet.
    fn load_theme(&self) -> Result<Option<ThemeMode>>;

    /// Persists the theme mode.
    fn save_theme(&self, mode: ThemeMode) -> Result<()>;
}
