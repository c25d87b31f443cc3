//! Preference store: theme mode, persisted across restarts.

use std::sync::{Arc, Mutex, MutexGuard};

use vesti_core::theme::{PreferenceRepository, Theme, ThemeMode};

/// Owns the active [`ThemeMode`] and keeps it in sync with the preference
/// file.
///
/// Loading never fails upward: an absent or unreadable preference falls back
/// to light mode. Persistence is best-effort; the in-memory mode is always
/// the source of truth for the running session.
pub struct PreferenceStore {
    repository: Arc<dyn PreferenceRepository>,
    mode: Mutex<ThemeMode>,
}

impl PreferenceStore {
    /// Creates the store, reading the persisted mode up front.
    pub fn new(repository: Arc<dyn PreferenceRepository>) -> Self {
        let mode = match repository.load_theme() {
            Ok(Some(mode)) => mode,
            Ok(None) => ThemeMode::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load theme preference, using default");
                ThemeMode::default()
            }
        };
        Self {
            repository,
            mode: Mutex::new(mode),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ThemeMode> {
        self.mode.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns the active mode.
    pub fn mode(&self) -> ThemeMode {
        *self.lock()
    }

    /// Returns the complete token set for the active mode.
    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.mode())
    }

    /// Flips the mode. The in-memory flip always sticks; a persistence
    /// failure is logged and the session carries on with the new mode.
    pub fn toggle(&self) -> ThemeMode {
        let mode = {
            let mut guard = self.lock();
            *guard = guard.toggled();
            *guard
        };
        if let Err(e) = self.repository.save_theme(mode) {
            tracing::warn!(error = %e, "failed to persist theme preference");
        }
        mode
    }
}
