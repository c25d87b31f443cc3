//! Saved-outfit collection view model.

use std::sync::{Arc, Mutex, MutexGuard};

use vesti_core::error::{Result, VestiError};
use vesti_core::gateway::ApiGateway;
use vesti_core::outfit::{FavoriteRepository, SavedOutfit};

use super::{LoadPhase, Selection};

#[derive(Default)]
struct OutfitState {
    outfits: Vec<SavedOutfit>,
    favorites: Vec<String>,
    phase: LoadPhase,
    selection: Selection,
}

/// View model for the saved-outfits screen.
///
/// Outfits themselves are remote-authoritative like the wardrobe; the
/// favorite marks are a client-local annotation layer persisted on the
/// device and never sent to the backend.
pub struct OutfitCollection {
    gateway: Arc<dyn ApiGateway>,
    favorites: Arc<dyn FavoriteRepository>,
    state: Mutex<OutfitState>,
}

impl OutfitCollection {
    /// Creates the view model, reading persisted favorites up front. A
    /// favorite load failure leaves the set empty rather than blocking the
    /// screen.
    pub fn new(gateway: Arc<dyn ApiGateway>, favorites: Arc<dyn FavoriteRepository>) -> Self {
        let favorite_ids = match favorites.load() {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load favorite outfits, starting empty");
                Vec::new()
            }
        };
        Self {
            gateway,
            favorites,
            state: Mutex::new(OutfitState {
                favorites: favorite_ids,
                ..OutfitState::default()
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, OutfitState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub async fn load(&self) -> Result<()> {
        self.fetch(LoadPhase::Initial).await
    }

    pub async fn refresh(&self) -> Result<()> {
        self.fetch(LoadPhase::Refresh).await
    }

    async fn fetch(&self, phase: LoadPhase) -> Result<()> {
        self.lock().phase = phase;
        let fetched = self.gateway.saved_outfits().await;
        let mut state = self.lock();
        state.phase = LoadPhase::Idle;
        match fetched {
            Ok(outfits) => {
                state.outfits = outfits;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "outfit load failed, keeping previous list");
                Err(e)
            }
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.lock().phase
    }

    /// The in-memory list exactly as the server returned it.
    pub fn outfits(&self) -> Vec<SavedOutfit> {
        self.lock().outfits.clone()
    }

    /// Display ordering: favorites first, then the rest; within each group
    /// the server's order is preserved.
    pub fn display_order(&self) -> Vec<SavedOutfit> {
        let state = self.lock();
        let (favored, rest): (Vec<_>, Vec<_>) = state
            .outfits
            .iter()
            .cloned()
            .partition(|outfit| state.favorites.contains(&outfit.id));
        favored.into_iter().chain(rest).collect()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        let state = self.lock();
        state.favorites.iter().any(|fav| fav == id)
    }

    /// Favorite ids restricted to outfits still present in the collection.
    /// Ids left behind by deletions elsewhere are silently dropped.
    pub fn favorite_ids(&self) -> Vec<String> {
        let state = self.lock();
        state
            .favorites
            .iter()
            .filter(|id| state.outfits.iter().any(|outfit| &outfit.id == *id))
            .cloned()
            .collect()
    }

    /// Flips the favorite mark for `id`. Purely local; the flip sticks even
    /// when persisting the set fails.
    pub fn toggle_favorite(&self, id: &str) {
        let snapshot = {
            let mut state = self.lock();
            if let Some(pos) = state.favorites.iter().position(|fav| fav == id) {
                state.favorites.remove(pos);
            } else {
                state.favorites.push(id.to_string());
            }
            state.favorites.clone()
        };
        if let Err(e) = self.favorites.save(&snapshot) {
            tracing::warn!(error = %e, "failed to persist favorite outfits");
        }
    }

    pub fn enter_selection(&self, seed_id: &str) {
        self.lock().selection.enter(seed_id);
    }

    pub fn toggle_selection(&self, id: &str) {
        self.lock().selection.toggle(id);
    }

    pub fn exit_selection(&self) {
        self.lock().selection.exit();
    }

    pub fn selection(&self) -> Selection {
        self.lock().selection.clone()
    }

    /// Batch-deletes the selected outfits; same all-or-nothing policy as the
    /// wardrobe.
    pub async fn delete_selected(&self) -> Result<()> {
        let ids = {
            let state = self.lock();
            if !state.selection.is_active() || state.selection.is_empty() {
                return Err(VestiError::validation("No outfits selected"));
            }
            state.selection.ids()
        };
        self.gateway.delete_outfits(&ids).await?;
        self.lock().selection.exit();
        self.load().await
    }

    pub async fn delete_one(&self, id: &str) -> Result<()> {
        self.gateway.delete_outfit(id).await?;
        self.load().await
    }

    /// Renames an outfit. The trimmed name must be non-empty; the local
    /// record updates only after the server confirms, since the server
    /// stores the name exactly as sent.
    pub async fn rename(&self, id: &str, name: &str) -> Result<()> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(VestiError::validation("Outfit name cannot be empty"));
        }
        self.gateway.rename_outfit(id, trimmed).await?;
        let mut state = self.lock();
        if let Some(outfit) = state.outfits.iter_mut().find(|outfit| outfit.id == id) {
            outfit.name = trimmed.to_string();
        }
        Ok(())
    }
}
