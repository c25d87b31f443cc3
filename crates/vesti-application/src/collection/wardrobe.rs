//! Wardrobe collection view model.

use std::sync::{Arc, Mutex, MutexGuard};

use vesti_core::error::{Result, VestiError};
use vesti_core::gateway::ApiGateway;
use vesti_core::wardrobe::{CategoryFilter, WardrobeItem};

use super::{LoadPhase, Selection};

#[derive(Default)]
struct WardrobeState {
    items: Vec<WardrobeItem>,
    filter: CategoryFilter,
    phase: LoadPhase,
    selection: Selection,
}

/// View model for the wardrobe screen: the remote item list, the category
/// filter applied on top of it, and multi-select batch deletion.
///
/// The in-memory list is remote-authoritative: loads replace it wholesale
/// and every mutation resynchronizes with a reload instead of patching
/// locally. Load failures keep the previous list intact.
pub struct WardrobeCollection {
    gateway: Arc<dyn ApiGateway>,
    state: Mutex<WardrobeState>,
}

impl WardrobeCollection {
    pub fn new(gateway: Arc<dyn ApiGateway>) -> Self {
        Self {
            gateway,
            state: Mutex::new(WardrobeState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, WardrobeState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Initial load with the full-screen spinner.
    pub async fn load(&self) -> Result<()> {
        self.fetch(LoadPhase::Initial).await
    }

    /// Pull-to-refresh. Same semantics as [`load`](Self::load), different
    /// indicator.
    pub async fn refresh(&self) -> Result<()> {
        self.fetch(LoadPhase::Refresh).await
    }

    async fn fetch(&self, phase: LoadPhase) -> Result<()> {
        self.lock().phase = phase;
        let fetched = self.gateway.wardrobe_items().await;
        let mut state = self.lock();
        state.phase = LoadPhase::Idle;
        match fetched {
            Ok(items) => {
                state.items = items;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "wardrobe load failed, keeping previous list");
                Err(e)
            }
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.lock().phase
    }

    /// The full in-memory list, in server order.
    pub fn items(&self) -> Vec<WardrobeItem> {
        self.lock().items.clone()
    }

    pub fn filter(&self) -> CategoryFilter {
        self.lock().filter
    }

    pub fn set_filter(&self, filter: CategoryFilter) {
        self.lock().filter = filter;
    }

    /// The displayed subset under the active category filter. Pure: derives
    /// from the in-memory list without touching the network or the list.
    pub fn filtered(&self) -> Vec<WardrobeItem> {
        let state = self.lock();
        state
            .items
            .iter()
            .filter(|item| state.filter.matches(item))
            .cloned()
            .collect()
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

    /// Batch-deletes the selected items.
    ///
    /// The backend is the unit of atomicity: on success the selection clears
    /// and the list resynchronizes with a reload; on failure nothing was
    /// removed locally and the selection stands so the user can retry.
    pub async fn delete_selected(&self) -> Result<()> {
        let ids = {
            let state = self.lock();
            if !state.selection.is_active() || state.selection.is_empty() {
                return Err(VestiError::validation("No items selected"));
            }
            state.selection.ids()
        };
        self.gateway.delete_wardrobe_items(&ids).await?;
        self.lock().selection.exit();
        self.load().await
    }

    /// Deletes a single item from its detail view and resynchronizes.
    pub async fn delete_one(&self, id: &str) -> Result<()> {
        self.gateway.delete_wardrobe_item(id).await?;
        self.load().await
    }

    /// Uploads a clothing photo for the backend to analyze, then reloads so
    /// the new item appears.
    ///
    /// # Returns
    ///
    /// The server's confirmation message.
    pub async fn upload(&self, filename: &str, image: Vec<u8>) -> Result<String> {
        let message = self.gateway.upload_clothing(filename, image).await?;
        self.load().await?;
        Ok(message)
    }
}
