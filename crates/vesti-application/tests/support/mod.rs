//! Shared test doubles for the application stores.
#![allow(dead_code)]

use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::oneshot;

use vesti_core::error::{Result, VestiError};
use vesti_core::gateway::{ApiGateway, AuthSuccess};
use vesti_core::generation::GenerationOutcome;
use vesti_core::outfit::{FavoriteRepository, SavedOutfit};
use vesti_core::theme::{PreferenceRepository, ThemeMode};
use vesti_core::user::{LoginCredentials, RegisterProfile, UserIdentity};
use vesti_core::wardrobe::WardrobeItem;

pub fn sample_user() -> UserIdentity {
    UserIdentity {
        id: "7".to_string(),
        display_name: "Robin".to_string(),
        email: "robin@example.com".to_string(),
    }
}

pub fn sample_item(id: &str, category: &str) -> WardrobeItem {
    WardrobeItem {
        id: id.to_string(),
        image_url: format!("/static/uploads/{}.jpg", id),
        type_category: category.to_string(),
        tags: vec!["casual".to_string()],
        created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
    }
}

pub fn sample_outfit(id: &str, name: &str) -> SavedOutfit {
    SavedOutfit {
        id: id.to_string(),
        name: name.to_string(),
        image_url: format!("/static/generated/{}.png", id),
        prompt: "smart casual".to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 6, 2, 9, 30, 0).unwrap(),
    }
}

pub fn sample_outcome(image: &str) -> GenerationOutcome {
    GenerationOutcome {
        message: "Outfit generated".to_string(),
        image_url: image.to_string(),
        selected_items: BTreeMap::new(),
    }
}

/// In-memory stand-in for the backend. Collections mutate the way the real
/// server would so reload-after-delete semantics are observable; failure
/// flags force specific error paths.
#[derive(Default)]
pub struct MockGateway {
    pub session_user: Mutex<Option<UserIdentity>>,
    pub wardrobe: Mutex<Vec<WardrobeItem>>,
    pub outfits: Mutex<Vec<SavedOutfit>>,
    pub fail_load: AtomicBool,
    pub fail_batch_delete: AtomicBool,
    pub fail_logout: AtomicBool,
    pub login_calls: AtomicUsize,
    pub generate_calls: AtomicUsize,
    pub rename_calls: Mutex<Vec<(String, String)>>,
    pub save_calls: Mutex<Vec<(String, String, String)>>,
    generate_scripts: Mutex<VecDeque<oneshot::Receiver<Result<GenerationOutcome>>>>,
}

impl MockGateway {
    /// Queues a hand-completed response for the next `generate_outfit` call,
    /// letting a test decide when (and in what order) responses land.
    pub fn script_generate(&self, rx: oneshot::Receiver<Result<GenerationOutcome>>) {
        self.generate_scripts.lock().unwrap().push_back(rx);
    }
}

#[async_trait]
impl ApiGateway for MockGateway {
    async fn current_user(&self) -> Result<UserIdentity> {
        self.session_user
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| VestiError::server(401, "Not authenticated"))
    }

    async fn login(&self, _credentials: &LoginCredentials) -> Result<AuthSuccess> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        Ok(AuthSuccess {
            user: sample_user(),
            message: "Login successful".to_string(),
        })
    }

    async fn register(&self, _profile: &RegisterProfile) -> Result<AuthSuccess> {
        Ok(AuthSuccess {
            user: sample_user(),
            message: "Registration successful".to_string(),
        })
    }

    async fn logout(&self) -> Result<()> {
        if self.fail_logout.load(Ordering::SeqCst) {
            return Err(VestiError::network("connection refused"));
        }
        Ok(())
    }

    async fn upload_clothing(&self, _filename: &str, _image: Vec<u8>) -> Result<String> {
        Ok("Clothing item uploaded successfully".to_string())
    }

    async fn wardrobe_items(&self) -> Result<Vec<WardrobeItem>> {
        if self.fail_load.load(Ordering::SeqCst) {
            return Err(VestiError::network("connection refused"));
        }
        Ok(self.wardrobe.lock().unwrap().clone())
    }

    async fn delete_wardrobe_item(&self, id: &str) -> Result<()> {
        self.wardrobe.lock().unwrap().retain(|item| item.id != id);
        Ok(())
    }

    async fn delete_wardrobe_items(&self, ids: &[String]) -> Result<()> {
        if self.fail_batch_delete.load(Ordering::SeqCst) {
            return Err(VestiError::server(500, "Batch delete failed"));
        }
        self.wardrobe
            .lock()
            .unwrap()
            .retain(|item| !ids.contains(&item.id));
        Ok(())
    }

    async fn generate_outfit(&self, _prompt: &str) -> Result<GenerationOutcome> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        let script = self.generate_scripts.lock().unwrap().pop_front();
        match script {
            Some(rx) => rx.await.expect("generate script dropped"),
            None => Ok(sample_outcome("/static/generated/default.png")),
        }
    }

    async fn save_outfit(&self, name: &str, image_url: &str, prompt: &str) -> Result<()> {
        self.save_calls.lock().unwrap().push((
            name.to_string(),
            image_url.to_string(),
            prompt.to_string(),
        ));
        Ok(())
    }

    async fn saved_outfits(&self) -> Result<Vec<SavedOutfit>> {
        if self.fail_load.load(Ordering::SeqCst) {
            return Err(VestiError::network("connection refused"));
        }
        Ok(self.outfits.lock().unwrap().clone())
    }

    async fn delete_outfit(&self, id: &str) -> Result<()> {
        self.outfits.lock().unwrap().retain(|outfit| outfit.id != id);
        Ok(())
    }

    async fn delete_outfits(&self, ids: &[String]) -> Result<()> {
        if self.fail_batch_delete.load(Ordering::SeqCst) {
            return Err(VestiError::server(500, "Batch delete failed"));
        }
        self.outfits
            .lock()
            .unwrap()
            .retain(|outfit| !ids.contains(&outfit.id));
        Ok(())
    }

    async fn rename_outfit(&self, id: &str, name: &str) -> Result<()> {
        self.rename_calls
            .lock()
            .unwrap()
            .push((id.to_string(), name.to_string()));
        if let Some(outfit) = self
            .outfits
            .lock()
            .unwrap()
            .iter_mut()
            .find(|outfit| outfit.id == id)
        {
            outfit.name = name.to_string();
        }
        Ok(())
    }
}

/// Preference repository double counting persistence attempts.
#[derive(Default)]
pub struct MemoryPreferenceRepository {
    pub stored: Mutex<Option<ThemeMode>>,
    pub saves: AtomicUsize,
    pub fail_save: AtomicBool,
}

impl PreferenceRepository for MemoryPreferenceRepository {
    fn load_theme(&self) -> Result<Option<ThemeMode>> {
        Ok(*self.stored.lock().unwrap())
    }

    fn save_theme(&self, mode: ThemeMode) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_save.load(Ordering::SeqCst) {
            return Err(VestiError::io("disk full"));
        }
        *self.stored.lock().unwrap() = Some(mode);
        Ok(())
    }
}

/// Favorite repository double with the same counting scheme.
#[derive(Default)]
pub struct MemoryFavoriteRepository {
    pub stored: Mutex<Vec<String>>,
    pub saves: AtomicUsize,
    pub fail_save: AtomicBool,
}

impl MemoryFavoriteRepository {
    pub fn seeded(ids: &[&str]) -> Self {
        Self {
            stored: Mutex::new(ids.iter().map(|id| id.to_string()).collect()),
            ..Self::default()
        }
    }
}

impl FavoriteRepository for MemoryFavoriteRepository {
    fn load(&self) -> Result<Vec<String>> {
        Ok(self.stored.lock().unwrap().clone())
    }

    fn save(&self, ids: &[String]) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_save.load(Ordering::SeqCst) {
            return Err(VestiError::io("disk full"));
        }
        *self.stored.lock().unwrap() = ids.to_vec();
        Ok(())
    }
}
