//! The remote resource gateway trait.
//!
//! The gateway is the sole point of contact with the backend. Every call
//! resolves to a typed payload or to one of the transport error kinds
//! (`Network`, `Server`, `Timeout`); user-facing translation is the caller's
//! job and the gateway never retries on its own.

use async_trait::async_trait;

use crate::error::Result;
use crate::generation::GenerationOutcome;
use crate::outfit::SavedOutfit;
use crate::user::{LoginCredentials, RegisterProfile, UserIdentity};
use crate::wardrobe::WardrobeItem;

/// A successful auth call: the confirmed identity plus the server's message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSuccess {
    pub user: UserIdentity,
    pub message: String,
}

#[async_trait]
pub trait ApiGateway: Send + Sync {
    /// `GET /current-user` - the startup session probe. A 401 here is the
    /// normal logged-out path, not an exceptional condition.
    async fn current_user(&self) -> Result<UserIdentity>;

    /// `POST /login`
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthSuccess>;

    /// `POST /register`
    async fn register(&self, profile: &RegisterProfile) -> Result<AuthSuccess>;

    /// `POST /logout` - best-effort; callers clear local state regardless.
    async fn logout(&self) -> Result<()>;

    /// `POST /upload-clothing` - multipart image upload; the backend
    /// analyzes the photo and creates the item.
    async fn upload_clothing(&self, filename: &str, image: Vec<u8>) -> Result<String>;

    /// `GET /wardrobe-items`
    async fn wardrobe_items(&self) -> Result<Vec<WardrobeItem>>;

    /// `DELETE /wardrobe-items/{id}`
    async fn delete_wardrobe_item(&self, id: &str) -> Result<()>;

    /// `DELETE /wardrobe-items` with the full id set; atomic on the backend.
    async fn delete_wardrobe_items(&self, ids: &[String]) -> Result<()>;

    /// `POST /generate-complete-outfit` - the slow AI generation call.
    async fn generate_outfit(&self, prompt: &str) -> Result<GenerationOutcome>;

    /// `POST /save-outfit`
    async fn save_outfit(&self, name: &str, image_url: &str, prompt: &str) -> Result<()>;

    /// `GET /saved-outfits`
    async fn saved_outfits(&self) -> Result<Vec<SavedOutfit>>;

    /// `DELETE /saved-outfits/{id}`
    async fn delete_outfit(&self, id: &str) -> Result<()>;

    /// `DELETE /saved-outfits` with the full id set; atomic on the backend.
    async fn delete_outfits(&self, ids: &[String]) -> Result<()>;

    /// `PUT /saved-outfits/{id}` - rename. The server stores the name as
    /// sent, so callers may update their local record after confirmation.
    async fn rename_outfit(&self, id: &str, name: &str) -> Result<()>;
}
