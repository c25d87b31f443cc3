//! `HttpGateway` - the reqwest-backed implementation of [`ApiGateway`].

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::json;

use vesti_core::error::{Result, VestiError};
use vesti_core::gateway::{ApiGateway, AuthSuccess};
use vesti_core::generation::GenerationOutcome;
use vesti_core::outfit::SavedOutfit;
use vesti_core::user::{LoginCredentials, RegisterProfile, UserIdentity};
use vesti_core::wardrobe::WardrobeItem;

use crate::config::GatewayConfig;
use crate::wire;

/// Gateway to the Vesti backend over HTTP.
///
/// The session cookie handed out by `/login` or `/register` lives in the
/// client's cookie store and rides on every subsequent request; beyond that
/// the gateway holds no per-call state.
pub struct HttpGateway {
    client: Client,
    config: GatewayConfig,
}

impl HttpGateway {
    /// Creates a gateway with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(config.timeout)
            .build()
            .map_err(|e| VestiError::internal(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    /// Creates a gateway configured from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(GatewayConfig::from_env())
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    /// Maps a non-success response to `Server { status, message }`, pulling
    /// the message out of the `{"error": ...}` body when present.
    async fn failure(response: Response) -> VestiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = wire::error_message(&body).unwrap_or_default();
        VestiError::server(status, message)
    }

    /// Checks the status and decodes the JSON payload.
    async fn read<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }
        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                VestiError::Serialization {
                    format: "JSON".to_string(),
                    message: e.to_string(),
                }
            } else {
                e.into()
            }
        })
    }

    /// Checks the status and discards the payload.
    async fn accept(&self, response: Response) -> Result<()> {
        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }
        Ok(())
    }
}

#[async_trait]
impl ApiGateway for HttpGateway {
    async fn current_user(&self) -> Result<UserIdentity> {
        let response = self.client.get(self.url("/current-user")).send().await?;
        let payload: wire::CurrentUserResponse = self.read(response).await?;
        Ok(payload.user.into())
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthSuccess> {
        let body = json!({
            "email": credentials.email.trim().to_lowercase(),
            "password": credentials.password,
        });
        let response = self
            .client
            .post(self.url("/login"))
            .json(&body)
            .send()
            .await?;
        let payload: wire::AuthResponse = self.read(response).await?;
        Ok(AuthSuccess {
            user: payload.user.into(),
            message: payload.message,
        })
    }

    async fn register(&self, profile: &RegisterProfile) -> Result<AuthSuccess> {
        let body = json!({
            "display_name": profile.display_name.trim(),
            "email": profile.email.trim().to_lowercase(),
            "password": profile.password,
            "confirm_password": profile.confirm_password,
            "not_robot": profile.not_robot,
        });
        let response = self
            .client
            .post(self.url("/register"))
            .json(&body)
            .send()
            .await?;
        let payload: wire::AuthResponse = self.read(response).await?;
        Ok(AuthSuccess {
            user: payload.user.into(),
            message: payload.message,
        })
    }

    async fn logout(&self) -> Result<()> {
        let response = self.client.post(self.url("/logout")).send().await?;
        self.accept(response).await
    }

    async fn upload_clothing(&self, filename: &str, image: Vec<u8>) -> Result<String> {
        let part = Part::bytes(image)
            .file_name(filename.to_string())
            .mime_str("image/jpeg")
            .map_err(|e| VestiError::internal(format!("Invalid upload part: {}", e)))?;
        let form = Form::new().part("image", part);

        let response = self
            .client
            .post(self.url("/upload-clothing"))
            .multipart(form)
            .send()
            .await?;
        let payload: wire::UploadResponse = self.read(response).await?;
        Ok(payload.message)
    }

    async fn wardrobe_items(&self) -> Result<Vec<WardrobeItem>> {
        let response = self.client.get(self.url("/wardrobe-items")).send().await?;
        let items: Vec<wire::WardrobeItemDto> = self.read(response).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    async fn delete_wardrobe_item(&self, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/wardrobe-items/{}", id)))
            .send()
            .await?;
        self.accept(response).await
    }

    async fn delete_wardrobe_items(&self, ids: &[String]) -> Result<()> {
        let response = self
            .client
            .delete(self.url("/wardrobe-items"))
            .json(&json!({ "itemIds": ids }))
            .send()
            .await?;
        self.accept(response).await
    }

    async fn generate_outfit(&self, prompt: &str) -> Result<GenerationOutcome> {
        tracing::debug!(prompt, "submitting outfit generation request");
        let response = self
            .client
            .post(self.url("/generate-complete-outfit"))
            .json(&json!({ "prompt": prompt }))
            .send()
            .await?;
        let payload: wire::GenerateResponse = self.read(response).await?;
        Ok(payload.into())
    }

    async fn save_outfit(&self, name: &str, image_url: &str, prompt: &str) -> Result<()> {
        let response = self
            .client
            .post(self.url("/save-outfit"))
            .json(&json!({
                "name": name,
                "image_url": image_url,
                "prompt": prompt,
            }))
            .send()
            .await?;
        self.accept(response).await
    }

    async fn saved_outfits(&self) -> Result<Vec<SavedOutfit>> {
        let response = self.client.get(self.url("/saved-outfits")).send().await?;
        let payload: wire::SavedOutfitsResponse = self.read(response).await?;
        Ok(payload.outfits.into_iter().map(Into::into).collect())
    }

    async fn delete_outfit(&self, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/saved-outfits/{}", id)))
            .send()
            .await?;
        self.accept(response).await
    }

    async fn delete_outfits(&self, ids: &[String]) -> Result<()> {
        let response = self
            .client
            .delete(self.url("/saved-outfits"))
            .json(&json!({ "outfitIds": ids }))
            .send()
            .await?;
        self.accept(response).await
    }

    async fn rename_outfit(&self, id: &str, name: &str) -> Result<()> {
        let response = self
            .client
            .put(self.url(&format!("/saved-outfits/{}", id)))
            .json(&json!({ "name": name }))
            .send()
            .await?;
        self.accept(response).await
    }
}
