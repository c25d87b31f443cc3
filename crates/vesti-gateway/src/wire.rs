//! Wire DTOs for the backend's JSON payloads.
//!
//! Field names mirror the backend exactly (`display_name`, `type_category`,
//! `outfit_image_url`, ...). Ids arrive as numbers from the backend but are
//! plain strings in the domain; `id_string` accepts either shape. Timestamps
//! are ISO 8601, with or without an offset.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use vesti_core::generation::GenerationOutcome;
use vesti_core::outfit::SavedOutfit;
use vesti_core::user::UserIdentity;
use vesti_core::wardrobe::WardrobeItem;

/// Accepts a JSON number or string and yields a string id.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Str(String),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(n) => n.to_string(),
        Raw::Str(s) => s,
    })
}

/// Parses an ISO 8601 timestamp; the backend emits naive UTC
/// (`2024-05-01T12:00:00`) but offsets are accepted too.
fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}

/// Error payload shape: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Extracts the backend's error message from a response body, if the body
/// follows the `{"error": ...}` convention.
pub fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
}

#[derive(Debug, Deserialize)]
pub struct UserDto {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub display_name: String,
    pub email: String,
}

impl From<UserDto> for UserIdentity {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            display_name: dto.display_name,
            email: dto.email,
        }
    }
}

/// `POST /login` and `POST /register` success payload.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserDto,
    #[serde(default)]
    pub message: String,
}

/// `GET /current-user` payload.
#[derive(Debug, Deserialize)]
pub struct CurrentUserResponse {
    pub user: UserDto,
}

/// `POST /upload-clothing` payload.
#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct WardrobeItemDto {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub image_url: String,
    pub type_category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl From<WardrobeItemDto> for WardrobeItem {
    fn from(dto: WardrobeItemDto) -> Self {
        Self {
            id: dto.id,
            image_url: dto.image_url,
            type_category: dto.type_category,
            tags: dto.tags,
            created_at: dto.timestamp,
        }
    }
}

/// `POST /generate-complete-outfit` success payload.
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub message: String,
    pub outfit_image_url: String,
    #[serde(default)]
    pub selected_items: BTreeMap<String, Vec<WardrobeItemDto>>,
}

impl From<GenerateResponse> for GenerationOutcome {
    fn from(dto: GenerateResponse) -> Self {
        Self {
            message: dto.message,
            image_url: dto.outfit_image_url,
            selected_items: dto
                .selected_items
                .into_iter()
                .map(|(category, items)| {
                    (category, items.into_iter().map(Into::into).collect())
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SavedOutfitDto {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    pub image_url: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(deserialize_with = "timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl From<SavedOutfitDto> for SavedOutfit {
    fn from(dto: SavedOutfitDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            image_url: dto.image_url,
            prompt: dto.prompt,
            created_at: dto.timestamp,
        }
    }
}

/// `GET /saved-outfits` payload.
#[derive(Debug, Deserialize)]
pub struct SavedOutfitsResponse {
    #[serde(default)]
    pub outfits: Vec<SavedOutfitDto>,
}
