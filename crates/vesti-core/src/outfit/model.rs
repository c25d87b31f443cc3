//! Saved outfit domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An outfit the user generated and saved to the backend.
///
/// `name` is the only field mutable after creation (via rename). Whether an
/// outfit is a favorite is a client-local annotation kept outside this type;
/// see [`crate::outfit::FavoriteRepository`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedOutfit {
    /// Server-assigned id
    pub id: String,
    pub name: String,
    /// Image location; either absolute or relative to the gateway base URL
    pub image_url: String,
    /// The text prompt that produced this outfit
    pub prompt: String,
    pub created_at: DateTime<Utc>,
}
