//! Wardrobe item domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single piece of clothing in the user's wardrobe.
///
/// Items are created server-side on upload; the client only ever removes
/// them (single or batch delete) and never fabricates ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardrobeItem {
    /// Server-assigned id
    pub id: String,
    /// Image location; may be relative to the gateway's base URL
    pub image_url: String,
    /// Backend-assigned category label (e.g. "top", "footwear")
    pub type_category: String,
    /// Descriptive tags in the order the backend produced them
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}
