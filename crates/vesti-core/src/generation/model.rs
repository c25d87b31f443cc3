//! Generation request domain model.
//!
//! A generation request is ephemeral, in-memory state: at most one is alive
//! per controller, and a superseded request's eventual response is discarded.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::wardrobe::model::WardrobeItem;

/// The payload of a successful generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    /// Server message to show the user
    pub message: String,
    /// Rendered outfit image
    pub image_url: String,
    /// Wardrobe items the backend picked, keyed by category
    #[serde(default)]
    pub selected_items: BTreeMap<String, Vec<WardrobeItem>>,
}

/// Lifecycle of the single in-flight generation request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GenerationStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded(GenerationOutcome),
    Failed(String),
}

impl GenerationStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// Returns the outcome when the last request succeeded.
    pub fn outcome(&self) -> Option<&GenerationOutcome> {
        match self {
            Self::Succeeded(outcome) => Some(outcome),
            _ => None,
        }
    }
}
