//! Category filtering for the wardrobe view.
//!
//! Filtering is pure and synchronous: it derives a displayed subset from the
//! in-memory list without touching the network or mutating the list. Each
//! display category maps to a fixed set of backend keywords, matched
//! case-insensitively by substring against the item's `type_category`.

use serde::{Deserialize, Serialize};

use crate::wardrobe::model::WardrobeItem;

/// Display categories shown in the wardrobe's category bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Tops,
    Bottoms,
    Shoes,
    Accessories,
    Outerwear,
}

impl CategoryFilter {
    /// All filters, in display order.
    pub const ALL: [CategoryFilter; 6] = [
        Self::All,
        Self::Tops,
        Self::Bottoms,
        Self::Shoes,
        Self::Accessories,
        Self::Outerwear,
    ];

    /// Backend keywords this display category matches against.
    fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::All => &[],
            Self::Tops => &["top"],
            Self::Bottoms => &["bottom"],
            Self::Shoes => &["footwear"],
            Self::Accessories => &["accessory"],
            Self::Outerwear => &["outerwear"],
        }
    }

    /// Whether the item belongs to this category.
    pub fn matches(self, item: &WardrobeItem) -> bool {
        if self == Self::All {
            return true;
        }
        let category = item.type_category.to_lowercase();
        self.keywords().iter().any(|kw| category.contains(kw))
    }

    /// Label shown on the category button.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Tops => "Tops",
            Self::Bottoms => "Bottoms",
            Self::Shoes => "Shoes",
            Self::Accessories => "Accessories",
            Self::Outerwear => "Outerwear",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(category: &str) -> WardrobeItem {
        WardrobeItem {
            id: "1".to_string(),
            image_url: "/uploads/1.jpg".to_string(),
            type_category: category.to_string(),
            tags: vec![],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(CategoryFilter::All.matches(&item("top")));
        assert!(CategoryFilter::All.matches(&item("")));
        assert!(CategoryFilter::All.matches(&item("unknown")));
    }

    #[test]
    fn test_matching_is_case_insensitive_substring() {
        assert!(CategoryFilter::Tops.matches(&item("Top")));
        assert!(CategoryFilter::Tops.matches(&item("tank top")));
        assert!(CategoryFilter::Shoes.matches(&item("FOOTWEAR")));
        assert!(!CategoryFilter::Shoes.matches(&item("top")));
    }

    #[test]
    fn test_outerwear_does_not_leak_into_tops() {
        // "outerwear" does not contain "top"
        assert!(!CategoryFilter::Tops.matches(&item("outerwear")));
        assert!(CategoryFilter::Outerwear.matches(&item("outerwear")));
    }
}
