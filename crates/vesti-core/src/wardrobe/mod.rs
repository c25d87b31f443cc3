//! Wardrobe item model and category filtering.

pub mod filter;
pub mod model;

pub use filter::CategoryFilter;
pub use model::WardrobeItem;
