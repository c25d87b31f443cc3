//! Saved outfit model and client-local favorites.

pub mod model;
pub mod repository;

pub use model::SavedOutfit;
pub use repository::FavoriteRepository;
