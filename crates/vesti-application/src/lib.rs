//! Application layer for the Vesti client.
//!
//! Each store owns one disjoint piece of client state and is injected with
//! the trait seams it needs at construction. Stores live for the whole
//! process; screens observe them rather than holding state of their own.

pub mod collection;
pub mod generation;
pub mod preference_store;
pub mod session_store;

pub use collection::{OutfitCollection, WardrobeCollection};
pub use generation::GenerationController;
pub use preference_store::PreferenceStore;
pub use session_store::SessionStore;
