pub mod error;
pub mod gateway;
pub mod generation;
pub mod outfit;
pub mod theme;
pub mod user;
pub mod wardrobe;

// Re-export common error type
pub use error::VestiError;
