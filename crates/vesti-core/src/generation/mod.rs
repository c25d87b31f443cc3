//! Outfit generation request model.

pub mod model;

pub use model::{GenerationOutcome, GenerationStatus};
