//! Theme selection and presentation tokens.

pub mod model;
pub mod repository;

pub use model::{Theme, ThemeMode};
pub use repository::PreferenceRepository;
