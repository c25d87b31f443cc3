//! User identity and credential types.

pub mod model;

pub use model::{AuthState, LoginCredentials, RegisterProfile, UserIdentity};
