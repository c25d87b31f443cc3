//! User domain model.
//!
//! `UserIdentity` is the server-owned identity record; the client never
//! fabricates one. `LoginCredentials` and `RegisterProfile` carry the form
//! input for the two auth endpoints together with their local validation
//! rules, which run before any network call.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VestiError};

/// The authenticated user's identity as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Server-assigned user id
    pub id: String,
    /// Human-readable name chosen at registration
    pub display_name: String,
    /// Login email
    pub email: String,
}

/// Authentication state as seen by the screens gated on it.
///
/// The state starts as `Checking` while the startup session probe is in
/// flight; `Authenticated` and `Unauthenticated` are both revisitable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    /// The startup "who am I" probe has not resolved yet
    #[default]
    Checking,
    /// A session cookie is live and the backend confirmed the identity
    Authenticated(UserIdentity),
    /// No session; the login/register screens are the only ones reachable
    Unauthenticated,
}

impl AuthState {
    /// Returns the identity when authenticated.
    pub fn identity(&self) -> Option<&UserIdentity> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Login form input.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks that both fields are filled in.
    ///
    /// Deeper checks (email shape, credential correctness) belong to the
    /// backend; an empty field never reaches it.
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(VestiError::validation("Email and password are required"));
        }
        Ok(())
    }
}

/// Registration form input.
#[derive(Debug, Clone)]
pub struct RegisterProfile {
    pub display_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Anti-automation acknowledgment checkbox
    pub not_robot: bool,
}

impl RegisterProfile {
    /// Minimum password length accepted at registration.
    pub const MIN_PASSWORD_LEN: usize = 6;

    /// Validates the whole form. Any violation fails locally without
    /// calling the gateway.
    pub fn validate(&self) -> Result<()> {
        if self.display_name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(VestiError::validation("Please fill in all fields"));
        }
        if self.password != self.confirm_password {
            return Err(VestiError::validation("Passwords do not match"));
        }
        if self.password.len() < Self::MIN_PASSWORD_LEN {
            return Err(VestiError::validation(
                "Password must be at least 6 characters long",
            ));
        }
        if !self.not_robot {
            return Err(VestiError::validation(
                "Please confirm you are not a robot",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> RegisterProfile {
        RegisterProfile {
            display_name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            not_robot: true,
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert!(LoginCredentials::new("", "pw").validate().is_err());
        assert!(LoginCredentials::new("a@b.c", "").validate().is_err());
        assert!(LoginCredentials::new("a@b.c", "pw").validate().is_ok());
    }

    #[test]
    fn test_register_valid_profile_passes() {
        assert!(profile().validate().is_ok());
    }

    #[test]
    fn test_register_rejects_password_mismatch() {
        let mut p = profile();
        p.confirm_password = "other1".to_string();
        let err = p.validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.user_message().contains("match"));
    }

    #[test]
    fn test_register_rejects_short_password() {
        let mut p = profile();
        p.password = "abc".to_string();
        p.confirm_password = "abc".to_string();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_register_requires_robot_acknowledgment() {
        let mut p = profile();
        p.not_robot = false;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_auth_state_identity() {
        let user = UserIdentity {
            id: "7".to_string(),
            display_name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        };
        let state = AuthState::Authenticated(user.clone());
        assert_eq!(state.identity(), Some(&user));
        assert!(AuthState::Unauthenticated.identity().is_none());
        assert_eq!(AuthState::default(), AuthState::Checking);
    }
}
