//! Session store: the single owner of authentication state.

use std::sync::Arc;

use tokio::sync::watch;

use vesti_core::error::Result;
use vesti_core::gateway::ApiGateway;
use vesti_core::user::{AuthState, LoginCredentials, RegisterProfile};

/// Owns the [`AuthState`] and publishes every transition over a watch
/// channel so gated screens can react to login and logout.
///
/// The store starts in `Checking`; callers run [`check_session`] once at
/// startup to resolve it.
///
/// [`check_session`]: SessionStore::check_session
pub struct SessionStore {
    gateway: Arc<dyn ApiGateway>,
    state: watch::Sender<AuthState>,
}

impl SessionStore {
    pub fn new(gateway: Arc<dyn ApiGateway>) -> Self {
        Self {
            gateway,
            state: watch::Sender::new(AuthState::Checking),
        }
    }

    /// Subscribes to auth state transitions.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Returns the current auth state.
    pub fn current(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Probes the backend for an existing session cookie.
    ///
    /// Any failure, including the 401 of a plain logged-out client, resolves
    /// to `Unauthenticated` without surfacing an error.
    pub async fn check_session(&self) {
        match self.gateway.current_user().await {
            Ok(user) => {
                tracing::debug!(user_id = %user.id, "session restored");
                self.state.send_replace(AuthState::Authenticated(user));
            }
            Err(e) => {
                tracing::debug!(error = %e, "no active session");
                self.state.send_replace(AuthState::Unauthenticated);
            }
        }
    }

    /// Logs in. Validation failures never reach the gateway.
    ///
    /// # Returns
    ///
    /// The server's confirmation message on success.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<String> {
        credentials.validate()?;
        let success = self.gateway.login(credentials).await?;
        self.state
            .send_replace(AuthState::Authenticated(success.user));
        Ok(success.message)
    }

    /// Registers a new account and enters the authenticated state.
    pub async fn register(&self, profile: &RegisterProfile) -> Result<String> {
        profile.validate()?;
        let success = self.gateway.register(profile).await?;
        self.state
            .send_replace(AuthState::Authenticated(success.user));
        Ok(success.message)
    }

    /// Logs out. The gateway call is best-effort: local state clears even
    /// when the backend is unreachable.
    pub async fn logout(&self) {
        if let Err(e) = self.gateway.logout().await {
            tracing::warn!(error = %e, "logout request failed, clearing session anyway");
        }
        self.state.send_replace(AuthState::Unauthenticated);
    }
}
