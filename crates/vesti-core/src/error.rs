//! Error types for the Vesti client.

use thiserror::Error;

/// A shared error type for the entire Vesti client.
///
/// Gateway calls resolve to `Network`, `Server` or `Timeout`; user input
/// checks resolve to `Validation` before any network traffic happens.
/// `StaleResponse` is internal bookkeeping for superseded requests and is
/// never shown to the user.
#[derive(Error, Debug, Clone)]
pub enum VestiError {
    /// Local input validation failure, raised before calling the gateway
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backend was never reached (DNS, refused connection, dropped socket)
    #[error("Network error: {0}")]
    Network(String),

    /// The backend responded with a failure status and an optional message
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The request exceeded the configured transport timeout
    #[error("Request timed out")]
    Timeout,

    /// A response arrived for a request that has since been superseded
    #[error("Stale response discarded")]
    StaleResponse,

    /// IO error (local file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl VestiError {
    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a Server error
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a stale-response marker
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::StaleResponse)
    }

    /// Check if the backend rejected the call with an auth status (401/403).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Server { status, .. } if *status == 401 || *status == 403)
    }

    /// Renders the message to show in a dismissible notification.
    ///
    /// Uses the backend's message when one was carried, a generic fallback
    /// otherwise.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Server { message, .. } if !message.is_empty() => message.clone(),
            Self::Server { status, .. } => format!("The server rejected the request ({status})"),
            Self::Network(_) => "Could not reach the server. Check your connection.".to_string(),
            Self::Timeout => "The server took too long to respond.".to_string(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl From<std::io::Error> for VestiError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for VestiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for VestiError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for VestiError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Transport-level errors from reqwest. Status-carrying failures are mapped
/// by the gateway itself, which still has the response body at hand.
impl From<reqwest::Error> for VestiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// A type alias for `Result<T, VestiError>`.
pub type Result<T> = std::result::Result<T, VestiError>;
