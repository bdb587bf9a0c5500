//! Error types for the paygate library

use thiserror::Error;

/// Result type alias for paygate operations
pub type Result<T> = std::result::Result<T, PaygateError>;

/// Main error type for paygate operations
#[derive(Error, Debug)]
pub enum PaygateError {
    /// Connection, timeout, body read or decode failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The gateway answered with a status >= 300. Displays the raw body.
    #[error("{body}")]
    Api { status: u16, body: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Order request rejected before it was sent
    #[error("Invalid order: {message}")]
    InvalidOrder { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PaygateError {
    /// Create an API error from a status code and response body
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid order error
    pub fn invalid_order(message: impl Into<String>) -> Self {
        Self::InvalidOrder {
            message: message.into(),
        }
    }

    /// Whether the failure happened before an HTTP status was available
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Whether the gateway rejected the request
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
