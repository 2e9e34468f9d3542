//! Error types for the MORVO client.

/// Top-level error type for the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Remote error: {0}")]
    Remote(#[from] RemoteError),

    #[error("Event table error: {0}")]
    Events(#[from] EventTableError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Client-side key-value storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt state file {path}: {reason}")]
    Corrupt { path: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failures talking to the remote onboarding service.
///
/// Every variant is a `RemoteCallFailed` from the user's point of view: the
/// flow catches it and shows a fixed localized message.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("Request to {endpoint} failed: {reason}")]
    RequestFailed { endpoint: String, reason: String },

    #[error("{endpoint} returned HTTP {status}")]
    BadStatus { endpoint: String, status: u16 },

    #[error("Invalid response from {endpoint}: {reason}")]
    InvalidResponse { endpoint: String, reason: String },
}

/// Problems found while validating the event-to-handler table.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EventTableError {
    #[error("No handler for {event} in the {view} view")]
    Unhandled { view: String, event: String },

    #[error("Duplicate handlers for {event} in the {view} view")]
    Duplicate { view: String, event: String },
}

/// Result type alias for the client.
pub type Result<T> = std::result::Result<T, Error>;
