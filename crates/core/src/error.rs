//! Common error handling utilities and conventions

/// Standard result type for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Core error types that can be shared across crates
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CoreError {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization_error(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization_error(err.to_string())
    }
}

/// Failures reported by a [`SessionStorage`](crate::storage::SessionStorage) backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backend could not be reached (no window, storage disabled)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The backend refused the write, typically because its quota is exhausted
    #[error("Storage write rejected for '{key}': {message}")]
    WriteRejected { key: String, message: String },

    /// A stored value could not be encoded or decoded
    #[error("Stored value for '{key}' is malformed: {message}")]
    Malformed { key: String, message: String },
}

impl StorageError {
    /// Create a write-rejected error for `key`
    pub fn write_rejected(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::WriteRejected {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a malformed-value error for `key`
    pub fn malformed(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            key: key.into(),
            message: message.into(),
        }
    }
}
