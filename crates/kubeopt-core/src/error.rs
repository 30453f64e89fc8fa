//! Error types for the kubeopt site backend.

/// Errors that can occur in the kubeopt backend core.
///
/// Variants split into two classes: validation failures are the client's
/// fault and surface with their message; everything else is a server
/// fault and surfaces as a generic failure (the detail is logged).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A required field was missing or empty.
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed the presence check, if known
        field: Option<String>,
        /// Client-facing message
        message: String,
    },

    /// Database error (connection, query, or constraint failure).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O error (database directory creation, asset access).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value could not be decoded back into its domain type.
    #[error("Decode error: {message}")]
    Decode {
        /// What failed to decode
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` type alias for kubeopt operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error is the caller's fault (HTTP 400 class).
    ///
    /// Validation failures surface to the caller with their message; all
    /// other variants are server faults (HTTP 500 class).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new decode error.
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Error::Decode {
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::validation("Email required");
        assert_eq!(err.to_string(), "Validation error: Email required");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(Error::validation("test").is_client_error());
        assert!(!Error::decode("bad uuid").is_client_error());
        assert!(!Error::config("missing database url").is_client_error());
        let db: Error = sqlx::Error::PoolClosed.into();
        assert!(!db.is_client_error());
    }

    #[test]
    fn test_validation_error_with_field() {
        let err = Error::validation_field("email", "Email required");
        let Error::Validation { field, message } = err else {
            unreachable!("Expected Validation error variant");
        };
        assert_eq!(field, Some("email".to_string()));
        assert_eq!(message, "Email required");
    }

    #[test]
    fn test_validation_without_field() {
        let err = Error::validation("Missing form body");
        let Error::Validation { field, message } = err else {
            unreachable!("Expected Validation error variant");
        };
        assert_eq!(field, None);
        assert_eq!(message, "Missing form body");
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("Invalid port");
        assert_eq!(err.to_string(), "Configuration error: Invalid port");
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
