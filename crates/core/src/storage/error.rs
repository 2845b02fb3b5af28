//! Storage error types.

use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage client configuration error.
    #[error("storage configuration error: {0}")]
    Configuration(String),

    /// The object store answered with an error.
    #[error("object store rejected request: {code}: {message}")]
    Service {
        /// Store-reported error code, e.g. `AccessDenied`.
        code: String,
        /// Store-reported error message.
        message: String,
    },

    /// The request never got a response (DNS, TLS, connection, timeout).
    #[error("object store request failed: {0}")]
    Transport(String),
}

impl StorageError {
    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a service error.
    #[must_use]
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Service {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a transport error.
    #[must_use]
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}

impl<E, R> From<SdkError<E, R>> for StorageError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug + 'static,
{
    fn from(err: SdkError<E, R>) -> Self {
        match err.as_service_error() {
            Some(service) => Self::service(
                service.code().unwrap_or("Unknown"),
                service.message().unwrap_or_default(),
            ),
            None => Self::transport(DisplayErrorContext(&err).to_string()),
        }
    }
}
