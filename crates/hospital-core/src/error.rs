//! Unified error types for the data-access layer.

use thiserror::Error;

/// Unified error type for hospital records operations.
///
/// The taxonomy is deliberately small: connecting to the store and
/// executing statements against it are the only two things that can go
/// wrong at this layer. A row that does not exist is never an error —
/// reads return `None` and writes simply affect zero rows.
#[derive(Error, Debug)]
pub enum HospitalError {
    /// The store could not be reached or rejected the credentials.
    ///
    /// Fatal for the operation in progress; this layer never retries.
    #[error("Connection error: {0}")]
    Connection(String),

    /// A statement failed during preparation, execution, or row mapping.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Missing or malformed configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic error wrapper.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HospitalError {
    /// Creates a connection error.
    #[must_use]
    pub fn connection<T: Into<String>>(message: T) -> Self {
        Self::Connection(message.into())
    }

    /// Creates a persistence error.
    #[must_use]
    pub fn persistence<T: Into<String>>(message: T) -> Self {
        Self::Persistence(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Connection(_) => "CONNECTION_ERROR",
            Self::Persistence(_) => "PERSISTENCE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Checks if this error is retriable by the caller.
    ///
    /// Nothing is retried inside the data-access layer itself.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Persistence(_))
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for HospitalError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::Configuration(_) => Self::Connection(err.to_string()),
            _ => Self::Persistence(err.to_string()),
        }
    }
}
