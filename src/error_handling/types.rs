//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors raised while profiling a client.
///
/// Every lookup failure falls into one of three kinds: a configuration
/// problem caught before any network activity, a network-level failure
/// (connect, timeout, non-success status), or a response body that does not
/// decode into the expected record shape. None are retried.
#[derive(Error, Debug)]
pub enum LookupError {
    /// A credential or option is missing or unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request could not be completed (connection, timeout, HTTP status).
    #[error("Network error: {0}")]
    Network(#[source] ReqwestError),

    /// The response body was not valid JSON of the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),
}

impl LookupError {
    /// The coarse kind of this error, for reporting and exit-code policy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::Config(_) => ErrorKind::Config,
            LookupError::Network(_) => ErrorKind::Network,
            LookupError::Decode(_) => ErrorKind::Decode,
        }
    }
}

impl From<InitializationError> for LookupError {
    fn from(e: InitializationError) -> Self {
        match e {
            InitializationError::HttpClientError(err) => LookupError::Network(err),
            other => LookupError::Config(other.to_string()),
        }
    }
}

/// Coarse categories of lookup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    Config,
    Network,
    Decode,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Config => "Configuration error",
            ErrorKind::Network => "Network error",
            ErrorKind::Decode => "Decode error",
        }
    }
}
