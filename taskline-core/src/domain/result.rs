//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// The three operation variants carry the exact message that is surfaced
/// to the user: the server's `detail` field when the failure response
/// contained one, otherwise the fixed fallback message for that operation.
#[derive(Error, Debug)]
pub enum Error {
    /// Signup or login rejected by the server, unreachable, or unparseable
    #[error("{0}")]
    Auth(String),

    /// Task list retrieval rejected or unreachable
    #[error("{0}")]
    Fetch(String),

    /// Task creation rejected or unreachable
    #[error("{0}")]
    Create(String),

    /// Task operation attempted without a session token
    #[error("Not logged in")]
    Unauthenticated,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an auth error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    /// Create a fetch error
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Create a create error
    pub fn create(msg: impl Into<String>) -> Self {
        Self::Create(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
