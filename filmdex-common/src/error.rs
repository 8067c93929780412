//! Common error types for filmdex

use thiserror::Error;

/// Common result type for filmdex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the filmdex crates
///
/// The `InvalidCodeFormat` / `InvalidDxNumberFormat` / `ConflictingCodeInputs`
/// / `NoSearchCriteria` / `InvalidInput` variants are client input errors:
/// they are detected during query normalization, before any database access.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// A DX code has more digits than its form allows once normalized
    #[error("Invalid DX code: length should be lower or equal than {0}")]
    InvalidCodeFormat(usize),

    /// The two-part DX number could not be parsed into two integers
    #[error(
        "Invalid DX number. The accepted format is two series of digits separated by a dash. \"XXX-XX\""
    )]
    InvalidDxNumberFormat,

    /// Both a two-part DX number and a direct extract code were supplied
    #[error(
        "Either provide the DX extract (4 digits) or provide the DX number (\"XXX-XX\"). Not both."
    )]
    ConflictingCodeInputs,

    /// Normalization produced an empty filter
    #[error("No search parameters provided.")]
    NoSearchCriteria,

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// True for errors caused by the client's request rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidCodeFormat(_)
                | Error::InvalidDxNumberFormat
                | Error::ConflictingCodeInputs
                | Error::NoSearchCriteria
                | Error::InvalidInput(_)
        )
    }
}
