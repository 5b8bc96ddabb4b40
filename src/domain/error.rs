//! Error types for the propsift plugin.
//!
//! The filter engine itself never fails: malformed criteria and record fields
//! degrade to "no constraint" or zero values. Errors only arise around it, when
//! the listing catalog or a theme file is read, or when the worker receives a
//! message it cannot decode.

use thiserror::Error;

/// The main error type for propsift operations.
///
/// # Examples
///
/// ```
/// use propsift::domain::PropsiftError;
///
/// let err = PropsiftError::Catalog("expected an object or array".to_string());
/// assert_eq!(err.to_string(), "Catalog error: expected an object or array");
/// ```
#[derive(Debug, Error)]
pub enum PropsiftError {
    /// The listing catalog could not be parsed.
    ///
    /// The string carries the parser's description of the problem.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Converts automatically from `std::io::Error`, typically raised when the
    /// catalog file is missing or unreadable.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A custom theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),
}

/// A specialized `Result` type for propsift operations.
pub type Result<T> = std::result::Result<T, PropsiftError>;
