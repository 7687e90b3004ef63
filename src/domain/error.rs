//! Error types for the mealdex crate.
//!
//! This module defines the centralized error type [`MealdexError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for mealdex operations.
///
/// Remote and storage failures are handled close to where they occur and
/// degrade to default states; the variants here exist so adapters can report
/// a typed cause before the state store swallows it. Only the constructors
/// and the composition root surface these to callers.
#[derive(Debug, Error)]
pub enum MealdexError {
    /// Transport or HTTP failure talking to the remote meal database.
    ///
    /// Wraps errors from the HTTP client, including non-success status codes
    /// and response body decode failures. Automatically converts from
    /// `reqwest::Error` using the `#[from]` attribute.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Stored favorites data was present but not parseable.
    ///
    /// Surfaced by the persistence adapter when the favorites slot exists
    /// but its contents do not deserialize. The state store treats this as
    /// an empty collection after logging it.
    #[error("Malformed favorites data: {0}")]
    MalformedData(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for mealdex operations.
///
/// This is a type alias for `std::result::Result<T, MealdexError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, MealdexError>;
