//! Error types for the roster engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions the engine can surface.
//!
//! Two conditions from the data pipeline are deliberately *not* errors:
//! a roster shift that resolves to no provider is silently dropped, and a
//! missing optional provider field simply omits that detail downstream.

use thiserror::Error;

/// The main error type for the roster engine.
///
/// # Example
///
/// ```
/// use roster_engine::error::RosterError;
///
/// let error = RosterError::ConfigNotFound {
///     path: "/missing/site.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/site.yaml");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An upstream request failed outright or returned a non-success status.
    #[error("Request to {endpoint} failed: {message}")]
    Network {
        /// The upstream endpoint path.
        endpoint: String,
        /// A description of the transport or status failure.
        message: String,
    },

    /// An upstream response did not have the expected shape.
    ///
    /// Every consumed endpoint returns a JSON array; anything else lands
    /// here, as does an array whose elements fail to deserialize.
    #[error("Unexpected response shape from {endpoint}: {message}")]
    UnexpectedShape {
        /// The upstream endpoint path.
        endpoint: String,
        /// A description of the shape mismatch.
        message: String,
    },

    /// No provider matched the requested profile slug.
    #[error("No profile found for slug '{slug}'")]
    ProfileNotFound {
        /// The slug that did not resolve.
        slug: String,
    },

    /// No public news post carries the requested id.
    #[error("No news post found with id {id}")]
    NewsPostNotFound {
        /// The id that did not resolve.
        id: i64,
    },
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;
