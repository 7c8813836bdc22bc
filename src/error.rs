//! Error types for the Staffing Insight Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while serving a report request.

use thiserror::Error;

/// The main error type for the Staffing Insight Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use staffing_engine::error::EngineError;
///
/// let error = EngineError::MissingParameter {
///     name: "locationId".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing required query parameter: locationId");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required query parameter was not supplied by the caller.
    #[error("Missing required query parameter: {name}")]
    MissingParameter {
        /// The name of the missing parameter.
        name: String,
    },

    /// A date query parameter was not a valid `YYYY-MM-DD` date.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The value that failed to parse.
        value: String,
    },

    /// The request carried no organization context.
    ///
    /// Authentication is handled upstream; this surfaces when the upstream
    /// middleware did not attach an organization to the request.
    #[error("Missing organization context")]
    MissingOrgContext,

    /// The data store failed to answer a query.
    #[error("Data store error: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
