//! # Error Types
//!
//! This module defines the error type shared by the whole crate.
//!
//! The built-in generator, objectives and front extraction never fail: an empty waypoint
//! set or a zero population size degenerate into valid (if boring) results. Errors surface
//! only at the edges, when a custom objective produces a non-finite value, when a custom
//! generator returns a route that is not a permutation, when options are
//! inconsistent, or when a configuration file cannot be read.
//!
//! ## Examples
//!
//! ```rust
//! use paretoroute::error::{ParetoError, Result};
//!
//! fn check_threshold(threshold: usize) -> Result<usize> {
//!     if threshold == 0 {
//!         return Err(ParetoError::Configuration(
//!             "Parallel threshold must be at least 1".to_string(),
//!         ));
//!     }
//!     Ok(threshold)
//! }
//!
//! assert!(check_threshold(0).is_err());
//! ```
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use paretoroute::error::{Result, ResultExt};
//! use std::fs::File;
//!
//! fn open_config(path: &str) -> Result<File> {
//!     File::open(path).context("Failed to open cycle configuration")
//! }
//!
//! assert!(open_config("/definitely/not/here.json").is_err());
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while running a route cycle.
#[derive(Error, Debug)]
pub enum ParetoError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an objective produces NaN or infinity.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// Error that occurs when a generated route is not a permutation of its waypoint set.
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    /// Error that occurs when a set of front flags does not line up with its population.
    #[error("Population mismatch: expected {expected} entries, got {actual}")]
    PopulationMismatch { expected: usize, actual: usize },

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error that occurs when a configuration document cannot be parsed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for ParetoError {
    fn from(error: serde_json::Error) -> Self {
        ParetoError::Serialization(error.to_string())
    }
}

/// A specialized Result type for route cycle operations.
pub type Result<T> = std::result::Result<T, ParetoError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use paretoroute::error::ResultExt;
/// use std::fs::File;
///
/// fn read_file(path: &str) -> paretoroute::error::Result<()> {
///     File::open(path).context("Failed to open file")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `ParetoError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| ParetoError::Other(format!("{}: {}", context, e)))
    }
}
