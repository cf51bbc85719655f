//! Error types and handling
//!
//! This module contains the error types raised by the user pool.

use std::fmt::Display;
use std::path::Path;
use thiserror::Error;

use crate::types::ConfigValidationError;

/// Errors that can occur while loading, growing, or saving a pool
#[derive(Debug, Error)]
pub enum PoolError {
    /// Backing file missing, unreadable, or not a valid list of profiles
    #[error("Failed to load user pool from '{path}': {reason}")]
    LoadError {
        /// File the pool was loaded from
        path: String,
        /// Underlying failure
        reason: String,
    },

    /// Writing the pool to disk failed; in-memory state is untouched
    #[error("Failed to persist user pool to '{path}': {reason}")]
    PersistenceError {
        /// File the pool was written to
        path: String,
        /// Underlying failure
        reason: String,
    },

    /// Generator configuration rejected
    #[error("Configuration validation failed: {0}")]
    ConfigurationError(String),
}

impl From<ConfigValidationError> for PoolError {
    fn from(error: ConfigValidationError) -> Self {
        PoolError::ConfigurationError(error.to_string())
    }
}

impl PoolError {
    /// Create a load error for `path`
    pub fn load_error(path: impl AsRef<Path>, reason: impl Display) -> Self {
        Self::LoadError { path: path.as_ref().display().to_string(), reason: reason.to_string() }
    }

    /// Create a persistence error for `path`
    pub fn persistence_error(path: impl AsRef<Path>, reason: impl Display) -> Self {
        Self::PersistenceError {
            path: path.as_ref().display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Whether the pool remains usable after this error
    pub fn is_recoverable(&self) -> bool {
        match self {
            PoolError::LoadError { .. } => false,
            PoolError::PersistenceError { .. } => true,
            PoolError::ConfigurationError(_) => false,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            PoolError::LoadError { .. } => "Load",
            PoolError::PersistenceError { .. } => "Persistence",
            PoolError::ConfigurationError(_) => "Configuration",
        }
    }
}

/// Result type for pool operations
pub type PoolResult<T> = Result<T, PoolError>;
