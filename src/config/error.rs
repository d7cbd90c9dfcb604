//! Configuration loading errors.

use thiserror::Error;

use crate::error::ConfigurationError;

/// Config load error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigLoadError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    /// File parsed but describes an invalid pipeline
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigurationError),
}
