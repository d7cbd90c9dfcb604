//! Error types for Drishti.

use thiserror::Error;

use crate::config::ConfigLoadError;

/// Invalid component configuration, reported at construction time.
///
/// Components never clamp or repair a bad configuration: a violated
/// invariant would otherwise produce plausible but degenerate output.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("grid dimensions must be positive, got {grid_h}x{grid_w}")]
    InvalidGridSize { grid_h: usize, grid_w: usize },

    #[error("{name} must be finite and > 0, got {value}")]
    InvalidThreshold { name: &'static str, value: f32 },

    #[error("emergency threshold {emergency} must be below warn threshold {warn}")]
    ThresholdOrder { emergency: f32, warn: f32 },

    #[error("invalid ROI (y0={y0}, y1={y1}, x0={x0}, x1={x1}): {reason}")]
    InvalidRoi {
        y0: f64,
        y1: f64,
        x0: f64,
        x1: f64,
        reason: &'static str,
    },

    #[error("horizontal field of view must be finite and > 0 degrees, got {0}")]
    InvalidFov(f32),

    #[error("front_rows must be > 0")]
    InvalidFrontRows,

    #[error("median kernel must be odd and >= 1, got {0}")]
    InvalidMedianKernel(usize),
}

/// Malformed depth input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DepthError {
    #[error("depth buffer size mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("depth rows have inconsistent lengths (row {row} has {len}, expected {expected})")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// Drishti error type
#[derive(Error, Debug)]
pub enum DrishtiError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Depth error: {0}")]
    Depth(#[from] DepthError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigLoadError),

    #[error("Depth estimation failed: {0}")]
    Estimation(String),
}

pub type Result<T> = std::result::Result<T, DrishtiError>;
