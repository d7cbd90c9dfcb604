//! Unified configuration loading for Drishti.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//! Every field is optional; anything left out keeps its built-in value.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use drishti::config::DrishtiConfig;
//!
//! // Load from default path (configs/drishti.yaml), or built-in defaults
//! let config = DrishtiConfig::load_default()?;
//!
//! // Validate and build the runtime pipeline
//! let pipeline = config.build_pipeline()?;
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`StrategicSection`] | Coarse wide-field zone grid |
//! | [`ReactiveSection`] | Fine near-field zone grid |
//! | [`PlannerSection`] | Camera field of view |
//! | [`AvoiderSection`] | Near-field rows |
//! | [`PreprocessingSection`] | Median filter, inverse-depth input |
//!
//! ## Example YAML
//!
//! ```yaml
//! strategic:
//!   grid_h: 24
//!   grid_w: 32
//!   warn_threshold: 0.35
//!   emergency_threshold: 0.20
//!   roi: { y0: 0.10, y1: 1.00, x0: 0.10, x1: 0.90 }
//!
//! reactive:
//!   emergency_threshold: 0.12
//!
//! planner:
//!   fov_horizontal_deg: 80.0
//!
//! preprocessing:
//!   median_kernel: 5
//!   inverse_depth: false
//!
//! mode: zoned   # or fallback
//! ```

mod defaults;
mod drishti;
mod error;
mod navigation;
mod zones;

// Re-export main types
pub use drishti::{DEFAULT_CONFIG_PATH, DrishtiConfig};
pub use error::ConfigLoadError;

// Re-export section types
pub use navigation::{AvoiderSection, PlannerSection, PreprocessingSection};
pub use zones::{ReactiveSection, StrategicSection};
