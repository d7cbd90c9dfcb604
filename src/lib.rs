//! # Drishti: Depth-to-Decision Navigation
//!
//! Turns a per-pixel depth map into navigation decisions for a mobile
//! platform: a coarse heading plan and an immediate steer/brake command.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use drishti::{NavigationPipeline, PipelineConfig};
//! use drishti::source::{DepthEstimator, Scene, SyntheticDepth};
//!
//! let pipeline = NavigationPipeline::new(PipelineConfig::default())?;
//! let mut source = SyntheticDepth::new(Scene::ObstacleLeft);
//!
//! let depth = source.estimate(&0)?;
//! let out = pipeline.process(&depth);
//! println!(
//!     "yaw {:+.3} rad, speed x{:.1}, brake {}",
//!     out.plan.target_yaw_delta, out.command.forward_scale, out.command.emergency_brake
//! );
//! # Ok::<(), drishti::DrishtiError>(())
//! ```
//!
//! ## Conventions
//!
//! - **Depth**: larger = farther. Non-finite samples are invalid and skipped.
//! - **Image frame**: row 0 is the top of the image; the bottom rows are the
//!   near field for a forward-looking camera.
//! - **Yaw**: positive turns toward the left side of the image.
//!
//! ## Architecture
//!
//! - [`core`]: Data model (DepthMap, Roi, HazardState, ZoneGrid, plans)
//! - [`zones`]: Depth ROI to hazard grid classification
//! - [`planning`]: Strategic planner, reactive avoider, 3x3 fallback
//! - [`source`]: Depth estimator trait, synthetic scenes, preprocessing
//! - [`pipeline`]: Per-frame orchestration
//! - [`config`]: YAML configuration
//!
//! ## Data Flow
//!
//! ```text
//!                      ┌─────────────────┐
//!                      │  DepthEstimator │
//!                      └────────┬────────┘
//!                               │ estimate()
//!                               ▼
//!                      ┌─────────────────┐
//!                      │    DepthMap     │
//!                      │ (median filter) │
//!                      └────────┬────────┘
//!                               │
//!              ┌────────────────┴────────────────┐
//!              ▼                                 ▼
//!     ┌────────────────┐                ┌────────────────┐
//!     │   ZoneMapper   │                │   ZoneMapper   │
//!     │   strategic    │                │    reactive    │
//!     │ 24x32, wide    │                │ 12x16, near    │
//!     └───────┬────────┘                └───────┬────────┘
//!             ▼                                 ▼
//!     ┌────────────────┐                ┌────────────────┐
//!     │StrategicPlanner│                │ReactiveAvoider │
//!     └───────┬────────┘                └───────┬────────┘
//!             ▼                                 ▼
//!       StrategicPlan                    ReactiveCommand
//! ```
//!
//! Every component is immutable after construction and keeps no state
//! between frames.

pub mod config;
pub mod core;
pub mod error;
pub mod pipeline;
pub mod planning;
pub mod source;
pub mod zones;

// Re-export commonly used types at crate root
pub use config::{ConfigLoadError, DrishtiConfig};
pub use core::{
    DepthMap, HazardState, ReactiveCommand, Roi, StrategicPlan, ZoneCell, ZoneGrid,
};
pub use error::{ConfigurationError, DepthError, DrishtiError, Result};
pub use pipeline::{AnalysisMode, NavigationOutput, NavigationPipeline, PipelineConfig};
pub use planning::{FallbackAnalyzer, ReactiveAvoider, StrategicPlanner};
pub use source::DepthEstimator;
pub use zones::{ZoneMapper, ZoneMapperConfig};
