//! Decision making over hazard grids.
//!
//! This module provides:
//! - Strategic planner: picks the most open column of the wide grid as a heading
//! - Reactive avoider: brake/slow/steer from the near-field grid
//! - Fallback analyzer: 3x3 block heuristic on raw depth, no grids involved
//!
//! All three are stateless; the same input always yields the same output.

mod fallback;
mod reactive;
mod strategic;

pub use fallback::{BandMeans, FallbackAnalyzer};
pub use reactive::{AVOID_YAW, DEFAULT_FRONT_ROWS, ReactiveAvoider, WARNING_SPEED};
pub use strategic::{DEPTH_WEIGHT, StrategicPlanner};
