//! Column-scoring heading planner over the coarse, wide-field grid.

use log::{debug, trace};

use crate::core::{HazardState, StrategicPlan, ZoneGrid};
use crate::error::ConfigurationError;

/// Weight of a column's average near-distance relative to its free-cell count.
pub const DEPTH_WEIGHT: f32 = 0.5;

/// Picks the most open grid column and turns it into a heading.
///
/// Column score = `free_count + 0.5 * avg_depth`, where `avg_depth` is the
/// mean of the column's finite `min_depth` values. Open cells dominate;
/// depth only separates columns with equal free counts.
#[derive(Clone, Debug)]
pub struct StrategicPlanner {
    fov_horizontal_deg: f32,
    half_fov_rad: f32,
}

/// Per-column aggregate.
#[derive(Clone, Copy, Debug)]
struct ColumnScore {
    score: f32,
    nearest: f32,
}

impl StrategicPlanner {
    /// Create a planner for a camera with the given horizontal field of view.
    pub fn new(fov_horizontal_deg: f32) -> Result<Self, ConfigurationError> {
        if !fov_horizontal_deg.is_finite() || fov_horizontal_deg <= 0.0 {
            return Err(ConfigurationError::InvalidFov(fov_horizontal_deg));
        }
        Ok(Self {
            fov_horizontal_deg,
            half_fov_rad: fov_horizontal_deg.to_radians() / 2.0,
        })
    }

    /// Horizontal field of view in degrees
    pub fn fov_horizontal_deg(&self) -> f32 {
        self.fov_horizontal_deg
    }

    /// Plan a heading from a hazard grid.
    ///
    /// Ties between equal column scores go to the lowest column index.
    /// A column right of center yields a negative yaw delta.
    pub fn plan(&self, grid: &ZoneGrid) -> StrategicPlan {
        let gh = grid.grid_h();
        let gw = grid.grid_w();
        if gh == 0 || gw == 0 {
            return StrategicPlan::straight_ahead();
        }

        let mut best: Option<(usize, ColumnScore)> = None;
        for col in 0..gw {
            let candidate = score_column(grid, col);
            trace!(
                "col {:2}: score {:.3}, nearest {:.3}",
                col, candidate.score, candidate.nearest
            );
            if best.is_none_or(|(_, b)| candidate.score > b.score) {
                best = Some((col, candidate));
            }
        }
        let Some((best_col, best)) = best else {
            return StrategicPlan::straight_ahead();
        };

        let center = (gw - 1) as f32 / 2.0;
        let normalized_offset = if center > 0.0 {
            (best_col as f32 - center) / center
        } else {
            0.0
        };

        let plan = StrategicPlan {
            target_yaw_delta: -normalized_offset * self.half_fov_rad,
            confidence: best.score / (gh as f32 + 0.5),
            min_distance_ahead: best.nearest,
        };

        debug!(
            "Strategic: col {}/{} score {:.2} -> yaw {:+.3} rad, confidence {:.3}, ahead {:.2}",
            best_col, gw, best.score, plan.target_yaw_delta, plan.confidence, plan.min_distance_ahead
        );

        plan
    }
}

impl Default for StrategicPlanner {
    /// 80 degree horizontal field of view.
    fn default() -> Self {
        Self {
            fov_horizontal_deg: 80.0,
            half_fov_rad: 80.0f32.to_radians() / 2.0,
        }
    }
}

fn score_column(grid: &ZoneGrid, col: usize) -> ColumnScore {
    let mut free_count = 0usize;
    let mut depth_sum = 0.0f64;
    let mut depth_count = 0usize;
    let mut nearest = f32::INFINITY;

    for cell in grid.column(col) {
        if cell.state == HazardState::Free {
            free_count += 1;
        }
        if cell.min_depth.is_finite() {
            depth_sum += f64::from(cell.min_depth);
            depth_count += 1;
            nearest = nearest.min(cell.min_depth);
        }
    }

    let avg_depth = if depth_count > 0 {
        (depth_sum / depth_count as f64) as f32
    } else {
        0.0
    };

    ColumnScore {
        score: free_count as f32 + DEPTH_WEIGHT * avg_depth,
        nearest,
    }
}
