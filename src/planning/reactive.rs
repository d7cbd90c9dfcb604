//! Near-field avoidance over the fine, narrow reactive grid.

use log::debug;

use crate::core::{HazardState, ReactiveCommand, ZoneGrid};
use crate::error::ConfigurationError;

/// Yaw magnitude (radians) applied when one side is more open.
pub const AVOID_YAW: f32 = 0.6;

/// Speed multiplier when the center window holds a warning cell.
pub const WARNING_SPEED: f32 = 0.3;

/// Default number of front rows.
pub const DEFAULT_FRONT_ROWS: usize = 4;

/// Turns the bottom rows of a hazard grid into a steer/speed command.
///
/// - Speed: any `Emergency` cell in the 3-column center window of the front
///   rows brakes; otherwise any `Warning` cell slows to 0.3.
/// - Steering: per-cell openness weights (1.0 / 0.3 / 0.0) are summed over
///   the whole front region, split at `grid_w / 2` (the split column counts
///   as right). The more open side wins a fixed ±0.6 rad turn.
///
/// Speed and steering are decided independently.
#[derive(Clone, Debug)]
pub struct ReactiveAvoider {
    front_rows: usize,
}

/// What the front region of a grid contains.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct FrontScan {
    has_emergency: bool,
    has_warning: bool,
    left_score: f32,
    right_score: f32,
}

impl ReactiveAvoider {
    /// Create an avoider looking at the bottom `front_rows` grid rows.
    pub fn new(front_rows: usize) -> Result<Self, ConfigurationError> {
        if front_rows == 0 {
            return Err(ConfigurationError::InvalidFrontRows);
        }
        Ok(Self { front_rows })
    }

    /// Number of front rows
    pub fn front_rows(&self) -> usize {
        self.front_rows
    }

    /// Compute the immediate command for a hazard grid.
    pub fn compute(&self, grid: &ZoneGrid) -> ReactiveCommand {
        let scan = self.scan(grid);

        let yaw_delta = if scan.left_score > scan.right_score {
            AVOID_YAW
        } else if scan.right_score > scan.left_score {
            -AVOID_YAW
        } else {
            0.0
        };

        let (forward_scale, emergency_brake) = if scan.has_emergency {
            (0.0, true)
        } else if scan.has_warning {
            (WARNING_SPEED, false)
        } else {
            (1.0, false)
        };

        debug!(
            "Reactive: left {:.1} / right {:.1}, emergency={}, warning={} -> yaw {:+.1}, speed {:.1}",
            scan.left_score,
            scan.right_score,
            scan.has_emergency,
            scan.has_warning,
            yaw_delta,
            forward_scale
        );

        ReactiveCommand {
            yaw_delta,
            forward_scale,
            emergency_brake,
        }
    }

    fn scan(&self, grid: &ZoneGrid) -> FrontScan {
        let gh = grid.grid_h();
        let gw = grid.grid_w();
        let front_start = gh.saturating_sub(self.front_rows);
        let center_col = gw / 2;
        let window = center_col.saturating_sub(1)..(center_col + 2).min(gw);

        let mut scan = FrontScan::default();
        for row in front_start..gh {
            for (col, cell) in grid.row(row).iter().enumerate() {
                if window.contains(&col) {
                    match cell.state {
                        HazardState::Emergency => scan.has_emergency = true,
                        HazardState::Warning => scan.has_warning = true,
                        HazardState::Free => {}
                    }
                }

                let weight = cell.state.steer_weight();
                if col < center_col {
                    scan.left_score += weight;
                } else {
                    scan.right_score += weight;
                }
            }
        }
        scan
    }
}

impl Default for ReactiveAvoider {
    fn default() -> Self {
        Self {
            front_rows: DEFAULT_FRONT_ROWS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HazardState::{Emergency as E, Free as F, Warning as W};

    fn grid(states: &[Vec<HazardState>]) -> ZoneGrid {
        ZoneGrid::from_states(states, 0.2, 5.0).unwrap()
    }

    #[test]
    fn test_rejects_zero_front_rows() {
        assert!(matches!(
            ReactiveAvoider::new(0),
            Err(ConfigurationError::InvalidFrontRows)
        ));
    }

    #[test]
    fn test_all_free_cruises() {
        let g = grid(&vec![vec![F; 4]; 3]);
        let cmd = ReactiveAvoider::new(2).unwrap().compute(&g);
        assert_eq!(cmd, ReactiveCommand::cruise());
    }

    #[test]
    fn test_all_emergency_front_brakes_straight() {
        let g = grid(&[vec![F; 6], vec![E; 6], vec![E; 6]]);
        let cmd = ReactiveAvoider::new(2).unwrap().compute(&g);
        assert!(cmd.emergency_brake);
        assert_eq!(cmd.forward_scale, 0.0);
        assert_eq!(cmd.yaw_delta, 0.0);
    }

    #[test]
    fn test_center_warning_slows() {
        // center_col = 2, window = cols 1..=3
        let g = grid(&[vec![F, F, F, F, F], vec![F, F, W, F, F]]);
        let cmd = ReactiveAvoider::new(1).unwrap().compute(&g);
        assert!(!cmd.emergency_brake);
        assert_eq!(cmd.forward_scale, WARNING_SPEED);
    }

    #[test]
    fn test_hazard_outside_window_keeps_speed() {
        let g = grid(&[vec![E, F, F, F, F, E]]);
        let cmd = ReactiveAvoider::new(1).unwrap().compute(&g);
        assert_eq!(cmd.forward_scale, 1.0);
        assert!(!cmd.emergency_brake);
        // Symmetric blockage
        assert_eq!(cmd.yaw_delta, 0.0);
    }

    #[test]
    fn test_hazard_above_front_rows_ignored() {
        let g = grid(&[vec![E; 4], vec![F; 4]]);
        let cmd = ReactiveAvoider::new(1).unwrap().compute(&g);
        assert_eq!(cmd, ReactiveCommand::cruise());
    }

    #[test]
    fn test_steers_toward_open_side() {
        // Right side blocked -> turn left (positive)
        let g = grid(&[vec![F, F, E, E]]);
        let cmd = ReactiveAvoider::new(1).unwrap().compute(&g);
        assert_eq!(cmd.yaw_delta, AVOID_YAW);

        // Left side warning only -> right is more open
        let g = grid(&[vec![W, W, F, F]]);
        let cmd = ReactiveAvoider::new(1).unwrap().compute(&g);
        assert_eq!(cmd.yaw_delta, -AVOID_YAW);
    }

    #[test]
    fn test_steer_and_brake_are_independent() {
        let g = grid(&[vec![F, F, E, W]]);
        let cmd = ReactiveAvoider::new(1).unwrap().compute(&g);
        assert!(cmd.emergency_brake);
        assert_eq!(cmd.yaw_delta, AVOID_YAW);
    }

    #[test]
    fn test_odd_width_center_counts_right() {
        // 3 columns: left = col 0, right = cols 1..=2
        let g = grid(&[vec![F, F, F]]);
        let cmd = ReactiveAvoider::new(1).unwrap().compute(&g);
        assert_eq!(cmd.yaw_delta, -AVOID_YAW);
    }

    #[test]
    fn test_front_rows_exceeding_grid() {
        let g = grid(&[vec![E, F], vec![F, F]]);
        let cmd = ReactiveAvoider::new(10).unwrap().compute(&g);
        // Whole grid is front; window covers both columns
        assert!(cmd.emergency_brake);
    }

    #[test]
    fn test_empty_grid() {
        let g = ZoneGrid::from_cells(0, 0, Vec::new(), f32::INFINITY, f32::INFINITY).unwrap();
        let cmd = ReactiveAvoider::default().compute(&g);
        assert_eq!(cmd, ReactiveCommand::cruise());
    }
}
