//! Planner outputs.

use serde::Serialize;

/// Global heading plan from the strategic planner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StrategicPlan {
    /// Signed heading correction in radians (positive = toward the left of the image)
    pub target_yaw_delta: f32,
    /// Unnormalized score of the chosen column; not a probability
    pub confidence: f32,
    /// Nearest finite cell distance in the chosen column (`+inf` if undefined)
    pub min_distance_ahead: f32,
}

impl StrategicPlan {
    /// Plan used when there is nothing to choose from.
    pub fn straight_ahead() -> Self {
        Self {
            target_yaw_delta: 0.0,
            confidence: 0.0,
            min_distance_ahead: f32::INFINITY,
        }
    }
}

/// Immediate steering/speed command from the reactive avoider.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ReactiveCommand {
    /// Heading correction in radians
    pub yaw_delta: f32,
    /// Recommended speed multiplier in `[0, 1]`
    pub forward_scale: f32,
    pub emergency_brake: bool,
}

impl ReactiveCommand {
    /// Keep going straight at full speed.
    pub fn cruise() -> Self {
        Self {
            yaw_delta: 0.0,
            forward_scale: 1.0,
            emergency_brake: false,
        }
    }

    /// Full stop, heading unchanged.
    pub fn brake() -> Self {
        Self {
            yaw_delta: 0.0,
            forward_scale: 0.0,
            emergency_brake: true,
        }
    }
}
