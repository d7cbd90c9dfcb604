//! Coarse 3x3 block analysis used when zone mapping is disabled.
//!
//! Only the middle band of the image is inspected: the mean depths of its
//! left, center and right thirds decide a fixed turn and a speed.

use log::debug;

use crate::core::{DepthMap, PixelRect, ReactiveCommand, StrategicPlan};

/// Strategic yaw magnitude toward the deeper side.
pub const FALLBACK_YAW: f32 = 0.3;

/// Reactive yaw = strategic yaw times this gain.
pub const REACTIVE_GAIN: f32 = 1.5;

/// Constant confidence reported by the fallback plan.
pub const FALLBACK_CONFIDENCE: f32 = 0.5;

/// Center mean above which full speed is allowed.
pub const CLEAR_DEPTH: f32 = 1.0;

/// Center mean below which the brake is applied.
pub const BRAKE_DEPTH: f32 = 0.5;

/// Middle-band means of a 3x3 block split.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandMeans {
    pub left: f32,
    pub center: f32,
    pub right: f32,
}

/// Stateless 3x3 fallback analyzer.
#[derive(Clone, Copy, Debug, Default)]
pub struct FallbackAnalyzer;

impl FallbackAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Mean of the finite samples in each middle-band block (`NaN` if a
    /// block has none).
    pub fn band_means(&self, depth: &DepthMap) -> BandMeans {
        let cell_h = depth.height() / 3;
        let cell_w = depth.width() / 3;
        let block = |col: usize| PixelRect {
            y0: cell_h,
            y1: 2 * cell_h,
            x0: col * cell_w,
            x1: (col + 1) * cell_w,
        };
        BandMeans {
            left: finite_mean(depth, &block(0)),
            center: finite_mean(depth, &block(1)),
            right: finite_mean(depth, &block(2)),
        }
    }

    /// Produce a heading plan and an immediate command from raw depth.
    ///
    /// Turns `+0.3` rad unless the left third is strictly deeper, in which
    /// case it turns `-0.3` rad; the reactive yaw is 1.5 times that.
    pub fn analyze(&self, depth: &DepthMap) -> (StrategicPlan, ReactiveCommand) {
        let means = self.band_means(depth);

        let strategic_yaw = if means.left > means.right {
            -FALLBACK_YAW
        } else {
            FALLBACK_YAW
        };

        let center_finite = means.center.is_finite();
        let plan = StrategicPlan {
            target_yaw_delta: strategic_yaw,
            confidence: FALLBACK_CONFIDENCE,
            min_distance_ahead: if center_finite {
                means.center
            } else {
                f32::INFINITY
            },
        };
        let command = ReactiveCommand {
            yaw_delta: strategic_yaw * REACTIVE_GAIN,
            forward_scale: if means.center > CLEAR_DEPTH { 1.0 } else { 0.3 },
            emergency_brake: center_finite && means.center < BRAKE_DEPTH,
        };

        debug!(
            "Fallback: left {:.2} center {:.2} right {:.2} -> yaw {:+.2}, speed {:.1}, brake {}",
            means.left, means.center, means.right, plan.target_yaw_delta, command.forward_scale,
            command.emergency_brake
        );

        (plan, command)
    }
}

fn finite_mean(depth: &DepthMap, rect: &PixelRect) -> f32 {
    let mut sum = 0.0f64;
    let mut count = 0usize;
    for y in rect.y0..rect.y1 {
        for &d in &depth.row(y)[rect.x0..rect.x1] {
            if d.is_finite() {
                sum += f64::from(d);
                count += 1;
            }
        }
    }
    if count == 0 {
        f32::NAN
    } else {
        (sum / count as f64) as f32
    }
}
