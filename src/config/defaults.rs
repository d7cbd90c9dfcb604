//! Default value functions for serde deserialization.

use crate::core::Roi;

pub fn strategic_grid_h() -> usize {
    24
}

pub fn strategic_grid_w() -> usize {
    32
}

pub fn strategic_warn() -> f32 {
    0.35
}

pub fn strategic_emergency() -> f32 {
    0.20
}

pub fn strategic_roi() -> Roi {
    Roi::new(0.10, 1.00, 0.10, 0.90)
}

pub fn reactive_grid_h() -> usize {
    12
}

pub fn reactive_grid_w() -> usize {
    16
}

pub fn reactive_warn() -> f32 {
    0.25
}

pub fn reactive_emergency() -> f32 {
    0.12
}

pub fn reactive_roi() -> Roi {
    Roi::new(0.50, 1.00, 0.25, 0.75)
}

pub fn fov_horizontal_deg() -> f32 {
    80.0
}

pub fn front_rows() -> usize {
    4
}

pub fn median_kernel() -> usize {
    5
}

pub fn enabled() -> bool {
    true
}
