//! Test utilities for Drishti integration tests.

#![allow(dead_code)]

use drishti::core::{DepthMap, HazardState, ZoneGrid};
use drishti::{NavigationPipeline, PipelineConfig};

/// Reference camera frame size.
pub const WIDTH: usize = 640;
pub const HEIGHT: usize = 480;

/// Initialize logging once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Uniform depth map at the reference size.
pub fn uniform(value: f32) -> DepthMap {
    DepthMap::filled(WIDTH, HEIGHT, value)
}

/// Default pipeline without preprocessing, so inputs reach the mappers unchanged.
pub fn raw_pipeline() -> NavigationPipeline {
    let config = PipelineConfig {
        median_kernel: None,
        ..PipelineConfig::default()
    };
    NavigationPipeline::new(config).expect("default config is valid")
}

/// Build a grid from a compact state picture, one string per row:
/// `.` free, `w` warning, `E` emergency.
pub fn grid_from_picture(rows: &[&str]) -> ZoneGrid {
    let states: Vec<Vec<HazardState>> = rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| match c {
                    'E' => HazardState::Emergency,
                    'w' => HazardState::Warning,
                    _ => HazardState::Free,
                })
                .collect()
        })
        .collect();
    ZoneGrid::from_states(&states, 0.2, 5.0).expect("rectangular picture")
}

/// Column indices whose cells are all in `state`.
pub fn columns_all(grid: &ZoneGrid, state: HazardState) -> Vec<usize> {
    (0..grid.grid_w())
        .filter(|&col| grid.column(col).all(|c| c.state == state))
        .collect()
}
