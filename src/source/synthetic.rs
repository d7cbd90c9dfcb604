//! Deterministic synthetic depth scenes for tests, demos and benchmarks.

use rand::prelude::*;

use super::DepthEstimator;
use crate::core::DepthMap;
use crate::error::{DrishtiError, Result};

/// Distance of open space in every scene.
pub const BACKGROUND_DEPTH: f32 = 5.0;

/// Reference frame size that scene geometry is laid out on.
const REF_WIDTH: usize = 640;
const REF_HEIGHT: usize = 480;

/// Synthetic scene layouts.
///
/// Geometry is defined on a 640x480 frame and scaled proportionally to
/// other sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scene {
    /// Nothing in view
    ClearPath,
    /// Wall at 0.5 covering the left 200/640 of the frame
    ObstacleLeft,
    /// Wall at 0.8 covering the right 200/640 of the frame
    ObstacleRight,
    /// Box at 0.3 in the middle of the frame
    ObstacleCenter,
    /// Walls at 0.5 on both sides, open lane in the middle
    Corridor,
    /// Everything at 0.1
    AllClose,
    /// Left half of the frame at 0.1
    LeftHalfBlocked,
}

impl Scene {
    pub const ALL: [Scene; 7] = [
        Scene::ClearPath,
        Scene::ObstacleLeft,
        Scene::ObstacleRight,
        Scene::ObstacleCenter,
        Scene::Corridor,
        Scene::AllClose,
        Scene::LeftHalfBlocked,
    ];

    /// Short name
    pub fn name(self) -> &'static str {
        match self {
            Scene::ClearPath => "clear_path",
            Scene::ObstacleLeft => "obstacle_left",
            Scene::ObstacleRight => "obstacle_right",
            Scene::ObstacleCenter => "obstacle_center",
            Scene::Corridor => "corridor",
            Scene::AllClose => "all_close",
            Scene::LeftHalfBlocked => "left_half_blocked",
        }
    }

    /// Render the noise-free scene.
    pub fn render(self, width: usize, height: usize) -> DepthMap {
        let sx = |px: usize| width * px / REF_WIDTH;
        let sy = |px: usize| height * px / REF_HEIGHT;

        let mut depth = DepthMap::filled(width, height, BACKGROUND_DEPTH);
        match self {
            Scene::ClearPath => {}
            Scene::ObstacleLeft => depth.fill_rect(0, height, 0, sx(200), 0.5),
            Scene::ObstacleRight => depth.fill_rect(0, height, sx(440), width, 0.8),
            Scene::ObstacleCenter => depth.fill_rect(sy(200), sy(280), sx(270), sx(370), 0.3),
            Scene::Corridor => {
                depth.fill_rect(0, height, 0, sx(100), 0.5);
                depth.fill_rect(0, height, sx(540), width, 0.5);
            }
            Scene::AllClose => depth.fill_rect(0, height, 0, width, 0.1),
            Scene::LeftHalfBlocked => depth.fill_rect(0, height, 0, width / 2, 0.1),
        }
        depth
    }
}

/// [`DepthEstimator`] that renders a fixed [`Scene`] for every frame index.
///
/// Optional per-pixel noise and invalid-pixel dropout are seeded from
/// `seed ^ frame`, so the same frame index always yields the same map.
#[derive(Clone, Debug)]
pub struct SyntheticDepth {
    scene: Scene,
    width: usize,
    height: usize,
    noise: f32,
    dropout: f32,
    seed: u64,
}

impl SyntheticDepth {
    /// 640x480 noise-free source.
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            width: REF_WIDTH,
            height: REF_HEIGHT,
            noise: 0.0,
            dropout: 0.0,
            seed: 0,
        }
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Uniform additive noise in `[-amplitude, amplitude]`; results are
    /// clamped at zero.
    pub fn with_noise(mut self, amplitude: f32) -> Self {
        self.noise = amplitude;
        self
    }

    /// Fraction of pixels replaced by `NaN`.
    pub fn with_dropout(mut self, rate: f32) -> Self {
        self.dropout = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    fn check(&self) -> Result<()> {
        if !self.noise.is_finite() || self.noise < 0.0 {
            return Err(DrishtiError::Estimation(format!(
                "noise amplitude must be finite and >= 0, got {}",
                self.noise
            )));
        }
        if !(0.0..=1.0).contains(&self.dropout) {
            return Err(DrishtiError::Estimation(format!(
                "dropout rate must be in [0, 1], got {}",
                self.dropout
            )));
        }
        Ok(())
    }
}

impl DepthEstimator for SyntheticDepth {
    type Frame = u64;

    fn estimate(&mut self, frame: &u64) -> Result<DepthMap> {
        self.check()?;

        let mut depth = self.scene.render(self.width, self.height);
        if self.noise == 0.0 && self.dropout == 0.0 {
            return Ok(depth);
        }

        let mut rng = StdRng::seed_from_u64(self.seed ^ frame);
        for d in depth.data_mut() {
            if self.dropout > 0.0 && rng.random::<f32>() < self.dropout {
                *d = f32::NAN;
            } else if self.noise > 0.0 {
                *d = (*d + rng.random_range(-self.noise..=self.noise)).max(0.0);
            }
        }
        Ok(depth)
    }
}
