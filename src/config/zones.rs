//! Zone mapper sections.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::core::Roi;
use crate::zones::ZoneMapperConfig;

/// Strategic (coarse, wide-field) mapper section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrategicSection {
    #[serde(default = "defaults::strategic_grid_h")]
    pub grid_h: usize,

    #[serde(default = "defaults::strategic_grid_w")]
    pub grid_w: usize,

    #[serde(default = "defaults::strategic_warn")]
    pub warn_threshold: f32,

    #[serde(default = "defaults::strategic_emergency")]
    pub emergency_threshold: f32,

    /// Normalized `{ y0, y1, x0, x1 }`
    #[serde(default = "defaults::strategic_roi")]
    pub roi: Roi,
}

impl Default for StrategicSection {
    fn default() -> Self {
        Self {
            grid_h: defaults::strategic_grid_h(),
            grid_w: defaults::strategic_grid_w(),
            warn_threshold: defaults::strategic_warn(),
            emergency_threshold: defaults::strategic_emergency(),
            roi: defaults::strategic_roi(),
        }
    }
}

impl StrategicSection {
    pub fn to_mapper_config(&self) -> ZoneMapperConfig {
        ZoneMapperConfig {
            grid_h: self.grid_h,
            grid_w: self.grid_w,
            warn_threshold: self.warn_threshold,
            emergency_threshold: self.emergency_threshold,
            roi: self.roi,
        }
    }
}

/// Reactive (fine, near-field) mapper section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReactiveSection {
    #[serde(default = "defaults::reactive_grid_h")]
    pub grid_h: usize,

    #[serde(default = "defaults::reactive_grid_w")]
    pub grid_w: usize,

    #[serde(default = "defaults::reactive_warn")]
    pub warn_threshold: f32,

    #[serde(default = "defaults::reactive_emergency")]
    pub emergency_threshold: f32,

    #[serde(default = "defaults::reactive_roi")]
    pub roi: Roi,
}

impl Default for ReactiveSection {
    fn default() -> Self {
        Self {
            grid_h: defaults::reactive_grid_h(),
            grid_w: defaults::reactive_grid_w(),
            warn_threshold: defaults::reactive_warn(),
            emergency_threshold: defaults::reactive_emergency(),
            roi: defaults::reactive_roi(),
        }
    }
}

impl ReactiveSection {
    pub fn to_mapper_config(&self) -> ZoneMapperConfig {
        ZoneMapperConfig {
            grid_h: self.grid_h,
            grid_w: self.grid_w,
            warn_threshold: self.warn_threshold,
            emergency_threshold: self.emergency_threshold,
            roi: self.roi,
        }
    }
}
