//! Planner, avoider and preprocessing sections.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Strategic planner section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannerSection {
    /// Camera horizontal field of view (degrees)
    #[serde(default = "defaults::fov_horizontal_deg")]
    pub fov_horizontal_deg: f32,
}

impl Default for PlannerSection {
    fn default() -> Self {
        Self {
            fov_horizontal_deg: defaults::fov_horizontal_deg(),
        }
    }
}

/// Reactive avoider section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AvoiderSection {
    /// Bottom grid rows treated as the near field
    #[serde(default = "defaults::front_rows")]
    pub front_rows: usize,
}

impl Default for AvoiderSection {
    fn default() -> Self {
        Self {
            front_rows: defaults::front_rows(),
        }
    }
}

/// Depth preprocessing section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreprocessingSection {
    /// Apply a median filter before mapping
    #[serde(default = "defaults::enabled")]
    pub median_enabled: bool,

    /// Median kernel size (odd)
    #[serde(default = "defaults::median_kernel")]
    pub median_kernel: usize,

    /// Depth source emits relative inverse depth (larger = nearer)
    #[serde(default)]
    pub inverse_depth: bool,
}

impl Default for PreprocessingSection {
    fn default() -> Self {
        Self {
            median_enabled: true,
            median_kernel: defaults::median_kernel(),
            inverse_depth: false,
        }
    }
}

impl PreprocessingSection {
    /// Median kernel if filtering is enabled
    pub fn median(&self) -> Option<usize> {
        self.median_enabled.then_some(self.median_kernel)
    }
}
