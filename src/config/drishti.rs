//! Main DrishtiConfig and conversion methods.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use super::error::ConfigLoadError;
use super::navigation::{AvoiderSection, PlannerSection, PreprocessingSection};
use super::zones::{ReactiveSection, StrategicSection};
use crate::pipeline::{AnalysisMode, NavigationPipeline, PipelineConfig};

/// Default config file location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "configs/drishti.yaml";

/// Full Drishti configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct DrishtiConfig {
    /// Coarse wide-field zone mapper
    #[serde(default)]
    pub strategic: StrategicSection,

    /// Fine near-field zone mapper
    #[serde(default)]
    pub reactive: ReactiveSection,

    #[serde(default)]
    pub planner: PlannerSection,

    #[serde(default)]
    pub avoider: AvoiderSection,

    #[serde(default)]
    pub preprocessing: PreprocessingSection,

    /// `zoned` or `fallback`
    #[serde(default)]
    pub mode: AnalysisMode,
}

impl DrishtiConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        let config = Self::from_yaml(&contents)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from default config path (configs/drishti.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            info!("{} not found, using built-in defaults", DEFAULT_CONFIG_PATH);
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Convert to the (unvalidated) runtime pipeline config
    pub fn to_pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            strategic: self.strategic.to_mapper_config(),
            reactive: self.reactive.to_mapper_config(),
            fov_horizontal_deg: self.planner.fov_horizontal_deg,
            front_rows: self.avoider.front_rows,
            median_kernel: self.preprocessing.median(),
            inverse_depth: self.preprocessing.inverse_depth,
            mode: self.mode,
        }
    }

    /// Validate and build the pipeline
    pub fn build_pipeline(&self) -> Result<NavigationPipeline, ConfigLoadError> {
        Ok(NavigationPipeline::new(self.to_pipeline_config())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationError;

    #[test]
    fn test_default_config() {
        let config = DrishtiConfig::default();
        assert_eq!(config.strategic.grid_h, 24);
        assert_eq!(config.reactive.grid_w, 16);
        assert_eq!(config.planner.fov_horizontal_deg, 80.0);
        assert_eq!(config.avoider.front_rows, 4);
        assert_eq!(config.preprocessing.median(), Some(5));
        assert_eq!(config.to_pipeline_config(), PipelineConfig::default());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = DrishtiConfig::default();
        let yaml = config.to_yaml().unwrap();
        let parsed = DrishtiConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
reactive:
  emergency_threshold: 0.1
avoider:
  front_rows: 3
mode: fallback
"#;
        let config = DrishtiConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.reactive.emergency_threshold, 0.1);
        assert_eq!(config.reactive.warn_threshold, 0.25);
        assert_eq!(config.reactive.grid_h, 12);
        assert_eq!(config.strategic, StrategicSection::default());
        assert_eq!(config.avoider.front_rows, 3);
        assert_eq!(config.mode, AnalysisMode::Fallback);
    }

    #[test]
    fn test_parse_error() {
        let err = DrishtiConfig::from_yaml("strategic: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }

    #[test]
    fn test_build_pipeline_validates() {
        let yaml = r#"
strategic:
  warn_threshold: 0.1
  emergency_threshold: 0.2
"#;
        let config = DrishtiConfig::from_yaml(yaml).unwrap();
        let err = config.build_pipeline().unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Invalid(ConfigurationError::ThresholdOrder { .. })
        ));
    }

    #[test]
    fn test_roi_section() {
        let yaml = r#"
strategic:
  roi: { y0: 0.2, y1: 0.8, x0: 0.0, x1: 1.0 }
"#;
        let config = DrishtiConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.strategic.roi.y0, 0.2);
        assert!(config.build_pipeline().is_ok());
    }
}
