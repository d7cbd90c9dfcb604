//! YAML configuration loading.

mod common;

use std::io::Write;

use drishti::config::{ConfigLoadError, DrishtiConfig};
use drishti::{AnalysisMode, ConfigurationError};
use tempfile::NamedTempFile;

fn write_yaml(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    common::init_logging();
    let file = write_yaml(
        r#"
strategic:
  grid_h: 12
  grid_w: 16
planner:
  fov_horizontal_deg: 90.0
preprocessing:
  median_enabled: false
"#,
    );
    let config = DrishtiConfig::load(file.path()).unwrap();
    assert_eq!(config.strategic.grid_h, 12);
    assert_eq!(config.strategic.warn_threshold, 0.35);
    assert_eq!(config.planner.fov_horizontal_deg, 90.0);
    assert_eq!(config.preprocessing.median(), None);

    let pipeline = config.build_pipeline().unwrap();
    assert_eq!(pipeline.strategic_mapper().config().grid_w, 16);
    assert_eq!(pipeline.mode(), AnalysisMode::Zoned);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = DrishtiConfig::load(std::path::Path::new("does/not/exist.yaml")).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Io(_)));
}

#[test]
fn test_invalid_values_fail_at_build() {
    let file = write_yaml("avoider:\n  front_rows: 0\n");
    let config = DrishtiConfig::load(file.path()).unwrap();
    assert!(matches!(
        config.build_pipeline(),
        Err(ConfigLoadError::Invalid(ConfigurationError::InvalidFrontRows))
    ));

    let config = DrishtiConfig::from_yaml("preprocessing:\n  median_kernel: 4\n").unwrap();
    assert!(matches!(
        config.build_pipeline(),
        Err(ConfigLoadError::Invalid(ConfigurationError::InvalidMedianKernel(4)))
    ));
}

#[test]
fn test_shipped_config_matches_defaults() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("configs/drishti.yaml");
    let config = DrishtiConfig::load(&path).unwrap();
    assert_eq!(config, DrishtiConfig::default());
}

#[test]
fn test_error_converts_to_crate_error() {
    let err: drishti::DrishtiError = DrishtiConfig::from_yaml("mode: sideways").unwrap_err().into();
    assert!(matches!(err, drishti::DrishtiError::Config(ConfigLoadError::Parse(_))));
}
