//! Depth map to hazard grid classification.

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use super::stats::cell_stats;
use crate::core::{DepthMap, HazardState, PixelRect, Roi, ZoneCell, ZoneGrid};
use crate::error::ConfigurationError;

/// Zone mapper configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneMapperConfig {
    /// Grid rows
    pub grid_h: usize,
    /// Grid columns
    pub grid_w: usize,
    /// Cells nearer than this are at least `Warning`
    pub warn_threshold: f32,
    /// Cells nearer than this are `Emergency` (must be below `warn_threshold`)
    pub emergency_threshold: f32,
    /// Analyzed region
    pub roi: Roi,
}

impl ZoneMapperConfig {
    /// Coarse, wide-field grid for heading planning.
    ///
    /// 24x32 cells over almost the whole image (top 10% and 10% side margins
    /// dropped), warn at 0.35, emergency at 0.20.
    pub fn strategic() -> Self {
        Self {
            grid_h: 24,
            grid_w: 32,
            warn_threshold: 0.35,
            emergency_threshold: 0.20,
            roi: Roi::new(0.10, 1.00, 0.10, 0.90),
        }
    }

    /// Fine, near-field grid for immediate avoidance.
    ///
    /// 12x16 cells over the lower-central quarter, warn at 0.25,
    /// emergency at 0.12.
    pub fn reactive() -> Self {
        Self {
            grid_h: 12,
            grid_w: 16,
            warn_threshold: 0.25,
            emergency_threshold: 0.12,
            roi: Roi::new(0.50, 1.00, 0.25, 0.75),
        }
    }

    /// Check every invariant; nothing is clamped.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.grid_h == 0 || self.grid_w == 0 {
            return Err(ConfigurationError::InvalidGridSize {
                grid_h: self.grid_h,
                grid_w: self.grid_w,
            });
        }
        for (name, value) in [
            ("warn_threshold", self.warn_threshold),
            ("emergency_threshold", self.emergency_threshold),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigurationError::InvalidThreshold { name, value });
            }
        }
        if self.emergency_threshold >= self.warn_threshold {
            return Err(ConfigurationError::ThresholdOrder {
                emergency: self.emergency_threshold,
                warn: self.warn_threshold,
            });
        }
        self.roi.validate()
    }
}

impl Default for ZoneMapperConfig {
    fn default() -> Self {
        Self::strategic()
    }
}

/// Classifies a depth map ROI into a [`ZoneGrid`].
///
/// The mapper holds only its immutable configuration, so one instance can be
/// shared across threads and frames.
#[derive(Clone, Debug)]
pub struct ZoneMapper {
    config: ZoneMapperConfig,
}

impl ZoneMapper {
    /// Create a mapper, validating the configuration.
    pub fn new(config: ZoneMapperConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration
    pub fn config(&self) -> &ZoneMapperConfig {
        &self.config
    }

    /// Classify `depth` into a `grid_h x grid_w` hazard grid.
    ///
    /// The ROI is split into equal cells of `floor(size / count)` pixels; the
    /// last row and column absorb the remainder. Cells without finite samples
    /// are reported as `Free` with infinite depths.
    pub fn map(&self, depth: &DepthMap) -> ZoneGrid {
        let ZoneMapperConfig {
            grid_h,
            grid_w,
            warn_threshold,
            emergency_threshold,
            roi,
        } = self.config;

        let rect = roi.pixel_bounds(depth.height(), depth.width());
        if rect.is_empty() {
            warn!(
                "ROI {:?} is empty on a {}x{} depth map; all cells default to free",
                roi,
                depth.width(),
                depth.height()
            );
        }

        let range = region_range(depth, &rect);
        if range.is_none() && !rect.is_empty() {
            warn!(
                "No finite depth in {}x{} ROI; all cells default to free",
                rect.width(),
                rect.height()
            );
        }
        let (depth_min, depth_max) = range.unwrap_or((f32::INFINITY, f32::INFINITY));

        let mut cells = Vec::with_capacity(grid_h * grid_w);
        let mut samples = Vec::new();
        let mut empty_cells = 0usize;

        for row in 0..grid_h {
            let (yy0, yy1) = cell_span(rect.y0, rect.height(), grid_h, row);
            for col in 0..grid_w {
                let (xx0, xx1) = cell_span(rect.x0, rect.width(), grid_w, col);

                samples.clear();
                for y in yy0..yy1 {
                    samples.extend_from_slice(&depth.row(y)[xx0..xx1]);
                }

                let cell = match cell_stats(&mut samples) {
                    Some(stats) => ZoneCell {
                        row,
                        col,
                        min_depth: stats.near,
                        mean_depth: stats.mean,
                        state: HazardState::classify(
                            stats.near,
                            warn_threshold,
                            emergency_threshold,
                        ),
                    },
                    None => {
                        empty_cells += 1;
                        ZoneCell::empty(row, col)
                    }
                };
                cells.push(cell);
            }
        }

        if empty_cells > 0 && !rect.is_empty() {
            trace!(
                "{} of {} cells have no finite samples ({}x{} ROI, {}x{} grid)",
                empty_cells,
                grid_h * grid_w,
                rect.width(),
                rect.height(),
                grid_w,
                grid_h
            );
        }

        ZoneGrid::from_row_major(grid_h, grid_w, cells, depth_min, depth_max)
    }
}

/// Pixel span `[start, end)` of cell `idx` when `len` pixels starting at
/// `origin` are split into `count` cells.
#[inline]
fn cell_span(origin: usize, len: usize, count: usize, idx: usize) -> (usize, usize) {
    let step = len / count;
    let start = origin + idx * step;
    let end = if idx + 1 < count {
        origin + (idx + 1) * step
    } else {
        origin + len
    };
    (start, end)
}

/// Finite min/max over a pixel rectangle.
fn region_range(depth: &DepthMap, rect: &PixelRect) -> Option<(f32, f32)> {
    crate::core::depth::finite_range(
        (rect.y0..rect.y1).flat_map(|y| depth.row(y)[rect.x0..rect.x1].iter().copied()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(grid_h: usize, grid_w: usize) -> ZoneMapperConfig {
        ZoneMapperConfig {
            grid_h,
            grid_w,
            warn_threshold: 0.35,
            emergency_threshold: 0.20,
            roi: Roi::FULL,
        }
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        let mut config = small_config(0, 4);
        assert!(matches!(
            ZoneMapper::new(config.clone()),
            Err(ConfigurationError::InvalidGridSize { .. })
        ));

        config = small_config(4, 4);
        config.emergency_threshold = 0.35;
        assert!(matches!(
            ZoneMapper::new(config.clone()),
            Err(ConfigurationError::ThresholdOrder { .. })
        ));

        config = small_config(4, 4);
        config.warn_threshold = -1.0;
        assert!(matches!(
            ZoneMapper::new(config.clone()),
            Err(ConfigurationError::InvalidThreshold { name: "warn_threshold", .. })
        ));

        config = small_config(4, 4);
        config.roi = Roi::new(0.6, 0.4, 0.0, 1.0);
        assert!(matches!(
            ZoneMapper::new(config),
            Err(ConfigurationError::InvalidRoi { .. })
        ));
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(ZoneMapperConfig::strategic().validate().is_ok());
        assert!(ZoneMapperConfig::reactive().validate().is_ok());
    }

    #[test]
    fn test_cell_span_remainder_goes_last() {
        // 10 pixels into 3 cells: 3, 3, 4
        assert_eq!(cell_span(0, 10, 3, 0), (0, 3));
        assert_eq!(cell_span(0, 10, 3, 1), (3, 6));
        assert_eq!(cell_span(0, 10, 3, 2), (6, 10));
        // Offset origin
        assert_eq!(cell_span(5, 10, 3, 2), (11, 15));
        // Fewer pixels than cells: only the last cell has pixels
        assert_eq!(cell_span(0, 2, 4, 0), (0, 0));
        assert_eq!(cell_span(0, 2, 4, 3), (0, 2));
    }

    #[test]
    fn test_cells_cover_roi_exactly() {
        let width = 23;
        let height = 17;
        for grid_w in 1..8 {
            let covered: usize = (0..grid_w)
                .map(|c| {
                    let (a, b) = cell_span(0, width, grid_w, c);
                    b - a
                })
                .sum();
            assert_eq!(covered, width);
        }
        for grid_h in 1..8 {
            let covered: usize = (0..grid_h)
                .map(|r| {
                    let (a, b) = cell_span(0, height, grid_h, r);
                    b - a
                })
                .sum();
            assert_eq!(covered, height);
        }
    }

    #[test]
    fn test_map_classifies_regions() {
        // Left half emergency, right half warning
        let depth = DepthMap::from_fn(8, 4, |x, _| if x < 4 { 0.1 } else { 0.3 });
        let mapper = ZoneMapper::new(small_config(2, 2)).unwrap();
        let grid = mapper.map(&depth);

        assert_eq!(grid.state(0, 0), Some(HazardState::Emergency));
        assert_eq!(grid.state(1, 0), Some(HazardState::Emergency));
        assert_eq!(grid.state(0, 1), Some(HazardState::Warning));
        assert_eq!(grid.state(1, 1), Some(HazardState::Warning));
        assert_eq!(grid.depth_min, 0.1);
        assert_eq!(grid.depth_max, 0.3);
    }

    #[test]
    fn test_roi_smaller_than_grid() {
        // 2x2 pixels into a 4x4 grid: only the last row/column hold pixels
        let depth = DepthMap::filled(2, 2, 0.1);
        let mapper = ZoneMapper::new(small_config(4, 4)).unwrap();
        let grid = mapper.map(&depth);

        assert_eq!(grid.cells().len(), 16);
        let last = grid.cell(3, 3).unwrap();
        assert_eq!(last.state, HazardState::Emergency);
        let first = grid.cell(0, 0).unwrap();
        assert_eq!(first.state, HazardState::Free);
        assert!(first.min_depth.is_infinite());
        assert!(first.mean_depth.is_infinite());
    }

    #[test]
    fn test_roi_edge_keeps_boundary_pixel() {
        // x0 = floor(0.35 * 360) = 125, so the near pixel at x = 125 is inside
        let mut depth = DepthMap::filled(360, 10, 5.0);
        depth.set(125, 0, 0.01);
        let config = ZoneMapperConfig {
            roi: Roi::new(0.0, 1.0, 0.35, 1.0),
            ..small_config(1, 1)
        };
        let grid = ZoneMapper::new(config).unwrap().map(&depth);
        assert_eq!(grid.depth_min, 0.01);
        assert_eq!(grid.depth_max, 5.0);
    }

    #[test]
    fn test_empty_depth_map() {
        let depth = DepthMap::filled(0, 0, 1.0);
        let mapper = ZoneMapper::new(ZoneMapperConfig::strategic()).unwrap();
        let grid = mapper.map(&depth);

        assert_eq!(grid.counts().free, 24 * 32);
        assert!(!grid.has_depth_range());
    }

    #[test]
    fn test_all_invalid_cell_is_free() {
        let mut depth = DepthMap::filled(4, 4, 0.1);
        depth.fill_rect(0, 2, 0, 2, f32::NAN);
        let mapper = ZoneMapper::new(small_config(2, 2)).unwrap();
        let grid = mapper.map(&depth);

        let masked = grid.cell(0, 0).unwrap();
        assert_eq!(masked.state, HazardState::Free);
        assert!(masked.min_depth.is_infinite());
        assert_eq!(grid.state(1, 1), Some(HazardState::Emergency));
        assert_eq!(grid.depth_min, 0.1);
    }
}
