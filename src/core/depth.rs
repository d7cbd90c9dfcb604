//! Depth map input and region-of-interest types.
//!
//! ## Depth Convention
//!
//! Every depth value is a distance-like quantity: **larger = farther**.
//! Relative inverse-depth output (larger = nearer) must be converted first,
//! see [`inverse_depth_to_distance`](crate::source::inverse_depth_to_distance).
//!
//! Non-finite samples (`NaN`, `±inf`) mark invalid pixels and are skipped by
//! all statistics.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, DepthError};

/// A dense per-pixel depth field.
///
/// Stored in row-major order: `data[y * width + x]`.
#[derive(Clone, Debug, PartialEq)]
pub struct DepthMap {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl DepthMap {
    /// Create a depth map from a row-major buffer.
    pub fn new(width: usize, height: usize, data: Vec<f32>) -> Result<Self, DepthError> {
        let expected = width * height;
        if data.len() != expected {
            return Err(DepthError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a depth map where every pixel has the same value.
    pub fn filled(width: usize, height: usize, value: f32) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Create a depth map by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Create a depth map from nested rows (all rows must have equal length).
    pub fn from_rows(rows: &[Vec<f32>]) -> Result<Self, DepthError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(width * height);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(DepthError::RaggedRows {
                    row,
                    len: values.len(),
                    expected: width,
                });
            }
            data.extend_from_slice(values);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw row-major samples
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable raw row-major samples
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Is the map empty (zero pixels)?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Depth at pixel `(x, y)`, `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    /// Set depth at pixel `(x, y)`. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        if x < self.width && y < self.height {
            self.data[y * self.width + x] = value;
        }
    }

    /// One image row.
    #[inline]
    pub fn row(&self, y: usize) -> &[f32] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Fill the pixel rectangle `[y0, y1) x [x0, x1)` with `value`, clamped to the map.
    pub fn fill_rect(&mut self, y0: usize, y1: usize, x0: usize, x1: usize, value: f32) {
        let y1 = y1.min(self.height);
        let x1 = x1.min(self.width);
        for y in y0..y1 {
            let start = y * self.width;
            for v in &mut self.data[start + x0.min(x1)..start + x1] {
                *v = value;
            }
        }
    }

    /// Minimum and maximum over finite samples, `None` if there are none.
    pub fn finite_range(&self) -> Option<(f32, f32)> {
        finite_range(self.data.iter().copied())
    }

    /// Fraction of finite samples (0.0 for an empty map).
    pub fn valid_fraction(&self) -> f32 {
        if self.data.is_empty() {
            return 0.0;
        }
        let valid = self.data.iter().filter(|d| d.is_finite()).count();
        valid as f32 / self.data.len() as f32
    }
}

/// Finite min/max over a sample stream.
pub(crate) fn finite_range(samples: impl Iterator<Item = f32>) -> Option<(f32, f32)> {
    samples
        .filter(|d| d.is_finite())
        .fold(None, |acc, d| match acc {
            None => Some((d, d)),
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
        })
}

/// Pixel rectangle `[y0, y1) x [x0, x1)` inside a depth map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub y0: usize,
    pub y1: usize,
    pub x0: usize,
    pub x1: usize,
}

impl PixelRect {
    /// Rectangle height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.y1.saturating_sub(self.y0)
    }

    /// Rectangle width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.x1.saturating_sub(self.x0)
    }

    /// Is the rectangle zero-area?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.height() == 0 || self.width() == 0
    }
}

/// Normalized region of interest `(y0, y1, x0, x1)` in image coordinates.
///
/// `(0, 0)` is the top-left corner. Rows grow downwards, so `y1 = 1.0`
/// reaches the bottom of the image (the near field for a forward camera).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Roi {
    pub y0: f64,
    pub y1: f64,
    pub x0: f64,
    pub x1: f64,
}

impl Roi {
    /// The whole image.
    pub const FULL: Roi = Roi {
        y0: 0.0,
        y1: 1.0,
        x0: 0.0,
        x1: 1.0,
    };

    pub const fn new(y0: f64, y1: f64, x0: f64, x1: f64) -> Self {
        Self { y0, y1, x0, x1 }
    }

    /// Check bounds and ordering.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let fail = |reason| ConfigurationError::InvalidRoi {
            y0: self.y0,
            y1: self.y1,
            x0: self.x0,
            x1: self.x1,
            reason,
        };

        let bounds = [self.y0, self.y1, self.x0, self.x1];
        if bounds.iter().any(|v| !v.is_finite()) {
            return Err(fail("bounds must be finite"));
        }
        if bounds.iter().any(|v| !(0.0..=1.0).contains(v)) {
            return Err(fail("bounds must lie in [0, 1]"));
        }
        if self.y0 >= self.y1 {
            return Err(fail("y0 must be below y1"));
        }
        if self.x0 >= self.x1 {
            return Err(fail("x0 must be below x1"));
        }
        Ok(())
    }

    /// Pixel bounds for an image of `height x width`.
    ///
    /// Each bound is truncated toward zero (`floor(frac * size)`, in `f64`),
    /// so a small ROI on a small image may collapse to zero area.
    pub fn pixel_bounds(&self, height: usize, width: usize) -> PixelRect {
        let to_px = |frac: f64, size: usize| ((frac * size as f64) as usize).min(size);
        let y0 = to_px(self.y0, height);
        let x0 = to_px(self.x0, width);
        PixelRect {
            y0,
            y1: to_px(self.y1, height).max(y0),
            x0,
            x1: to_px(self.x1, width).max(x0),
        }
    }
}

impl Default for Roi {
    fn default() -> Self {
        Self::FULL
    }
}
