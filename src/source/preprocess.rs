//! Per-frame spatial depth preprocessing.

use crate::core::DepthMap;
use crate::error::ConfigurationError;

/// Added to the normalization range so a flat map does not divide by zero.
const RANGE_EPSILON: f32 = 1e-8;

/// Median filter with a square `kernel x kernel` window.
///
/// Borders are edge-replicated. Non-finite samples are ignored; a pixel whose
/// window holds no finite sample becomes `NaN`. With an even number of finite
/// samples the two middle values are averaged. `kernel` must be odd; a kernel
/// of 1 returns a copy.
pub fn median_filter(depth: &DepthMap, kernel: usize) -> Result<DepthMap, ConfigurationError> {
    if kernel == 0 || kernel % 2 == 0 {
        return Err(ConfigurationError::InvalidMedianKernel(kernel));
    }
    Ok(median_filter_odd(depth, kernel))
}

/// [`median_filter`] for a kernel already known to be odd.
pub(crate) fn median_filter_odd(depth: &DepthMap, kernel: usize) -> DepthMap {
    if kernel <= 1 || depth.is_empty() {
        return depth.clone();
    }

    let width = depth.width();
    let height = depth.height();
    let radius = kernel / 2;
    let mut window = Vec::with_capacity(kernel * kernel);

    DepthMap::from_fn(width, height, |x, y| {
        window.clear();
        for wy in y as isize - radius as isize..=y as isize + radius as isize {
            let row = depth.row(wy.clamp(0, height as isize - 1) as usize);
            for wx in x as isize - radius as isize..=x as isize + radius as isize {
                let d = row[wx.clamp(0, width as isize - 1) as usize];
                if d.is_finite() {
                    window.push(d);
                }
            }
        }
        median(&mut window)
    })
}

fn median(values: &mut [f32]) -> f32 {
    let n = values.len();
    if n == 0 {
        return f32::NAN;
    }
    values.sort_unstable_by(f32::total_cmp);
    if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    }
}

/// Convert a relative inverse-depth map (larger = nearer) into a
/// pseudo-distance in `[0, 1]` (larger = farther).
///
/// Values are min-max normalized over the finite samples and inverted:
/// `1 - (d - min) / (max - min + 1e-8)`. A flat map becomes all `1.0`.
/// Non-finite samples pass through unchanged.
pub fn inverse_depth_to_distance(depth: &DepthMap) -> DepthMap {
    let mut out = depth.clone();
    let Some((lo, hi)) = depth.finite_range() else {
        return out;
    };
    let scale = hi - lo + RANGE_EPSILON;
    for d in out.data_mut().iter_mut().filter(|d| d.is_finite()) {
        *d = 1.0 - (*d - lo) / scale;
    }
    out
}
