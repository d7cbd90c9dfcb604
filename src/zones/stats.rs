//! Robust per-cell depth statistics.

/// Percentile used as the near-distance statistic of a cell.
///
/// A low percentile instead of the true minimum keeps a single noisy
/// near pixel from flagging a whole cell.
pub const NEAR_PERCENTILE: f32 = 10.0;

/// Percentile of an ascending-sorted slice using linear interpolation
/// between closest ranks (`rank = p / 100 * (n - 1)`).
///
/// Returns `None` for an empty slice.
pub fn percentile_sorted(sorted: &[f32], percentile: f32) -> Option<f32> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let rank = f64::from(percentile.clamp(0.0, 100.0)) / 100.0 * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = rank - lo as f64;
    let a = f64::from(sorted[lo]);
    let b = f64::from(sorted[hi]);
    Some((a + (b - a) * frac) as f32)
}

/// Near-distance and mean statistics of one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellStats {
    pub near: f32,
    pub mean: f32,
}

/// Compute [`CellStats`] over the finite values in `samples`.
///
/// `samples` is used as scratch space and is left sorted. Returns `None`
/// when there is no finite sample.
pub fn cell_stats(samples: &mut Vec<f32>) -> Option<CellStats> {
    samples.retain(|d| d.is_finite());
    if samples.is_empty() {
        return None;
    }
    samples.sort_unstable_by(f32::total_cmp);

    let sum: f64 = samples.iter().map(|&d| f64::from(d)).sum();
    let mean = (sum / samples.len() as f64) as f32;
    let near = percentile_sorted(samples, NEAR_PERCENTILE)?;

    Some(CellStats { near, mean })
}
