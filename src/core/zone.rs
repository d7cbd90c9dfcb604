//! Hazard grid types.
//!
//! A [`ZoneGrid`] summarizes an ROI of a depth map as a dense grid of
//! classified cells. Row 0 is the top of the ROI; the last row is nearest
//! to the platform for a forward-looking camera.

use serde::Serialize;

/// Ordinal hazard classification of a cell: `Free < Warning < Emergency`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HazardState {
    /// Nothing closer than the warn threshold
    #[default]
    Free,
    /// Something between the emergency and warn thresholds
    Warning,
    /// Something closer than the emergency threshold
    Emergency,
}

impl HazardState {
    /// Classify a near-distance statistic against two thresholds.
    ///
    /// `emergency_threshold < warn_threshold` is assumed (validated by
    /// [`ZoneMapperConfig`](crate::zones::ZoneMapperConfig)).
    #[inline]
    pub fn classify(min_depth: f32, warn_threshold: f32, emergency_threshold: f32) -> Self {
        if min_depth < emergency_threshold {
            HazardState::Emergency
        } else if min_depth < warn_threshold {
            HazardState::Warning
        } else {
            HazardState::Free
        }
    }

    /// Openness weight used for lateral steering scores.
    #[inline]
    pub fn steer_weight(self) -> f32 {
        match self {
            HazardState::Free => 1.0,
            HazardState::Warning => 0.3,
            HazardState::Emergency => 0.0,
        }
    }
}

/// One classified grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ZoneCell {
    pub row: usize,
    pub col: usize,
    /// 10th percentile of the cell's finite depth samples (`+inf` if none)
    pub min_depth: f32,
    /// Mean of the cell's finite depth samples (`+inf` if none)
    pub mean_depth: f32,
    pub state: HazardState,
}

impl ZoneCell {
    /// A cell with no usable samples.
    pub fn empty(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            min_depth: f32::INFINITY,
            mean_depth: f32::INFINITY,
            state: HazardState::Free,
        }
    }
}

/// Cell counts per hazard state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CellCounts {
    pub free: usize,
    pub warning: usize,
    pub emergency: usize,
}

impl CellCounts {
    /// Total number of cells
    pub fn total(&self) -> usize {
        self.free + self.warning + self.emergency
    }
}

/// Dense `grid_h x grid_w` grid of classified cells.
///
/// Cells are stored flat in row-major order (`row * grid_w + col`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ZoneGrid {
    grid_h: usize,
    grid_w: usize,
    cells: Vec<ZoneCell>,
    /// Finite minimum over the whole cropped ROI (`+inf` if none)
    pub depth_min: f32,
    /// Finite maximum over the whole cropped ROI (`+inf` if none)
    pub depth_max: f32,
}

impl ZoneGrid {
    /// Assemble a grid from row-major cells.
    ///
    /// Returns `None` unless there is exactly one cell per `(row, col)`,
    /// stored at `row * grid_w + col`.
    pub fn from_cells(
        grid_h: usize,
        grid_w: usize,
        cells: Vec<ZoneCell>,
        depth_min: f32,
        depth_max: f32,
    ) -> Option<Self> {
        if cells.len() != grid_h * grid_w {
            return None;
        }
        let ordered = cells
            .iter()
            .enumerate()
            .all(|(idx, c)| c.row == idx / grid_w.max(1) && c.col == idx % grid_w.max(1));
        if !ordered {
            return None;
        }
        Some(Self {
            grid_h,
            grid_w,
            cells,
            depth_min,
            depth_max,
        })
    }

    /// Assemble a grid from cells already known to be in row-major order.
    pub(crate) fn from_row_major(
        grid_h: usize,
        grid_w: usize,
        cells: Vec<ZoneCell>,
        depth_min: f32,
        depth_max: f32,
    ) -> Self {
        debug_assert_eq!(cells.len(), grid_h * grid_w);
        Self {
            grid_h,
            grid_w,
            cells,
            depth_min,
            depth_max,
        }
    }

    /// Build a grid directly from a state matrix (`states[row][col]`).
    ///
    /// Depth statistics are synthesized so that they agree with the state:
    /// `0.0` for emergency, `warn_depth` for warning and `free_depth` for free.
    /// Useful for exercising planners without a depth map.
    pub fn from_states(states: &[Vec<HazardState>], warn_depth: f32, free_depth: f32) -> Option<Self> {
        let grid_h = states.len();
        let grid_w = states.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(grid_h * grid_w);
        for (row, values) in states.iter().enumerate() {
            if values.len() != grid_w {
                return None;
            }
            for (col, &state) in values.iter().enumerate() {
                let depth = match state {
                    HazardState::Free => free_depth,
                    HazardState::Warning => warn_depth,
                    HazardState::Emergency => 0.0,
                };
                cells.push(ZoneCell {
                    row,
                    col,
                    min_depth: depth,
                    mean_depth: depth,
                    state,
                });
            }
        }
        let (depth_min, depth_max) = crate::core::depth::finite_range(
            cells.iter().map(|c| c.min_depth),
        )
        .unwrap_or((f32::INFINITY, f32::INFINITY));
        Self::from_cells(grid_h, grid_w, cells, depth_min, depth_max)
    }

    /// Number of rows
    #[inline]
    pub fn grid_h(&self) -> usize {
        self.grid_h
    }

    /// Number of columns
    #[inline]
    pub fn grid_w(&self) -> usize {
        self.grid_w
    }

    /// All cells, row-major
    #[inline]
    pub fn cells(&self) -> &[ZoneCell] {
        &self.cells
    }

    /// Is the grid empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `(row, col)`, `None` when out of bounds.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<&ZoneCell> {
        if row >= self.grid_h || col >= self.grid_w {
            return None;
        }
        self.cells.get(row * self.grid_w + col)
    }

    /// Hazard state at `(row, col)`.
    #[inline]
    pub fn state(&self, row: usize, col: usize) -> Option<HazardState> {
        self.cell(row, col).map(|c| c.state)
    }

    /// One grid row.
    pub fn row(&self, row: usize) -> &[ZoneCell] {
        let start = (row * self.grid_w).min(self.cells.len());
        let end = (start + self.grid_w).min(self.cells.len());
        &self.cells[start..end]
    }

    /// Cells of one column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &ZoneCell> {
        let stride = self.grid_w.max(1);
        let skip = if col < self.grid_w { col } else { self.cells.len() };
        self.cells.iter().skip(skip).step_by(stride)
    }

    /// Whether `depth_min`/`depth_max` came from at least one finite sample.
    pub fn has_depth_range(&self) -> bool {
        self.depth_min.is_finite() && self.depth_max.is_finite()
    }

    /// Count cells per hazard state.
    pub fn counts(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for cell in &self.cells {
            match cell.state {
                HazardState::Free => counts.free += 1,
                HazardState::Warning => counts.warning += 1,
                HazardState::Emergency => counts.emergency += 1,
            }
        }
        counts
    }
}
