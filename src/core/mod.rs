//! Core data model.
//!
//! - [`DepthMap`] / [`Roi`]: input depth field and normalized analysis region
//! - [`HazardState`] / [`ZoneCell`] / [`ZoneGrid`]: classified hazard grid
//! - [`StrategicPlan`] / [`ReactiveCommand`]: decisions handed to the controller
//!
//! Everything here is created fresh per frame; nothing is shared or mutated
//! across frames.

mod decision;
pub(crate) mod depth;
mod zone;

pub use decision::{ReactiveCommand, StrategicPlan};
pub use depth::{DepthMap, PixelRect, Roi};
pub use zone::{CellCounts, HazardState, ZoneCell, ZoneGrid};
