//! Depth-to-hazard zone classification.
//!
//! Two independently configured [`ZoneMapper`]s run on every frame:
//!
//! | Mapper | Grid | ROI | Thresholds (warn / emergency) |
//! |--------|------|-----|-------------------------------|
//! | strategic | 24x32 | rows 10%-100%, cols 10%-90% | 0.35 / 0.20 |
//! | reactive  | 12x16 | rows 50%-100%, cols 25%-75% | 0.25 / 0.12 |
//!
//! The strategic grid trades resolution for field of view; the reactive grid
//! covers only the near field at higher resolution.

mod mapper;
pub mod stats;

pub use mapper::{ZoneMapper, ZoneMapperConfig};
