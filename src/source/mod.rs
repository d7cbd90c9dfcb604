//! Depth sources and depth preprocessing.
//!
//! The navigation core only ever sees a [`DepthMap`]. Where it comes from
//! (a monocular depth network, a ToF sensor, a synthetic scene) is hidden
//! behind [`DepthEstimator`].

mod preprocess;
mod synthetic;

pub use preprocess::{inverse_depth_to_distance, median_filter};
pub(crate) use preprocess::median_filter_odd;
pub use synthetic::{BACKGROUND_DEPTH, Scene, SyntheticDepth};

use crate::core::DepthMap;
use crate::error::Result;

/// Trait for anything that turns a captured frame into a depth map.
///
/// Implementations must return distance-like values (larger = farther).
/// Relative inverse-depth output should be passed through
/// [`inverse_depth_to_distance`] first.
///
/// # Example
///
/// ```ignore
/// struct TofCamera {
///     // Device handle
/// }
///
/// impl DepthEstimator for TofCamera {
///     type Frame = RawFrame;
///
///     fn estimate(&mut self, frame: &RawFrame) -> Result<DepthMap> {
///         let meters = frame.to_meters();
///         Ok(DepthMap::new(frame.width, frame.height, meters)?)
///     }
/// }
/// ```
pub trait DepthEstimator {
    /// Captured input type (image, sensor buffer, frame index...)
    type Frame;

    /// Estimate a depth map for one frame.
    ///
    /// A failed estimate is reported as an error; callers decide whether to
    /// skip the frame or stop.
    fn estimate(&mut self, frame: &Self::Frame) -> Result<DepthMap>;
}

impl<E: DepthEstimator + ?Sized> DepthEstimator for &mut E {
    type Frame = E::Frame;

    fn estimate(&mut self, frame: &Self::Frame) -> Result<DepthMap> {
        (**self).estimate(frame)
    }
}
