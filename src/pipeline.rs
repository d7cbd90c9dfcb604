//! Per-frame navigation pipeline.
//!
//! ```text
//!                      ┌─> strategic ZoneMapper ─> StrategicPlanner ─> StrategicPlan
//! depth ─> preprocess ─┤
//!                      └─> reactive ZoneMapper ──> ReactiveAvoider ──> ReactiveCommand
//! ```
//!
//! The two branches share nothing but the read-only depth map, so
//! [`NavigationPipeline::process_parallel`] runs them on two scoped threads
//! with results identical to [`NavigationPipeline::process`].

use std::borrow::Cow;
use std::thread;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{DepthMap, ReactiveCommand, StrategicPlan, ZoneGrid};
use crate::error::{ConfigurationError, Result};
use crate::planning::{FallbackAnalyzer, ReactiveAvoider, StrategicPlanner};
use crate::source::{DepthEstimator, inverse_depth_to_distance, median_filter_odd};
use crate::zones::{ZoneMapper, ZoneMapperConfig};

/// How a frame is analyzed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    /// Strategic and reactive hazard grids
    #[default]
    Zoned,
    /// 3x3 block heuristic, no grids
    Fallback,
}

/// Everything needed to build a [`NavigationPipeline`].
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    pub strategic: ZoneMapperConfig,
    pub reactive: ZoneMapperConfig,
    /// Camera horizontal field of view in degrees
    pub fov_horizontal_deg: f32,
    /// Grid rows treated as the near field by the avoider
    pub front_rows: usize,
    /// Median filter kernel applied before mapping (`None` = off)
    pub median_kernel: Option<usize>,
    /// Input is relative inverse depth and must be converted first
    pub inverse_depth: bool,
    pub mode: AnalysisMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            strategic: ZoneMapperConfig::strategic(),
            reactive: ZoneMapperConfig::reactive(),
            fov_horizontal_deg: 80.0,
            front_rows: 4,
            median_kernel: Some(5),
            inverse_depth: false,
            mode: AnalysisMode::Zoned,
        }
    }
}

/// Result of processing one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NavigationOutput {
    /// Strategic hazard grid (`None` in fallback mode)
    pub strategic_grid: Option<ZoneGrid>,
    /// Reactive hazard grid (`None` in fallback mode)
    pub reactive_grid: Option<ZoneGrid>,
    pub plan: StrategicPlan,
    pub command: ReactiveCommand,
}

/// Depth map to navigation decision, one frame at a time.
///
/// Holds only immutable, validated components; no state carries over
/// between frames.
#[derive(Clone, Debug)]
pub struct NavigationPipeline {
    strategic_mapper: ZoneMapper,
    reactive_mapper: ZoneMapper,
    planner: StrategicPlanner,
    avoider: ReactiveAvoider,
    fallback: FallbackAnalyzer,
    median_kernel: Option<usize>,
    inverse_depth: bool,
    mode: AnalysisMode,
}

impl NavigationPipeline {
    /// Validate the configuration and build every component.
    pub fn new(config: PipelineConfig) -> std::result::Result<Self, ConfigurationError> {
        if let Some(kernel) = config.median_kernel
            && (kernel == 0 || kernel % 2 == 0)
        {
            return Err(ConfigurationError::InvalidMedianKernel(kernel));
        }

        Ok(Self {
            strategic_mapper: ZoneMapper::new(config.strategic)?,
            reactive_mapper: ZoneMapper::new(config.reactive)?,
            planner: StrategicPlanner::new(config.fov_horizontal_deg)?,
            avoider: ReactiveAvoider::new(config.front_rows)?,
            fallback: FallbackAnalyzer::new(),
            median_kernel: config.median_kernel,
            inverse_depth: config.inverse_depth,
            mode: config.mode,
        })
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    pub fn strategic_mapper(&self) -> &ZoneMapper {
        &self.strategic_mapper
    }

    pub fn reactive_mapper(&self) -> &ZoneMapper {
        &self.reactive_mapper
    }

    /// Apply the configured preprocessing, borrowing when there is none.
    pub fn preprocess<'a>(&self, depth: &'a DepthMap) -> Cow<'a, DepthMap> {
        let mut out = Cow::Borrowed(depth);
        if self.inverse_depth {
            out = Cow::Owned(inverse_depth_to_distance(&out));
        }
        if let Some(kernel) = self.median_kernel {
            out = Cow::Owned(median_filter_odd(&out, kernel));
        }
        out
    }

    /// Process one depth map, strategic branch first.
    pub fn process(&self, depth: &DepthMap) -> NavigationOutput {
        let depth = self.preprocess(depth);
        let output = match self.mode {
            AnalysisMode::Zoned => {
                let (strategic_grid, plan) = self.strategic_branch(&depth);
                let (reactive_grid, command) = self.reactive_branch(&depth);
                NavigationOutput {
                    strategic_grid: Some(strategic_grid),
                    reactive_grid: Some(reactive_grid),
                    plan,
                    command,
                }
            }
            AnalysisMode::Fallback => self.fallback_output(&depth),
        };
        log_output(&output);
        output
    }

    /// Same as [`process`](Self::process), with the strategic branch on a
    /// scoped worker thread.
    pub fn process_parallel(&self, depth: &DepthMap) -> NavigationOutput {
        let depth = self.preprocess(depth);
        let depth: &DepthMap = &depth;

        let output = match self.mode {
            AnalysisMode::Zoned => {
                let ((strategic_grid, plan), (reactive_grid, command)) = thread::scope(|s| {
                    let strategic = s.spawn(|| self.strategic_branch(depth));
                    let reactive = self.reactive_branch(depth);
                    match strategic.join() {
                        Ok(strategic) => (strategic, reactive),
                        Err(panic) => std::panic::resume_unwind(panic),
                    }
                });
                NavigationOutput {
                    strategic_grid: Some(strategic_grid),
                    reactive_grid: Some(reactive_grid),
                    plan,
                    command,
                }
            }
            AnalysisMode::Fallback => self.fallback_output(depth),
        };
        log_output(&output);
        output
    }

    /// Estimate depth for `frame` and process it.
    pub fn process_frame<E: DepthEstimator>(
        &self,
        estimator: &mut E,
        frame: &E::Frame,
    ) -> Result<NavigationOutput> {
        let depth = estimator.estimate(frame)?;
        Ok(self.process(&depth))
    }

    fn strategic_branch(&self, depth: &DepthMap) -> (ZoneGrid, StrategicPlan) {
        let grid = self.strategic_mapper.map(depth);
        let plan = self.planner.plan(&grid);
        (grid, plan)
    }

    fn reactive_branch(&self, depth: &DepthMap) -> (ZoneGrid, ReactiveCommand) {
        let grid = self.reactive_mapper.map(depth);
        let command = self.avoider.compute(&grid);
        (grid, command)
    }

    fn fallback_output(&self, depth: &DepthMap) -> NavigationOutput {
        let (plan, command) = self.fallback.analyze(depth);
        NavigationOutput {
            strategic_grid: None,
            reactive_grid: None,
            plan,
            command,
        }
    }
}

fn log_output(output: &NavigationOutput) {
    if let Some(grid) = &output.strategic_grid {
        let counts = grid.counts();
        debug!(
            "Strategic grid: {} free, {} warning, {} emergency",
            counts.free, counts.warning, counts.emergency
        );
    }
    debug!(
        "Frame: yaw {:+.3} (conf {:.2}), cmd yaw {:+.2} speed {:.1}{}",
        output.plan.target_yaw_delta,
        output.plan.confidence,
        output.command.yaw_delta,
        output.command.forward_scale,
        if output.command.emergency_brake { " BRAKE" } else { "" }
    );
}
