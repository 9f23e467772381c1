//! Per-frame geometric feature pipeline for retro-reflective targets.
//!
//! The external vision frontend hands us an unordered set of simplified
//! polygons per frame. This crate turns them into classified target
//! measurements and selects one canonical target:
//!
//! 1. prune to well-formed, sufficiently large quads
//! 2. keep only quads nested around another candidate (the reflective tape
//!    is a double outline, so real targets come in outer/inner pairs)
//! 3. compute center, apparent size, calibrated range, and bearing
//! 4. classify each measurement against the known mounting heights
//! 5. resolve the high/middle-left/middle-right/low slots and pick the
//!    selected target
//! 6. derive the shooter tension for the selection
//!
//! Every frame is classified independently; nothing here carries state
//! across frames.

mod grouping;
mod height;
mod metrics;
mod nesting;
mod params;
mod pipeline;
mod prune;
mod refine;
mod tension;

pub use grouping::group_targets;
pub use height::{approximates, classify_height};
pub use metrics::measure_quad;
pub use nesting::keep_nested_quads;
pub use params::{Calibration, LinearModel, PipelineParams, PowerLawModel, SlotRanking};
pub use pipeline::{FrameAnalysis, TargetPipeline};
pub use prune::prune_candidates;
pub use refine::{CornerRefiner, IdentityRefiner};
pub use tension::{apply_tension, tension_for_distance};
