//! High-level facade for the `retro-targets-*` workspace.
//!
//! The system locates a retro-reflective game target in a live video
//! stream, estimates its range, bearing, and required shooter tension, and
//! reports the single best target to the robot controller every frame.
//!
//! Frame acquisition and image segmentation are external collaborators: a
//! frontend built on a general-purpose vision library hands the pipeline a
//! set of simplified candidate polygons per frame (see
//! [`segment::PolygonExtractor`]). Everything downstream of that — quad
//! pruning, nested-outline filtering, calibrated metrics, height
//! classification, slot grouping, tension — lives in
//! [`retro_targets_pipeline`] and is re-exported here.
//!
//! ## Quickstart
//!
//! ```
//! use retro_targets::frame::FrameProcessor;
//! use retro_targets::pipeline::{PipelineParams, TargetPipeline};
//! use retro_targets::core::Polygon;
//!
//! let pipeline = TargetPipeline::new(PipelineParams::default());
//! let mut processor = FrameProcessor::new(pipeline);
//!
//! // Candidate polygons for one frame, from the external segmenter.
//! let polygons: Vec<Polygon> = vec![];
//! let analysis = processor.process_frame(&polygons);
//! assert!(analysis.group.selected.is_none());
//! ```
//!
//! ## API map
//! - [`core`]: geometry and the measurement data model.
//! - [`pipeline`]: the per-frame geometric feature pipeline.
//! - [`capture`]: frame source/recorder interfaces and startup errors.
//! - [`segment`]: segmentation tunables and the polygon-extractor seam.
//! - [`report`]: the fire-and-forget UDP target report.
//! - [`frame`]: the synchronous frame-at-a-time driver.

pub use retro_targets_core as core;
pub use retro_targets_pipeline as pipeline;

pub use retro_targets_core::{HeightClass, Polygon, Quad, TargetGroup, TargetMeasurement};
pub use retro_targets_pipeline::{Calibration, PipelineParams, SlotRanking, TargetPipeline};

pub mod capture;
pub mod frame;
pub mod report;
pub mod segment;

mod fps;
pub use fps::FrameRateCounter;
