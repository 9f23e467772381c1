//! Synchronous frame-at-a-time driver.
//!
//! Acquire frame, segment (externally), classify, report, repeat. Nothing
//! here suspends or spawns concurrent work; a frame's measurements are
//! fully discarded before the next frame begins. Transport failures on the
//! reporting channel are logged and the frame completes normally.

use log::{info, warn};
use retro_targets_core::Polygon;
use retro_targets_pipeline::{FrameAnalysis, TargetPipeline};

use crate::fps::FrameRateCounter;
use crate::report::{TargetReport, UdpReporter};

/// Runs the geometric pipeline once per frame and reports the selection.
pub struct FrameProcessor {
    pipeline: TargetPipeline,
    reporter: Option<UdpReporter>,
    fps: FrameRateCounter,
}

impl FrameProcessor {
    pub fn new(pipeline: TargetPipeline) -> Self {
        Self {
            pipeline,
            reporter: None,
            fps: FrameRateCounter::start(),
        }
    }

    /// Attach the UDP reporting channel.
    pub fn with_reporter(mut self, reporter: UdpReporter) -> Self {
        self.reporter = Some(reporter);
        self
    }

    #[inline]
    pub fn pipeline(&self) -> &TargetPipeline {
        &self.pipeline
    }

    /// Average frame rate since the processor was created.
    pub fn fps(&self) -> f64 {
        self.fps.fps()
    }

    /// Process one frame's candidate polygons; sends a report when a
    /// target is selected and a reporter is attached.
    pub fn process_frame(&mut self, polygons: &[Polygon]) -> FrameAnalysis {
        let analysis = self.pipeline.process(polygons);

        if let Some(selected) = &analysis.group.selected {
            info!(
                "dist={:.3} angle={:.3} type={}",
                selected.distance_y, selected.angle_x, selected.height
            );
            if let (Some(reporter), Some(report)) =
                (&self.reporter, TargetReport::from_group(&analysis.group))
            {
                if let Err(err) = reporter.send(&report) {
                    warn!("target report dropped: {err}");
                }
            }
        }

        self.fps.tick();
        analysis
    }
}
