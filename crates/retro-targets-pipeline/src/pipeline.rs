use log::debug;
use retro_targets_core::{Polygon, Quad, TargetGroup, TargetMeasurement};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::grouping::group_targets;
use crate::metrics::measure_quad;
use crate::nesting::keep_nested_quads;
use crate::params::PipelineParams;
use crate::prune::prune_candidates;
use crate::refine::CornerRefiner;
use crate::tension::apply_tension;

/// Everything derived from one frame's polygon candidates.
#[derive(Clone, Debug, Default)]
pub struct FrameAnalysis {
    /// Quads that passed pruning and the nested-outline filter.
    pub target_quads: Vec<Quad>,
    /// One classified measurement per surviving quad, in detection order.
    pub measurements: Vec<TargetMeasurement>,
    /// Slot assignment and the canonical selection.
    pub group: TargetGroup,
}

/// The per-frame geometric pipeline: prune, nested-outline filter, metrics,
/// height classification, slot grouping, tension.
///
/// The pipeline holds no per-frame state; [`TargetPipeline::process`] can
/// be called once per frame for the lifetime of the process.
pub struct TargetPipeline {
    params: PipelineParams,
    refiner: Option<Box<dyn CornerRefiner + Send + Sync>>,
}

impl TargetPipeline {
    pub fn new(params: PipelineParams) -> Self {
        Self {
            params,
            refiner: None,
        }
    }

    /// Install a sub-pixel corner refiner between quad extraction and the
    /// metrics stage.
    pub fn with_refiner(mut self, refiner: Box<dyn CornerRefiner + Send + Sync>) -> Self {
        self.refiner = Some(refiner);
        self
    }

    #[inline]
    pub fn params(&self) -> &PipelineParams {
        &self.params
    }

    /// Classify one frame's polygon candidates.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(self, polygons), fields(candidates = polygons.len()))
    )]
    pub fn process(&self, polygons: &[Polygon]) -> FrameAnalysis {
        let pruned = prune_candidates(polygons, self.params.min_quad_area);
        let mut target_quads = keep_nested_quads(&pruned);
        debug!(
            "{} candidates -> {} pruned -> {} nested targets",
            polygons.len(),
            pruned.len(),
            target_quads.len()
        );

        if let Some(refiner) = &self.refiner {
            for quad in &mut target_quads {
                *quad = refiner.refine(quad);
            }
        }

        let measurements: Vec<TargetMeasurement> = target_quads
            .iter()
            .map(|quad| {
                measure_quad(quad, self.params.frame_width, &self.params.calibration)
            })
            .collect();
        for m in &measurements {
            debug!("target {m}");
        }

        let mut group = group_targets(&measurements, self.params.frame_width, self.params.ranking);
        apply_tension(&mut group, &self.params.calibration);

        FrameAnalysis {
            target_quads,
            measurements,
            group,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refine::IdentityRefiner;
    use nalgebra::Point2;
    use retro_targets_core::HeightClass;

    fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Polygon {
        Polygon::new(vec![
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
        ])
    }

    #[test]
    fn empty_frame_produces_no_targets() {
        let pipeline = TargetPipeline::new(PipelineParams::default());
        let analysis = pipeline.process(&[]);
        assert!(analysis.target_quads.is_empty());
        assert!(analysis.measurements.is_empty());
        assert!(analysis.group.selected.is_none());
    }

    #[test]
    fn unpaired_quad_produces_no_measurement() {
        let pipeline = TargetPipeline::new(PipelineParams::default());
        let analysis = pipeline.process(&[rect(95.0, 120.0, 185.0, 180.0)]);
        assert!(analysis.measurements.is_empty());
    }

    #[test]
    fn nested_pair_yields_one_classified_measurement() {
        let pipeline =
            TargetPipeline::new(PipelineParams::default()).with_refiner(Box::new(IdentityRefiner));
        // 90x60 outer at center (140, 150) with a 40x30 inner outline.
        let outer = rect(95.0, 120.0, 185.0, 180.0);
        let inner = rect(120.0, 135.0, 160.0, 165.0);
        let analysis = pipeline.process(&[outer, inner]);

        assert_eq!(analysis.measurements.len(), 1);
        let m = &analysis.measurements[0];
        assert_eq!(m.height, HeightClass::Low);
        let selected = analysis.group.selected.as_ref().expect("selection");
        assert_eq!(selected.height, HeightClass::Low);
        assert!(selected.tension > 0.0);
    }
}
