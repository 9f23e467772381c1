use retro_targets_core::Quad;

/// Sub-pixel corner refinement hook.
///
/// A refiner replaces coarse polygon vertices with corners derived from
/// edge-line intersections before metrics are computed. The pipeline works
/// unchanged when no refiner is installed; [`IdentityRefiner`] is the
/// explicit passthrough.
pub trait CornerRefiner {
    fn refine(&self, quad: &Quad) -> Quad;
}

/// Passthrough refiner that keeps the coarse corners.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityRefiner;

impl CornerRefiner for IdentityRefiner {
    fn refine(&self, quad: &Quad) -> Quad {
        *quad
    }
}
