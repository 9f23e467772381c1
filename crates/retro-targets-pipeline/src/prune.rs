use retro_targets_core::{Polygon, Quad};

/// Filter raw polygons down to target candidates: exactly four vertices and
/// an axis-aligned bounding area strictly above `min_area`.
///
/// Order is preserved and an empty result is not an error; downstream
/// stages tolerate zero candidates.
pub fn prune_candidates(polygons: &[Polygon], min_area: f32) -> Vec<Quad> {
    polygons
        .iter()
        .filter_map(Polygon::as_quad)
        .filter(|quad| quad.bounding_area() > min_area)
        .collect()
}
