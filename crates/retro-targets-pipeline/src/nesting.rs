use retro_targets_core::Quad;

/// Keep only quads that geometrically contain another candidate.
///
/// The physical target is a double outline: the outer and inner border of
/// the reflective tape. Only the outer quad of a real pair contains a
/// vertex of its inner quad, so requiring containment rejects spurious
/// single quads from noise blobs. Containing *one* other candidate is
/// enough; order is preserved.
pub fn keep_nested_quads(quads: &[Quad]) -> Vec<Quad> {
    quads
        .iter()
        .enumerate()
        .filter(|&(i, quad)| contains_other_candidate(i, quad, quads))
        .map(|(_, quad)| *quad)
        .collect()
}

/// True when the first vertex of any *other* candidate lies strictly
/// inside `quad`.
fn contains_other_candidate(i: usize, quad: &Quad, quads: &[Quad]) -> bool {
    quads
        .iter()
        .enumerate()
        .any(|(j, other)| i != j && quad.contains_point(other.corners[0]))
}
