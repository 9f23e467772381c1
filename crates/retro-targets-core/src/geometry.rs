use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Tolerance used when deciding whether a point sits on a polygon edge.
/// Vertex coordinates are pixel-scale, so an absolute epsilon is adequate.
const EDGE_EPS: f32 = 1e-6;

/// An ordered vertex loop produced by the external polygon-simplification
/// stage. Vertex count is arbitrary before pruning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Point2<f32>>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point2<f32>>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Width and height of the axis-aligned bounding rectangle.
    pub fn bounding_extent(&self) -> (f32, f32) {
        let mut min = Point2::new(f32::INFINITY, f32::INFINITY);
        let mut max = Point2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        for v in &self.vertices {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }
        if self.vertices.is_empty() {
            (0.0, 0.0)
        } else {
            (max.x - min.x, max.y - min.y)
        }
    }

    /// Area of the axis-aligned bounding rectangle.
    pub fn bounding_area(&self) -> f32 {
        let (w, h) = self.bounding_extent();
        w * h
    }

    /// View this polygon as a quad if it has exactly four vertices.
    pub fn as_quad(&self) -> Option<Quad> {
        match self.vertices.as_slice() {
            &[a, b, c, d] => Some(Quad::new([a, b, c, d])),
            _ => None,
        }
    }
}

impl From<Quad> for Polygon {
    fn from(quad: Quad) -> Self {
        Polygon::new(quad.corners.to_vec())
    }
}

/// A polygon reduced to exactly four vertices — the shape family the
/// pipeline treats as a target candidate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    pub corners: [Point2<f32>; 4],
}

impl Quad {
    pub fn new(corners: [Point2<f32>; 4]) -> Self {
        Self { corners }
    }

    /// Arithmetic mean of the four corners.
    pub fn centroid(&self) -> Point2<f32> {
        let mut x = 0.0;
        let mut y = 0.0;
        for c in &self.corners {
            x += c.x;
            y += c.y;
        }
        Point2::new(x / 4.0, y / 4.0)
    }

    /// Area of the axis-aligned bounding rectangle.
    pub fn bounding_area(&self) -> f32 {
        let xs = self.corners.map(|c| c.x);
        let ys = self.corners.map(|c| c.y);
        let w = xs.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b))
            - xs.iter().fold(f32::INFINITY, |a, &b| a.min(b));
        let h = ys.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b))
            - ys.iter().fold(f32::INFINITY, |a, &b| a.min(b));
        w * h
    }

    /// Strict containment test; boundary points do not count.
    pub fn contains_point(&self, p: Point2<f32>) -> bool {
        point_in_polygon(p, &self.corners)
    }
}

/// Even-odd containment test with boundary points excluded, matching the
/// strictly-positive branch of OpenCV's `pointPolygonTest`.
pub fn point_in_polygon(p: Point2<f32>, vertices: &[Point2<f32>]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[j];
        if on_segment(p, a, b) {
            return false;
        }
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn on_segment(p: Point2<f32>, a: Point2<f32>, b: Point2<f32>) -> bool {
    let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    if cross.abs() > EDGE_EPS * (b - a).norm().max(1.0) {
        return false;
    }
    p.x >= a.x.min(b.x) - EDGE_EPS
        && p.x <= a.x.max(b.x) + EDGE_EPS
        && p.y >= a.y.min(b.y) - EDGE_EPS
        && p.y <= a.y.max(b.y) + EDGE_EPS
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Quad {
        Quad::new([
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
        ])
    }

    #[test]
    fn centroid_of_rectangle_is_its_center() {
        let q = rect(0.0, 0.0, 100.0, 50.0);
        let c = q.centroid();
        assert_relative_eq!(c.x, 50.0);
        assert_relative_eq!(c.y, 25.0);
    }

    #[test]
    fn bounding_area_of_tilted_quad() {
        // Diamond inscribed in a 10x10 box.
        let q = Quad::new([
            Point2::new(5.0, 0.0),
            Point2::new(10.0, 5.0),
            Point2::new(5.0, 10.0),
            Point2::new(0.0, 5.0),
        ]);
        assert_relative_eq!(q.bounding_area(), 100.0);
    }

    #[test]
    fn interior_point_is_contained() {
        let q = rect(0.0, 0.0, 100.0, 100.0);
        assert!(q.contains_point(Point2::new(40.0, 40.0)));
        assert!(!q.contains_point(Point2::new(140.0, 40.0)));
    }

    #[test]
    fn boundary_point_is_not_contained() {
        let q = rect(0.0, 0.0, 100.0, 100.0);
        assert!(!q.contains_point(Point2::new(0.0, 50.0)));
        assert!(!q.contains_point(Point2::new(100.0, 100.0)));
        assert!(!q.contains_point(Point2::new(50.0, 0.0)));
    }

    #[test]
    fn degenerate_polygon_contains_nothing() {
        assert!(!point_in_polygon(
            Point2::new(0.0, 0.0),
            &[Point2::new(1.0, 1.0), Point2::new(2.0, 2.0)],
        ));
    }

    #[test]
    fn as_quad_requires_exactly_four_vertices() {
        let tri = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(5.0, 10.0),
        ]);
        assert!(tri.as_quad().is_none());

        let quad: Polygon = rect(0.0, 0.0, 10.0, 10.0).into();
        assert!(quad.as_quad().is_some());
    }

    #[test]
    fn empty_polygon_has_zero_bounds() {
        let p = Polygon::new(Vec::new());
        assert_eq!(p.bounding_area(), 0.0);
    }
}
