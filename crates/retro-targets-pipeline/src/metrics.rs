use retro_targets_core::{Quad, TargetMeasurement};

use crate::height::classify_height;
use crate::params::Calibration;

/// Convert one surviving quad into a target measurement.
///
/// The size estimates average opposite-edge deltas and keep the larger of
/// the two pairings, which tolerates mild rotation and perspective skew on
/// a tilted target. Ranges come from the calibrated power-law regressions;
/// the bearing is proportional to the horizontal offset from the image
/// midline (positive to the left). The height class is assigned
/// immediately so every emitted measurement is fully classified.
pub fn measure_quad(quad: &Quad, frame_width: u32, calib: &Calibration) -> TargetMeasurement {
    let p = &quad.corners;
    let center = quad.centroid();

    let x_pair_a = ((p[0].x - p[1].x).abs() + (p[2].x - p[3].x).abs()) / 2.0;
    let x_pair_b = ((p[1].x - p[2].x).abs() + (p[3].x - p[0].x).abs()) / 2.0;
    let size_x = x_pair_a.max(x_pair_b);

    let y_pair_a = ((p[0].y - p[1].y).abs() + (p[2].y - p[3].y).abs()) / 2.0;
    let y_pair_b = ((p[1].y - p[2].y).abs() + (p[3].y - p[0].y).abs()) / 2.0;
    let size_y = y_pair_a.max(y_pair_b);

    let distance_x = calib.distance_from_width.eval(size_x);
    let distance_y = calib.distance_from_height.eval(size_y);
    // Integer half-width, as the camera frontend reports columns.
    let angle_x = calib.angle_gain * ((frame_width / 2) as f32 - center.x);

    let height = classify_height(distance_y, center.y, calib);

    TargetMeasurement {
        quad: Some(*quad),
        center,
        size_x,
        size_y,
        distance_x,
        distance_y,
        angle_x,
        tension: 0.0,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point2;

    fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Quad {
        Quad::new([
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
        ])
    }

    #[test]
    fn axis_aligned_rect_measures_its_extent() {
        let m = measure_quad(&rect(10.0, 20.0, 100.0, 80.0), 320, &Calibration::default());
        assert_relative_eq!(m.center.x, 55.0);
        assert_relative_eq!(m.center.y, 50.0);
        assert_relative_eq!(m.size_x, 90.0);
        assert_relative_eq!(m.size_y, 60.0);
        assert!(m.quad.is_some());
    }

    #[test]
    fn size_uses_larger_edge_pairing_under_rotation() {
        // Same 90x60 rectangle with the vertex loop starting one step later,
        // which swaps which edge pairing carries the horizontal extent.
        let rotated_order = Quad::new([
            Point2::new(100.0, 20.0),
            Point2::new(100.0, 80.0),
            Point2::new(10.0, 80.0),
            Point2::new(10.0, 20.0),
        ]);
        let m = measure_quad(&rotated_order, 320, &Calibration::default());
        assert_relative_eq!(m.size_x, 90.0);
        assert_relative_eq!(m.size_y, 60.0);
    }

    #[test]
    fn distances_strictly_decrease_with_size() {
        let calib = Calibration::default();
        let mut prev_x = f32::INFINITY;
        let mut prev_y = f32::INFINITY;
        for size in 1..400 {
            let s = size as f32;
            let dx = calib.distance_from_width.eval(s);
            let dy = calib.distance_from_height.eval(s);
            assert!(dx < prev_x, "distance_x not decreasing at size {s}");
            assert!(dy < prev_y, "distance_y not decreasing at size {s}");
            prev_x = dx;
            prev_y = dy;
        }
    }

    #[test]
    fn bearing_is_positive_left_of_midline() {
        let calib = Calibration::default();
        let left = measure_quad(&rect(40.0, 100.0, 120.0, 160.0), 320, &calib);
        let right = measure_quad(&rect(200.0, 100.0, 280.0, 160.0), 320, &calib);
        assert!(left.angle_x > 0.0);
        assert!(right.angle_x < 0.0);
        // center.x = 80 => 0.1105 * (160 - 80)
        assert_relative_eq!(left.angle_x, 0.1105 * 80.0, max_relative = 1e-6);
    }
}
