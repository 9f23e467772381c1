use retro_targets_core::HeightClass;

use crate::params::Calibration;

/// True when `value` falls inside the relative acceptance band around
/// `baseline`: `baseline*(1-tol) < value < baseline*(1+tol)`.
#[inline]
pub fn approximates(value: f32, baseline: f32, tolerance: f32) -> bool {
    baseline * (1.0 + tolerance) > value && baseline * (1.0 - tolerance) < value
}

/// Assign a mounting-height class from the estimated vertical range and the
/// observed vertical center.
///
/// Each model predicts where a target of that height should sit in the
/// image at the given range. Low is tested first, then Middle, then High:
/// with noisy range estimates more than one model can plausibly match, and
/// the lowest-mounted plausible category wins. No match yields `Unknown`.
pub fn classify_height(distance_y: f32, center_y: f32, calib: &Calibration) -> HeightClass {
    let tol = calib.height_tolerance;
    if approximates(calib.low_offset.eval(distance_y), center_y, tol) {
        HeightClass::Low
    } else if approximates(calib.middle_offset.eval(distance_y), center_y, tol) {
        HeightClass::Middle
    } else if approximates(calib.high_offset, center_y, tol) {
        HeightClass::High
    } else {
        HeightClass::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acceptance_band_bounds() {
        assert!(approximates(100.0, 100.0, 0.2));
        assert!(!approximates(121.0, 100.0, 0.2));
        assert!(approximates(80.01, 100.0, 0.2));
        // Band edges are exclusive.
        assert!(!approximates(120.0, 100.0, 0.2));
        assert!(!approximates(80.0, 100.0, 0.2));
    }

    #[test]
    fn low_model_match_classifies_low() {
        let calib = Calibration::default();
        // low_offset(100) = 0.1418*100 + 133.97 = 148.15
        let class = classify_height(100.0, 148.15, &calib);
        assert_eq!(class, HeightClass::Low);
    }

    #[test]
    fn middle_model_match_classifies_middle() {
        let calib = Calibration::default();
        // middle_offset(200) = 0.809*200 - 55.7 = 106.1; low_offset(200) =
        // 162.33, outside the band around 106.1.
        let class = classify_height(200.0, 106.1, &calib);
        assert_eq!(class, HeightClass::Middle);
    }

    #[test]
    fn high_model_is_a_fixed_offset() {
        let calib = Calibration::default();
        // At close range neither moving model predicts anywhere near 232:
        // low(100) = 148.15 and middle(100) = 25.2, both outside the band.
        let class = classify_height(100.0, 232.0, &calib);
        assert_eq!(class, HeightClass::High);
    }

    #[test]
    fn lowest_plausible_category_wins() {
        let calib = Calibration::default();
        // Find a range where the low and middle predictions are close enough
        // that both bands cover the observed center:
        // low(d) = middle(d) at d = (133.97 + 55.7) / (0.809 - 0.1418).
        let d = (133.97 + 55.7) / (0.809 - 0.1418);
        let center = calib.low_offset.eval(d);
        assert!(approximates(calib.middle_offset.eval(d), center, 0.2));
        assert_eq!(classify_height(d, center, &calib), HeightClass::Low);
    }

    #[test]
    fn no_model_match_is_unknown() {
        let calib = Calibration::default();
        assert_eq!(classify_height(100.0, 10.0, &calib), HeightClass::Unknown);
    }
}
