use serde::{Deserialize, Serialize};

/// First-order model `y = gain * x + offset`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub gain: f32,
    pub offset: f32,
}

impl LinearModel {
    #[inline]
    pub fn eval(&self, x: f32) -> f32 {
        self.gain * x + self.offset
    }
}

/// Power-law model `y = scale * x^exponent`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PowerLawModel {
    pub scale: f32,
    pub exponent: f32,
}

impl PowerLawModel {
    #[inline]
    pub fn eval(&self, x: f32) -> f32 {
        self.scale * x.powf(self.exponent)
    }
}

/// Camera- and field-specific regression constants.
///
/// All constants were fit offline against physical measurements of the
/// 320x240 robot camera and are used unchanged at runtime. The range
/// exponents are negative: apparent size shrinks with range, so both
/// distance models must be strictly decreasing in size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    /// Range (inches) from apparent target width (pixels).
    pub distance_from_width: PowerLawModel,
    /// Range (inches) from apparent target height (pixels).
    pub distance_from_height: PowerLawModel,
    /// Bearing (degrees) per pixel of horizontal offset from the
    /// optical-axis center.
    pub angle_gain: f32,
    /// Expected vertical pixel position of the low target vs range.
    pub low_offset: LinearModel,
    /// Expected vertical pixel position of a middle target vs range.
    pub middle_offset: LinearModel,
    /// Expected vertical pixel position of the high target. The camera
    /// cannot observe the perspective change for this mounting height.
    pub high_offset: f32,
    /// Relative half-width of the acceptance band when matching a
    /// predicted offset against the observed center.
    pub height_tolerance: f32,
    /// Shooter tension setpoint from the estimated vertical range.
    pub tension_from_distance: LinearModel,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            distance_from_width: PowerLawModel {
                scale: 9952.595_656_611_8,
                exponent: -1.015_499_766_4,
            },
            distance_from_height: PowerLawModel {
                scale: 7560.318_899_404_8,
                exponent: -1.019_085_567_3,
            },
            angle_gain: 0.1105,
            low_offset: LinearModel {
                gain: 0.1418,
                offset: 133.97,
            },
            middle_offset: LinearModel {
                gain: 0.809,
                offset: -55.7,
            },
            high_offset: 232.0,
            height_tolerance: 0.2,
            tension_from_distance: LinearModel {
                gain: 1.714_439_987_7,
                offset: 253.379_512_496_1,
            },
        }
    }
}

/// How to rank several measurements competing for the same height slot.
///
/// The grouping stage historically kept whichever candidate appeared first
/// in detection order with no secondary ranking; that stays the default so
/// existing tuning is preserved, but the choice is explicit here.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum SlotRanking {
    /// Keep the first candidate in detection order.
    #[default]
    DetectionOrder,
    /// Keep the candidate with the largest apparent area.
    LargestArea,
}

/// Frame-level settings for the geometric pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineParams {
    /// Quads whose bounding-rectangle area does not exceed this are
    /// rejected during pruning (pixels squared).
    pub min_quad_area: f32,
    /// Frame width in pixels; the bearing and the middle-target fallback
    /// both reference the horizontal midline.
    pub frame_width: u32,
    pub calibration: Calibration,
    pub ranking: SlotRanking,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            min_quad_area: 500.0,
            frame_width: 320,
            calibration: Calibration::default(),
            ranking: SlotRanking::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linear_model_evaluates() {
        let m = LinearModel {
            gain: 2.0,
            offset: 1.0,
        };
        assert_relative_eq!(m.eval(3.0), 7.0);
    }

    #[test]
    fn power_law_with_negative_exponent_decreases() {
        let m = PowerLawModel {
            scale: 100.0,
            exponent: -1.0,
        };
        assert!(m.eval(10.0) > m.eval(20.0));
    }

    #[test]
    fn calibration_round_trips_through_json() {
        let calib = Calibration::default();
        let json = serde_json::to_string(&calib).unwrap();
        let back: Calibration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, calib);
    }
}
