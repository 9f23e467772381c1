use std::fmt;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::geometry::Quad;

/// Known mounting height of a reflective target on the field.
///
/// `MiddleLeft`/`MiddleRight` are assigned during grouping once the two
/// middle hoops are told apart; `MiddleCombined` tags the synthetic
/// measurement averaged from a left/right pair.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum HeightClass {
    #[default]
    Unknown,
    High,
    Middle,
    MiddleLeft,
    MiddleRight,
    Low,
    MiddleCombined,
}

impl HeightClass {
    pub fn as_str(self) -> &'static str {
        match self {
            HeightClass::High => "High",
            HeightClass::Middle => "Middle",
            HeightClass::MiddleLeft => "MiddleLeft",
            HeightClass::MiddleRight => "MiddleRight",
            HeightClass::Low => "Low",
            HeightClass::MiddleCombined => "MiddleCombined",
            HeightClass::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for HeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified target measurement derived from a detected quad.
///
/// Sizes are in pixels, distances in inches, the bearing in degrees.
/// `size_x`/`size_y` are positive for every measurement built from a real
/// quad; the pruning stage's minimum-area filter guarantees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetMeasurement {
    /// Source corners. `None` for the synthesized combined-middle target,
    /// which has no originating polygon.
    pub quad: Option<Quad>,
    /// Centroid of the four corners.
    pub center: Point2<f32>,
    /// Rotation-tolerant apparent width.
    pub size_x: f32,
    /// Rotation-tolerant apparent height.
    pub size_y: f32,
    /// Monocular range estimated from `size_x`.
    pub distance_x: f32,
    /// Monocular range estimated from `size_y`.
    pub distance_y: f32,
    /// Signed bearing from the optical-axis center, positive when the
    /// target lies left of the image's horizontal midline.
    pub angle_x: f32,
    /// Shooter tension setpoint; stays zero until the target is selected.
    pub tension: f32,
    pub height: HeightClass,
}

impl fmt::Display for TargetMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} center=({:.1}, {:.1}) size=({:.1}, {:.1}) dist=({:.1}, {:.1}) angle={:.2}",
            self.height,
            self.center.x,
            self.center.y,
            self.size_x,
            self.size_y,
            self.distance_x,
            self.distance_y,
            self.angle_x,
        )
    }
}

/// One frame's slot assignment. Slots are filled independently; `selected`
/// is the canonical per-frame target synthesized by the grouping policy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetGroup {
    pub high: Option<TargetMeasurement>,
    pub middle_left: Option<TargetMeasurement>,
    pub middle_right: Option<TargetMeasurement>,
    pub low: Option<TargetMeasurement>,
    pub selected: Option<TargetMeasurement>,
}
