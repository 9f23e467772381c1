use retro_targets_core::TargetGroup;

use crate::params::{Calibration, LinearModel};

/// Shooter tension setpoint for an estimated vertical range. Any finite
/// input produces a finite output.
#[inline]
pub fn tension_for_distance(model: &LinearModel, distance: f32) -> f32 {
    model.eval(distance)
}

/// Fill in the tension on the selected target, if the frame has one.
pub fn apply_tension(group: &mut TargetGroup, calib: &Calibration) {
    if let Some(selected) = &mut group.selected {
        selected.tension = tension_for_distance(&calib.tension_from_distance, selected.distance_y);
    }
}
