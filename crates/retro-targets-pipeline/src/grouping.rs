use log::debug;
use nalgebra::Point2;
use retro_targets_core::{HeightClass, TargetGroup, TargetMeasurement};

use crate::params::SlotRanking;

/// Resolve a frame's classified measurements into the slot assignment and
/// pick the canonical selected target.
///
/// High and low slots take one candidate each per `ranking`. Two middle
/// candidates are ordered by horizontal center; a lone middle candidate is
/// disambiguated against the high target if one is visible (else the low
/// target, else the frame midline) — a visible reference target
/// disambiguates better than the absolute image-center heuristic. Three or
/// more middle candidates leave the middle slots unassigned.
///
/// Selection priority: high, low, a combined middle pair, middle-left,
/// middle-right, none. The combined middle is the component-wise mean of
/// the pair and carries no originating polygon.
pub fn group_targets(
    measurements: &[TargetMeasurement],
    frame_width: u32,
    ranking: SlotRanking,
) -> TargetGroup {
    let mut group = TargetGroup {
        high: pick_slot(measurements, HeightClass::High, ranking),
        low: pick_slot(measurements, HeightClass::Low, ranking),
        ..TargetGroup::default()
    };

    let middles: Vec<&TargetMeasurement> = measurements
        .iter()
        .filter(|m| m.height == HeightClass::Middle)
        .collect();

    match middles.as_slice() {
        [a, b] => {
            let (left, right) = if a.center.x < b.center.x {
                (a, b)
            } else {
                (b, a)
            };
            group.middle_left = Some(retag(left, HeightClass::MiddleLeft));
            group.middle_right = Some(retag(right, HeightClass::MiddleRight));
        }
        [lone] => {
            let reference_x = group
                .high
                .as_ref()
                .or(group.low.as_ref())
                .map(|m| m.center.x)
                // No visible reference target: assume the missing ones are
                // out of frame and fall back to the horizontal midpoint.
                .unwrap_or((frame_width / 2) as f32);
            if lone.center.x < reference_x {
                group.middle_left = Some(retag(lone, HeightClass::MiddleLeft));
            } else {
                group.middle_right = Some(retag(lone, HeightClass::MiddleRight));
            }
        }
        [] => {}
        more => {
            debug!(
                "{} middle candidates in one frame, leaving middle slots unassigned",
                more.len()
            );
        }
    }

    group.selected = select_target(&group);
    group
}

fn pick_slot(
    measurements: &[TargetMeasurement],
    class: HeightClass,
    ranking: SlotRanking,
) -> Option<TargetMeasurement> {
    let mut candidates = measurements.iter().filter(|m| m.height == class);
    match ranking {
        SlotRanking::DetectionOrder => candidates.next().cloned(),
        SlotRanking::LargestArea => candidates
            .max_by(|a, b| {
                (a.size_x * a.size_y)
                    .partial_cmp(&(b.size_x * b.size_y))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .cloned(),
    }
}

fn retag(m: &TargetMeasurement, height: HeightClass) -> TargetMeasurement {
    TargetMeasurement {
        height,
        ..m.clone()
    }
}

fn select_target(group: &TargetGroup) -> Option<TargetMeasurement> {
    if let Some(high) = &group.high {
        return Some(high.clone());
    }
    if let Some(low) = &group.low {
        return Some(low.clone());
    }
    match (&group.middle_left, &group.middle_right) {
        (Some(left), Some(right)) => Some(combine_middles(left, right)),
        (Some(left), None) => Some(left.clone()),
        (None, Some(right)) => Some(right.clone()),
        (None, None) => None,
    }
}

/// Component-wise mean of the middle pair, standing in for the hidden
/// reference point between the two hoops.
fn combine_middles(left: &TargetMeasurement, right: &TargetMeasurement) -> TargetMeasurement {
    TargetMeasurement {
        quad: None,
        center: Point2::new(
            (left.center.x + right.center.x) / 2.0,
            (left.center.y + right.center.y) / 2.0,
        ),
        size_x: (left.size_x + right.size_x) / 2.0,
        size_y: (left.size_y + right.size_y) / 2.0,
        distance_x: (left.distance_x + right.distance_x) / 2.0,
        distance_y: (left.distance_y + right.distance_y) / 2.0,
        angle_x: (left.angle_x + right.angle_x) / 2.0,
        tension: 0.0,
        height: HeightClass::MiddleCombined,
    }
}
