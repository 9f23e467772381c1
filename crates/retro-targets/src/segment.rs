//! Tunables and the seam for the external segmentation frontend.
//!
//! The frontend differences color planes, closes the result with a
//! dilate/erode pass, thresholds, traces contours, and simplifies their
//! convex hulls into candidate polygons. All of that is out of scope here;
//! this module fixes the configuration it consumes and the trait it
//! implements. The configuration is read at the start of each frame's
//! segmentation step and is read-only input everywhere downstream.

use retro_targets_core::Polygon;
use serde::{Deserialize, Serialize};

/// Structuring-element shape for the morphological close.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum KernelShape {
    #[default]
    Rect,
    Cross,
    Ellipse,
}

/// Color plane carrying the illuminated target.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum ColorPlane {
    Blue,
    #[default]
    Green,
    Red,
}

/// Segmentation tunables with their declared valid ranges.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// Binary threshold level, 0..=255.
    pub threshold: u8,
    /// Polygon-simplification epsilon in pixels, 0..=50.
    pub poly_epsilon: f32,
    /// Minimum accepted polygon bounding area, 0..=10000.
    pub min_quad_area: f32,
    pub kernel_shape: KernelShape,
    /// Structuring-element half-size n (the kernel spans 2n+1), 0..=21.
    pub kernel_size: u32,
    /// Erosion passes after the single dilation, 0..=20.
    pub erode_iterations: u32,
    /// Plane kept by the color differencing; the other two are subtracted
    /// at half weight.
    pub primary_plane: ColorPlane,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            threshold: 40,
            poly_epsilon: 10.0,
            min_quad_area: 500.0,
            kernel_shape: KernelShape::Rect,
            kernel_size: 4,
            erode_iterations: 1,
            primary_plane: ColorPlane::Green,
        }
    }
}

impl SegmentationConfig {
    /// Variant for the red-illuminated sample targets: the red plane takes
    /// the green plane's role.
    pub fn alternate_coloring(mut self) -> Self {
        self.primary_plane = ColorPlane::Red;
        self
    }

    /// Check every tunable against its declared range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("poly_epsilon", self.poly_epsilon, 50.0)?;
        check_range("min_quad_area", self.min_quad_area, 10_000.0)?;
        check_range("kernel_size", self.kernel_size as f32, 21.0)?;
        check_range("erode_iterations", self.erode_iterations as f32, 20.0)?;
        Ok(())
    }
}

fn check_range(name: &'static str, value: f32, max: f32) -> Result<(), ConfigError> {
    if !(0.0..=max).contains(&value) {
        return Err(ConfigError::OutOfRange { name, value, max });
    }
    Ok(())
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{name} = {value} is outside the valid range 0..={max}")]
    OutOfRange {
        name: &'static str,
        value: f32,
        max: f32,
    },
}

/// The segmentation seam: turn one frame into candidate polygons with
/// already-reduced vertex counts.
pub trait PolygonExtractor {
    type Frame;

    fn extract(&mut self, frame: &Self::Frame, config: &SegmentationConfig) -> Vec<Polygon>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SegmentationConfig::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_epsilon_is_rejected() {
        let cfg = SegmentationConfig {
            poly_epsilon: 51.0,
            ..SegmentationConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::OutOfRange {
                name: "poly_epsilon",
                ..
            })
        ));
    }

    #[test]
    fn out_of_range_erosions_are_rejected() {
        let cfg = SegmentationConfig {
            erode_iterations: 21,
            ..SegmentationConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn alternate_coloring_swaps_the_primary_plane() {
        let cfg = SegmentationConfig::default().alternate_coloring();
        assert_eq!(cfg.primary_plane, ColorPlane::Red);
    }

    #[test]
    fn config_round_trips_through_json() {
        let cfg = SegmentationConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SegmentationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
