//! Ellipse entity

use crate::types::Vector3;
use std::f64::consts::TAU;

/// An ellipse or elliptical arc
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    /// Center point (10/20/30)
    pub center: Vector3,
    /// Endpoint of the major axis relative to the center (11/21/31)
    pub major_axis: Vector3,
    /// Minor to major axis ratio (40)
    pub ratio: f64,
    /// Start parameter in radians (41)
    pub start_parameter: f64,
    /// End parameter in radians (42)
    pub end_parameter: f64,
}

impl Ellipse {
    /// Create a full ellipse
    pub fn new(center: Vector3, major_axis: Vector3, ratio: f64) -> Self {
        Ellipse {
            center,
            major_axis,
            ratio,
            start_parameter: 0.0,
            end_parameter: TAU,
        }
    }

    /// Whether the parameters cover the whole ellipse
    pub fn is_full(&self) -> bool {
        (self.end_parameter - self.start_parameter - TAU).abs() < 1e-10
    }
}

impl Default for Ellipse {
    fn default() -> Self {
        Ellipse::new(Vector3::ZERO, Vector3::UNIT_X, 1.0)
    }
}
