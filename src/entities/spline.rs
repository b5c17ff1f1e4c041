//! Spline entity and its sub-records

use crate::types::Vector3;
use bitflags::bitflags;

bitflags! {
    /// Spline flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SplineFlags: i16 {
        const CLOSED = 1;
        const PERIODIC = 2;
        const RATIONAL = 4;
        const PLANAR = 8;
        const LINEAR = 16;
    }
}

/// Spline header
///
/// Knots, control points and fit points follow as separate sub-records;
/// their counts are announced here (72, 73, 74).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spline {
    /// Degree of the curve (71)
    pub degree: i32,
    pub knot_count: usize,
    pub control_point_count: usize,
    pub fit_point_count: usize,
    /// Flags (70)
    pub flags: SplineFlags,
    /// Start tangent (12/22/32), zero when absent
    pub start_tangent: Vector3,
    /// End tangent (13/23/33), zero when absent
    pub end_tangent: Vector3,
}

impl Spline {
    pub fn new(degree: i32, flags: SplineFlags) -> Self {
        Spline {
            degree,
            knot_count: 0,
            control_point_count: 0,
            fit_point_count: 0,
            flags,
            start_tangent: Vector3::ZERO,
            end_tangent: Vector3::ZERO,
        }
    }
}

impl Default for Spline {
    fn default() -> Self {
        Spline::new(3, SplineFlags::PLANAR)
    }
}

/// A weighted spline control point (10/20/30 and weight 41)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub location: Vector3,
    pub weight: f64,
}

impl ControlPoint {
    pub fn new(x: f64, y: f64, z: f64, weight: f64) -> Self {
        ControlPoint {
            location: Vector3::new(x, y, z),
            weight,
        }
    }
}
