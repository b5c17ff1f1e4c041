//! Arc entity

use crate::types::Vector3;

/// An arc (portion of a circle)
///
/// Angles are kept in degrees, as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    /// Center point (10/20/30)
    pub center: Vector3,
    /// Radius (40)
    pub radius: f64,
    /// Start angle in degrees (50)
    pub start_angle: f64,
    /// End angle in degrees (51)
    pub end_angle: f64,
}

impl Arc {
    pub fn new(center: Vector3, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Arc {
            center,
            radius,
            start_angle,
            end_angle,
        }
    }

    /// Counter-clockwise sweep in degrees, in `[0, 360)`
    pub fn sweep(&self) -> f64 {
        (self.end_angle - self.start_angle).rem_euclid(360.0)
    }
}

impl Default for Arc {
    fn default() -> Self {
        Arc::new(Vector3::ZERO, 1.0, 0.0, 90.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_wraps() {
        let arc = Arc::new(Vector3::ZERO, 1.0, 270.0, 90.0);
        assert_eq!(arc.sweep(), 180.0);
        assert_eq!(Arc::default().sweep(), 90.0);
    }
}
