//! Circle entity

use crate::types::Vector3;

/// A circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center point (10/20/30)
    pub center: Vector3,
    /// Radius (40)
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Vector3, radius: f64) -> Self {
        Circle { center, radius }
    }
}

impl Default for Circle {
    fn default() -> Self {
        Circle::new(Vector3::ZERO, 1.0)
    }
}
