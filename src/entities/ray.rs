//! Semi-infinite ray

use crate::types::Vector3;

/// A ray starting at a point and extending in one direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point (10/20/30)
    pub base_point: Vector3,
    /// Direction vector (11/21/31)
    pub direction: Vector3,
}

impl Ray {
    pub fn new(base_point: Vector3, direction: Vector3) -> Self {
        Ray { base_point, direction }
    }
}

impl Default for Ray {
    fn default() -> Self {
        Ray::new(Vector3::ZERO, Vector3::UNIT_X)
    }
}
