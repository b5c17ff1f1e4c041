//! Point entity

use crate::types::Vector3;

/// A point entity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Location (10/20/30)
    pub location: Vector3,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point {
            location: Vector3::new(x, y, z),
        }
    }
}
