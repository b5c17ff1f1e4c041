//! Line entity

use crate::types::Vector3;

/// A line segment between two points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Start point (10/20/30)
    pub start: Vector3,
    /// End point (11/21/31)
    pub end: Vector3,
}

impl Line {
    pub fn new(start: Vector3, end: Vector3) -> Self {
        Line { start, end }
    }

    /// Length of the segment
    pub fn length(&self) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let dz = self.end.z - self.start.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}
