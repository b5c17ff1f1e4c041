//! Point and direction triples

use std::fmt;

/// 3D point or direction, assembled from a coordinate code family
/// (x at the base code, y at base + 10, z at base + 20)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Create a new 3D vector
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// Create a vector in the XY plane
    pub const fn xy(x: f64, y: f64) -> Self {
        Vector3 { x, y, z: 0.0 }
    }

    /// Zero vector
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// Unit X vector
    pub const UNIT_X: Vector3 = Vector3::new(1.0, 0.0, 0.0);

    /// Unit Y vector
    pub const UNIT_Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);

    /// Unit Z vector, the default extrusion direction
    pub const UNIT_Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Components as an array
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Component-wise comparison with an absolute tolerance
    pub fn approx_eq(&self, other: &Vector3, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(v: [f64; 3]) -> Self {
        Vector3::new(v[0], v[1], v[2])
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Vector3::xy(1.0, 2.0), Vector3::new(1.0, 2.0, 0.0));
        assert_eq!(Vector3::from([1.0, 2.0, 3.0]).to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(Vector3::default(), Vector3::ZERO);
    }

    #[test]
    fn test_approx_eq() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(1.0 + 1e-9, 2.0, 3.0 - 1e-9);
        assert!(a.approx_eq(&b, 1e-6));
        assert!(!a.approx_eq(&Vector3::UNIT_Z, 1e-6));
    }
}
