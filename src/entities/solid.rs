//! Four-cornered surfaces: `TRACE`, `SOLID` and `3DFACE`

use crate::types::Vector3;

/// Corners and thickness shared by traces, solids and 3D faces
///
/// Triangles repeat the third corner as the fourth.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Solid {
    /// Corners (10-13 / 20-23 / 30-33)
    pub corners: [Vector3; 4],
    /// Thickness (39); not written for 3D faces
    pub thickness: f64,
}

impl Solid {
    pub fn new(corners: [Vector3; 4]) -> Self {
        Solid {
            corners,
            thickness: 0.0,
        }
    }

    /// A triangle, with the last corner repeated
    pub fn triangle(a: Vector3, b: Vector3, c: Vector3) -> Self {
        Solid::new([a, b, c, c])
    }
}

/// Trace records share the solid layout
pub type Trace = Solid;

/// 3D face records share the solid layout
pub type Face3D = Solid;
