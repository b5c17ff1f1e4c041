//! Hatch entity and boundary path types
//!
//! A hatch arrives as one header, a declared number of boundary loops (91)
//! and, per loop, a declared number of edges (93). Polyline loops carry a
//! single [`HatchEdge::Polyline`] edge holding all their vertices.

use super::spline::ControlPoint;
use crate::types::Vector3;
use bitflags::bitflags;

bitflags! {
    /// Boundary path flags (group code 92)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BoundaryPathFlags: i32 {
        const EXTERNAL = 1;
        const POLYLINE = 2;
        const DERIVED = 4;
        const TEXTBOX = 8;
        const OUTERMOST = 16;
    }
}

/// Hatch header
#[derive(Debug, Clone, PartialEq)]
pub struct Hatch {
    /// Number of boundary loops (91)
    pub loop_count: usize,
    /// Solid fill (70)
    pub solid: bool,
    /// Pattern scale (41)
    pub scale: f64,
    /// Pattern angle in degrees (52)
    pub angle: f64,
    /// Pattern name (2)
    pub pattern: String,
    /// Pattern origin, carried in the ACAD extended data (1010/1020)
    pub origin: Vector3,
}

impl Hatch {
    /// A solid fill
    pub fn solid() -> Self {
        Hatch {
            loop_count: 0,
            solid: true,
            scale: 1.0,
            angle: 0.0,
            pattern: "SOLID".to_string(),
            origin: Vector3::ZERO,
        }
    }

    /// A predefined pattern fill
    pub fn pattern(name: impl Into<String>, scale: f64, angle: f64) -> Self {
        Hatch {
            loop_count: 0,
            solid: false,
            scale,
            angle,
            pattern: name.into(),
            origin: Vector3::ZERO,
        }
    }
}

/// Boundary loop header
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HatchLoop {
    /// Boundary path flags (92)
    pub flags: BoundaryPathFlags,
    /// Number of edges delivered for this loop
    pub edge_count: usize,
}

impl HatchLoop {
    pub fn is_polyline(&self) -> bool {
        self.flags.contains(BoundaryPathFlags::POLYLINE)
    }
}

/// Vertex of a polyline boundary
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundaryVertex {
    pub x: f64,
    pub y: f64,
    pub bulge: f64,
}

impl BoundaryVertex {
    pub fn new(x: f64, y: f64, bulge: f64) -> Self {
        BoundaryVertex { x, y, bulge }
    }
}

/// Spline boundary edge
#[derive(Debug, Clone, PartialEq)]
pub struct SplineEdge {
    /// Degree (94)
    pub degree: i32,
    /// Rational (73); weights (42) are written only when set
    pub rational: bool,
    /// Periodic (74)
    pub periodic: bool,
    /// Knot values (40)
    pub knots: Vec<f64>,
    /// Control points (10/20, weight 42)
    pub control_points: Vec<ControlPoint>,
    /// Fit points (11/21)
    pub fit_points: Vec<Vector3>,
    /// Start tangent (12/22)
    pub start_tangent: Vector3,
    /// End tangent (13/23)
    pub end_tangent: Vector3,
}

impl Default for SplineEdge {
    fn default() -> Self {
        SplineEdge {
            degree: 3,
            rational: false,
            periodic: false,
            knots: Vec::new(),
            control_points: Vec::new(),
            fit_points: Vec::new(),
            start_tangent: Vector3::ZERO,
            end_tangent: Vector3::ZERO,
        }
    }
}

/// One boundary edge; angles are in radians (degrees on the wire)
#[derive(Debug, Clone, PartialEq)]
pub enum HatchEdge {
    /// Whole polyline boundary (loops with the POLYLINE flag)
    Polyline {
        closed: bool,
        vertices: Vec<BoundaryVertex>,
    },
    Line {
        start: Vector3,
        end: Vector3,
    },
    CircularArc {
        center: Vector3,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counter_clockwise: bool,
    },
    EllipticArc {
        center: Vector3,
        /// Endpoint of the major axis relative to the center
        major_axis: Vector3,
        ratio: f64,
        start_angle: f64,
        end_angle: f64,
        counter_clockwise: bool,
    },
    Spline(SplineEdge),
}

impl HatchEdge {
    /// Edge type code (72); polyline boundaries have none on the wire
    pub fn type_code(&self) -> i32 {
        match self {
            HatchEdge::Polyline { .. } => 0,
            HatchEdge::Line { .. } => 1,
            HatchEdge::CircularArc { .. } => 2,
            HatchEdge::EllipticArc { .. } => 3,
            HatchEdge::Spline(_) => 4,
        }
    }
}

/// A boundary loop together with its edges
#[derive(Debug, Clone, PartialEq)]
pub struct HatchBoundary {
    pub flags: BoundaryPathFlags,
    pub edges: Vec<HatchEdge>,
}

impl HatchBoundary {
    /// Boundary made of individual edges
    pub fn edges(edges: Vec<HatchEdge>) -> Self {
        HatchBoundary {
            flags: BoundaryPathFlags::EXTERNAL,
            edges,
        }
    }

    /// Boundary made of one polyline
    pub fn polyline(closed: bool, vertices: Vec<BoundaryVertex>) -> Self {
        HatchBoundary {
            flags: BoundaryPathFlags::EXTERNAL | BoundaryPathFlags::POLYLINE,
            edges: vec![HatchEdge::Polyline { closed, vertices }],
        }
    }

    /// Loop header as delivered to a creation interface
    pub fn header(&self) -> HatchLoop {
        HatchLoop {
            flags: self.flags,
            edge_count: self.edges.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_boundary() {
        let b = HatchBoundary::polyline(true, vec![BoundaryVertex::new(0.0, 0.0, 0.0)]);
        assert!(b.header().is_polyline());
        assert_eq!(b.header().edge_count, 1);
        assert_eq!(b.edges[0].type_code(), 0);
    }

    #[test]
    fn test_edge_type_codes() {
        let line = HatchEdge::Line {
            start: Vector3::ZERO,
            end: Vector3::UNIT_X,
        };
        assert_eq!(line.type_code(), 1);
        assert_eq!(HatchEdge::Spline(SplineEdge::default()).type_code(), 4);
    }
}
