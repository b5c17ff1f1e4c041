//! Polylines and their vertices
//!
//! The same records describe both wire forms: the compact `LWPOLYLINE`,
//! which carries its vertices inline after a declared count (90), and the
//! classic `POLYLINE` followed by `VERTEX` entities and a closing `SEQEND`.

use crate::types::Vector3;
use bitflags::bitflags;

bitflags! {
    /// Polyline flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PolylineFlags: i16 {
        /// Closed polyline (or mesh closed in M direction)
        const CLOSED = 1;
        /// Curve-fit vertices added
        const CURVE_FIT = 2;
        /// Spline-fit vertices added
        const SPLINE_FIT = 4;
        /// 3D polyline
        const POLYLINE_3D = 8;
        /// 3D polygon mesh
        const POLYGON_MESH = 16;
        /// Mesh closed in N direction
        const MESH_CLOSED_N = 32;
        /// Polyface mesh
        const POLYFACE_MESH = 64;
        /// Line type pattern generated continuously around vertices
        const CONTINUOUS_PATTERN = 128;
    }
}

impl PolylineFlags {
    /// Flags that cannot be expressed by the compact `LWPOLYLINE` form
    pub const NON_PLANAR: PolylineFlags = PolylineFlags::POLYLINE_3D
        .union(PolylineFlags::POLYGON_MESH)
        .union(PolylineFlags::POLYFACE_MESH);
}

/// Polyline header
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Polyline {
    /// Number of vertices; announced up front for `LWPOLYLINE`, counted
    /// afterwards for the classic form
    pub vertex_count: usize,
    /// Mesh vertex count in M direction (71)
    pub m: i32,
    /// Mesh vertex count in N direction (72)
    pub n: i32,
    /// Flags (70)
    pub flags: PolylineFlags,
    /// Elevation (38 for `LWPOLYLINE`, z of 10/20/30 for `POLYLINE`)
    pub elevation: f64,
}

impl Polyline {
    pub fn new(flags: PolylineFlags) -> Self {
        Polyline {
            flags,
            ..Default::default()
        }
    }

    pub fn is_closed(&self) -> bool {
        self.flags.contains(PolylineFlags::CLOSED)
    }

    /// Whether the polyline needs the classic `POLYLINE`/`VERTEX` form
    pub fn is_non_planar(&self) -> bool {
        self.flags.intersects(PolylineFlags::NON_PLANAR)
    }
}

/// A polyline vertex
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    /// Location (10/20/30)
    pub location: Vector3,
    /// Bulge of the following segment (42); 0 is straight
    pub bulge: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64, z: f64, bulge: f64) -> Self {
        Vertex {
            location: Vector3::new(x, y, z),
            bulge,
        }
    }
}
