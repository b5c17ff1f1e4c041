//! Entity records
//!
//! Plain data carried between the decoder, a
//! [`CreationInterface`](crate::io::dxf::CreationInterface) and the encoder.
//! Sub-record lists (vertices, knots, hatch edges...) are not stored on the
//! headers; they travel beside them in [`Record`](crate::record::Record).

pub mod arc;
pub mod arc_aligned_text;
pub mod attribute_entity;
pub mod block;
pub mod circle;
pub mod dimension;
pub mod ellipse;
pub mod hatch;
pub mod insert;
pub mod leader;
pub mod line;
pub mod mtext;
pub mod point;
pub mod polyline;
pub mod raster_image;
pub mod ray;
pub mod solid;
pub mod spline;
pub mod text;
pub mod xline;

pub use arc::Arc;
pub use arc_aligned_text::ArcAlignedText;
pub use attribute_entity::AttributeEntity;
pub use block::Block;
pub use circle::Circle;
pub use dimension::*;
pub use ellipse::Ellipse;
pub use hatch::{BoundaryPathFlags, BoundaryVertex, Hatch, HatchBoundary, HatchEdge, HatchLoop, SplineEdge};
pub use insert::Insert;
pub use leader::Leader;
pub use line::Line;
pub use mtext::{MText, MTEXT_CHUNK_LEN};
pub use point::Point;
pub use polyline::{Polyline, PolylineFlags, Vertex};
pub use raster_image::RasterImage;
pub use ray::Ray;
pub use solid::{Face3D, Solid, Trace};
pub use spline::{ControlPoint, Spline, SplineFlags};
pub use text::Text;
pub use xline::XLine;
