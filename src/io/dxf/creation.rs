//! Callback contract between the decoder and its consumer
//!
//! The decoder never builds a document. It calls one method per completed
//! record on a [`CreationInterface`], followed by the record's sub-records
//! and, for entities, [`CreationInterface::end_entity`]. Every method has an
//! empty default body, so an implementor overrides only what it needs.
//!
//! Before each record callback the decoder pushes the presentation state
//! through [`CreationInterface::set_attributes`] and
//! [`CreationInterface::set_extrusion`].

use crate::attributes::{Attributes, Extrusion};
use crate::entities::*;
use crate::header::HeaderValue;
use crate::objects::{Dictionary, DictionaryEntry, ImageDefinition};
use crate::tables::{Layer, LineType, TextStyle};
use crate::types::Vector3;

/// Receiver of decoded records
#[allow(unused_variables)]
pub trait CreationInterface {
    // Structure

    /// `0/SECTION` followed by its name (2)
    fn begin_section(&mut self, name: &str) {}
    /// `0/ENDSEC`
    fn end_section(&mut self) {}
    /// `0/TABLE` followed by its name (2)
    fn begin_table(&mut self, name: &str) {}
    /// `0/ENDTAB`
    fn end_table(&mut self) {}
    /// A header variable (9) and its value
    fn set_variable(&mut self, name: &str, value: &HeaderValue) {}
    /// A comment (999)
    fn add_comment(&mut self, comment: &str) {}

    // Tables

    fn add_layer(&mut self, layer: &Layer) {}
    fn add_linetype(&mut self, line_type: &LineType) {}
    /// One dash length (49) of the last line type
    fn add_linetype_dash(&mut self, length: f64) {}
    fn add_text_style(&mut self, style: &TextStyle) {}
    fn add_block(&mut self, block: &Block) {}
    fn end_block(&mut self) {}

    // Geometry

    fn add_point(&mut self, point: &Point) {}
    fn add_line(&mut self, line: &Line) {}
    fn add_xline(&mut self, xline: &XLine) {}
    fn add_ray(&mut self, ray: &Ray) {}
    fn add_arc(&mut self, arc: &Arc) {}
    fn add_circle(&mut self, circle: &Circle) {}
    fn add_ellipse(&mut self, ellipse: &Ellipse) {}

    /// Header of an `LWPOLYLINE` or classic `POLYLINE`
    fn add_polyline(&mut self, polyline: &Polyline) {}
    fn add_vertex(&mut self, vertex: &Vertex) {}

    fn add_spline(&mut self, spline: &Spline) {}
    fn add_knot(&mut self, knot: f64) {}
    fn add_control_point(&mut self, point: &ControlPoint) {}
    fn add_fit_point(&mut self, point: &Vector3) {}

    fn add_insert(&mut self, insert: &Insert) {}
    fn add_trace(&mut self, trace: &Trace) {}
    fn add_solid(&mut self, solid: &Solid) {}
    fn add_3d_face(&mut self, face: &Face3D) {}

    // Text

    fn add_mtext(&mut self, mtext: &MText) {}
    fn add_text(&mut self, text: &Text) {}
    fn add_attribute(&mut self, attribute: &AttributeEntity) {}
    fn add_arc_aligned_text(&mut self, text: &ArcAlignedText) {}

    // Dimensions

    fn add_dim_linear(&mut self, common: &DimensionCommon, dim: &LinearDimension) {}
    fn add_dim_aligned(&mut self, common: &DimensionCommon, dim: &AlignedDimension) {}
    fn add_dim_radial(&mut self, common: &DimensionCommon, dim: &RadialDimension) {}
    fn add_dim_diametric(&mut self, common: &DimensionCommon, dim: &DiametricDimension) {}
    fn add_dim_angular(&mut self, common: &DimensionCommon, dim: &AngularDimension) {}
    fn add_dim_angular_3p(&mut self, common: &DimensionCommon, dim: &Angular3PointDimension) {}
    fn add_dim_ordinate(&mut self, common: &DimensionCommon, dim: &OrdinateDimension) {}

    // Leader and hatch

    fn add_leader(&mut self, leader: &Leader) {}
    fn add_leader_vertex(&mut self, vertex: &Vector3) {}
    fn add_hatch(&mut self, hatch: &Hatch) {}
    /// Start of a boundary loop; its edges follow
    fn add_hatch_loop(&mut self, hatch_loop: &HatchLoop) {}
    fn add_hatch_edge(&mut self, edge: &HatchEdge) {}

    // Images and objects

    fn add_image(&mut self, image: &RasterImage) {}
    /// An image definition, matched to images by handle
    fn link_image(&mut self, definition: &ImageDefinition) {}
    fn add_dictionary(&mut self, dictionary: &Dictionary) {}
    fn add_dictionary_entry(&mut self, entry: &DictionaryEntry) {}
    /// Start of an XRecord; its payload values follow
    fn add_xrecord(&mut self, handle: &str) {}
    fn add_xrecord_string(&mut self, code: i32, value: &str) {}
    fn add_xrecord_real(&mut self, code: i32, value: f64) {}
    fn add_xrecord_int(&mut self, code: i32, value: i64) {}
    fn add_xrecord_bool(&mut self, code: i32, value: bool) {}

    // Extended data; delivered as it arrives, before the owning record

    fn add_xdata_app(&mut self, name: &str) {}
    fn add_xdata_string(&mut self, code: i32, value: &str) {}
    fn add_xdata_real(&mut self, code: i32, value: f64) {}
    fn add_xdata_int(&mut self, code: i32, value: i32) {}

    // Control

    /// End of an entity and all of its sub-records
    fn end_entity(&mut self) {}
    /// `0/SEQEND`
    fn end_sequence(&mut self) {}
    /// A record type the decoder does not model, with its raw pairs
    fn add_unknown(&mut self, type_name: &str, pairs: &[(i32, String)]) {}
    /// Every pair, before the decoder interprets it
    fn process_code_value_pair(&mut self, code: i32, value: &str) {}

    // State

    fn set_attributes(&mut self, attributes: &Attributes) {}
    fn attributes(&self) -> Option<&Attributes> {
        None
    }
    fn set_extrusion(&mut self, extrusion: &Extrusion) {}
    fn extrusion(&self) -> Option<&Extrusion> {
        None
    }
}

/// A receiver that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCreation;

impl CreationInterface for NullCreation {}
