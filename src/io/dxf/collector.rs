//! Record-building creation interface
//!
//! [`RecordCollector`] turns the callback stream of a decode back into
//! owned [`RecordEntry`] values. A header callback opens a pending entry;
//! sub-record callbacks extend it; it is closed by `end_entity`, by the next
//! header callback or by [`RecordCollector::into_records`].
//!
//! Extended data arrives while a record is parsed, before its header
//! callback. `set_attributes` marks the record boundary: the data received
//! since the previous boundary goes to the record delivered next, and data
//! no record claims (a `VERTEX`, a skipped table entry) is dropped there.

use crate::attributes::{Attributes, Extrusion};
use crate::entities::*;
use crate::header::{HeaderValue, HeaderVariables};
use crate::io::dxf::creation::CreationInterface;
use crate::objects::{Dictionary, DictionaryEntry, ImageDefinition, XRecordValue};
use crate::record::{Record, RecordEntry};
use crate::tables::{Layer, LineType, TextStyle};
use crate::types::Vector3;
use crate::xdata::{ExtendedData, XDataValue};

/// Everything a collector gathered from one stream
#[derive(Debug, Clone, Default)]
pub struct CollectedRecords {
    /// Header variables in stream order
    pub header: HeaderVariables,
    /// Records in stream order
    pub entries: Vec<RecordEntry>,
    /// 999 comments
    pub comments: Vec<String>,
}

impl CollectedRecords {
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.entries.iter().map(|e| &e.record)
    }

    pub fn version_string(&self) -> Option<&str> {
        self.header.get("$ACADVER").and_then(HeaderValue::as_str)
    }
}

/// [`CreationInterface`] that keeps every record it receives
#[derive(Debug, Default)]
pub struct RecordCollector {
    collected: CollectedRecords,
    pending: Option<RecordEntry>,
    attributes: Attributes,
    extrusion: Extrusion,
    /// Extended data of the record being delivered
    xdata: ExtendedData,
    /// Extended data received since the last record boundary
    incoming: ExtendedData,
}

impl RecordCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records completed so far
    pub fn entries(&self) -> &[RecordEntry] {
        &self.collected.entries
    }

    pub fn header(&self) -> &HeaderVariables {
        &self.collected.header
    }

    pub fn comments(&self) -> &[String] {
        &self.collected.comments
    }

    pub fn into_records(mut self) -> CollectedRecords {
        self.complete();
        self.collected
    }

    pub fn into_entries(self) -> Vec<RecordEntry> {
        self.into_records().entries
    }

    fn begin(&mut self, record: Record) {
        self.complete();
        self.pending = Some(RecordEntry {
            record,
            attributes: self.attributes.clone(),
            extrusion: self.extrusion,
            xdata: std::mem::take(&mut self.xdata),
        });
    }

    fn complete(&mut self) {
        let Some(mut entry) = self.pending.take() else {
            return;
        };
        match &mut entry.record {
            Record::Polyline { polyline, vertices } => polyline.vertex_count = vertices.len(),
            Record::LineType { line_type, dashes } => line_type.dash_count = dashes.len(),
            Record::Spline {
                spline,
                knots,
                control_points,
                fit_points,
            } => {
                spline.knot_count = knots.len();
                spline.control_point_count = control_points.len();
                spline.fit_point_count = fit_points.len();
            }
            Record::Leader { leader, vertices } => leader.vertex_count = vertices.len(),
            Record::Hatch { hatch, loops } => hatch.loop_count = loops.len(),
            _ => {}
        }
        self.collected.entries.push(entry);
    }

    fn pending_record(&mut self) -> Option<&mut Record> {
        self.pending.as_mut().map(|e| &mut e.record)
    }

    fn dimension(&mut self, common: &DimensionCommon, kind: DimensionKind) {
        self.begin(Record::Dimension(Dimension::new(common.clone(), kind)));
    }

    fn xdata_item(&mut self, code: i32, value: XDataValue) {
        self.incoming.push(code, value);
    }
}

impl CreationInterface for RecordCollector {
    fn set_variable(&mut self, name: &str, value: &HeaderValue) {
        self.collected.header.insert(name.to_string(), value.clone());
    }

    fn add_comment(&mut self, comment: &str) {
        self.collected.comments.push(comment.to_string());
    }

    fn add_layer(&mut self, layer: &Layer) {
        self.begin(Record::Layer(layer.clone()));
    }

    fn add_linetype(&mut self, line_type: &LineType) {
        self.begin(Record::LineType {
            line_type: line_type.clone(),
            dashes: Vec::with_capacity(line_type.dash_count),
        });
    }

    fn add_linetype_dash(&mut self, length: f64) {
        if let Some(Record::LineType { dashes, .. }) = self.pending_record() {
            dashes.push(length);
        }
    }

    fn add_text_style(&mut self, style: &TextStyle) {
        self.begin(Record::TextStyle(style.clone()));
    }

    fn add_block(&mut self, block: &Block) {
        self.begin(Record::Block(block.clone()));
    }

    fn end_block(&mut self) {
        self.begin(Record::EndBlock);
        self.complete();
    }

    fn add_point(&mut self, point: &Point) {
        self.begin(Record::Point(*point));
    }

    fn add_line(&mut self, line: &Line) {
        self.begin(Record::Line(*line));
    }

    fn add_xline(&mut self, xline: &XLine) {
        self.begin(Record::XLine(*xline));
    }

    fn add_ray(&mut self, ray: &Ray) {
        self.begin(Record::Ray(*ray));
    }

    fn add_arc(&mut self, arc: &Arc) {
        self.begin(Record::Arc(*arc));
    }

    fn add_circle(&mut self, circle: &Circle) {
        self.begin(Record::Circle(*circle));
    }

    fn add_ellipse(&mut self, ellipse: &Ellipse) {
        self.begin(Record::Ellipse(*ellipse));
    }

    fn add_polyline(&mut self, polyline: &Polyline) {
        self.begin(Record::Polyline {
            polyline: *polyline,
            vertices: Vec::with_capacity(polyline.vertex_count),
        });
    }

    fn add_vertex(&mut self, vertex: &Vertex) {
        self.xdata.clear();
        if let Some(Record::Polyline { vertices, .. }) = self.pending_record() {
            vertices.push(*vertex);
        }
    }

    fn add_spline(&mut self, spline: &Spline) {
        self.begin(Record::Spline {
            spline: *spline,
            knots: Vec::with_capacity(spline.knot_count),
            control_points: Vec::with_capacity(spline.control_point_count),
            fit_points: Vec::with_capacity(spline.fit_point_count),
        });
    }

    fn add_knot(&mut self, knot: f64) {
        if let Some(Record::Spline { knots, .. }) = self.pending_record() {
            knots.push(knot);
        }
    }

    fn add_control_point(&mut self, point: &ControlPoint) {
        if let Some(Record::Spline { control_points, .. }) = self.pending_record() {
            control_points.push(*point);
        }
    }

    fn add_fit_point(&mut self, point: &Vector3) {
        if let Some(Record::Spline { fit_points, .. }) = self.pending_record() {
            fit_points.push(*point);
        }
    }

    fn add_insert(&mut self, insert: &Insert) {
        self.begin(Record::Insert(insert.clone()));
    }

    fn add_trace(&mut self, trace: &Trace) {
        self.begin(Record::Trace(*trace));
    }

    fn add_solid(&mut self, solid: &Solid) {
        self.begin(Record::Solid(*solid));
    }

    fn add_3d_face(&mut self, face: &Face3D) {
        self.begin(Record::Face3D(*face));
    }

    fn add_mtext(&mut self, mtext: &MText) {
        self.begin(Record::MText(mtext.clone()));
    }

    fn add_text(&mut self, text: &Text) {
        self.begin(Record::Text(text.clone()));
    }

    fn add_attribute(&mut self, attribute: &AttributeEntity) {
        self.begin(Record::Attribute(attribute.clone()));
    }

    fn add_arc_aligned_text(&mut self, text: &ArcAlignedText) {
        self.begin(Record::ArcAlignedText(text.clone()));
    }

    fn add_dim_linear(&mut self, common: &DimensionCommon, dim: &LinearDimension) {
        self.dimension(common, DimensionKind::Linear(*dim));
    }

    fn add_dim_aligned(&mut self, common: &DimensionCommon, dim: &AlignedDimension) {
        self.dimension(common, DimensionKind::Aligned(*dim));
    }

    fn add_dim_radial(&mut self, common: &DimensionCommon, dim: &RadialDimension) {
        self.dimension(common, DimensionKind::Radial(*dim));
    }

    fn add_dim_diametric(&mut self, common: &DimensionCommon, dim: &DiametricDimension) {
        self.dimension(common, DimensionKind::Diametric(*dim));
    }

    fn add_dim_angular(&mut self, common: &DimensionCommon, dim: &AngularDimension) {
        self.dimension(common, DimensionKind::Angular(*dim));
    }

    fn add_dim_angular_3p(&mut self, common: &DimensionCommon, dim: &Angular3PointDimension) {
        self.dimension(common, DimensionKind::Angular3Point(*dim));
    }

    fn add_dim_ordinate(&mut self, common: &DimensionCommon, dim: &OrdinateDimension) {
        self.dimension(common, DimensionKind::Ordinate(*dim));
    }

    fn add_leader(&mut self, leader: &Leader) {
        self.begin(Record::Leader {
            leader: *leader,
            vertices: Vec::with_capacity(leader.vertex_count),
        });
    }

    fn add_leader_vertex(&mut self, vertex: &Vector3) {
        if let Some(Record::Leader { vertices, .. }) = self.pending_record() {
            vertices.push(*vertex);
        }
    }

    fn add_hatch(&mut self, hatch: &Hatch) {
        self.begin(Record::Hatch {
            hatch: hatch.clone(),
            loops: Vec::with_capacity(hatch.loop_count),
        });
    }

    fn add_hatch_loop(&mut self, hatch_loop: &HatchLoop) {
        if let Some(Record::Hatch { loops, .. }) = self.pending_record() {
            loops.push(HatchBoundary {
                flags: hatch_loop.flags,
                edges: Vec::with_capacity(hatch_loop.edge_count),
            });
        }
    }

    fn add_hatch_edge(&mut self, edge: &HatchEdge) {
        if let Some(Record::Hatch { loops, .. }) = self.pending_record() {
            if let Some(boundary) = loops.last_mut() {
                boundary.edges.push(edge.clone());
            }
        }
    }

    fn add_image(&mut self, image: &RasterImage) {
        self.begin(Record::Image(image.clone()));
    }

    fn link_image(&mut self, definition: &ImageDefinition) {
        self.begin(Record::ImageDefinition(definition.clone()));
    }

    fn add_dictionary(&mut self, dictionary: &Dictionary) {
        self.begin(Record::Dictionary {
            dictionary: dictionary.clone(),
            entries: Vec::new(),
        });
    }

    fn add_dictionary_entry(&mut self, entry: &DictionaryEntry) {
        if let Some(Record::Dictionary { entries, .. }) = self.pending_record() {
            entries.push(entry.clone());
        }
    }

    /// Called while the record is still being parsed, so no extended data
    /// can belong to it yet
    fn add_xrecord(&mut self, handle: &str) {
        self.xdata.clear();
        self.begin(Record::XRecord {
            handle: handle.to_string(),
            values: Vec::new(),
        });
    }

    fn add_xrecord_string(&mut self, code: i32, value: &str) {
        if let Some(Record::XRecord { values, .. }) = self.pending_record() {
            values.push(XRecordValue::string(code, value));
        }
    }

    fn add_xrecord_real(&mut self, code: i32, value: f64) {
        if let Some(Record::XRecord { values, .. }) = self.pending_record() {
            values.push(XRecordValue::real(code, value));
        }
    }

    fn add_xrecord_int(&mut self, code: i32, value: i64) {
        if let Some(Record::XRecord { values, .. }) = self.pending_record() {
            values.push(XRecordValue::int(code, value));
        }
    }

    fn add_xrecord_bool(&mut self, code: i32, value: bool) {
        if let Some(Record::XRecord { values, .. }) = self.pending_record() {
            values.push(XRecordValue::boolean(code, value));
        }
    }

    fn add_xdata_app(&mut self, name: &str) {
        self.incoming.begin_app(name);
    }

    fn add_xdata_string(&mut self, code: i32, value: &str) {
        self.xdata_item(code, XDataValue::String(value.to_string()));
    }

    fn add_xdata_real(&mut self, code: i32, value: f64) {
        self.xdata_item(code, XDataValue::Real(value));
    }

    fn add_xdata_int(&mut self, code: i32, value: i32) {
        self.xdata_item(code, XDataValue::Integer(value));
    }

    fn end_entity(&mut self) {
        self.complete();
    }

    fn add_unknown(&mut self, type_name: &str, pairs: &[(i32, String)]) {
        self.begin(Record::Unknown {
            type_name: type_name.to_string(),
            pairs: pairs.to_vec(),
        });
        self.complete();
    }

    fn set_attributes(&mut self, attributes: &Attributes) {
        self.attributes = attributes.clone();
        self.xdata = std::mem::take(&mut self.incoming);
    }

    fn attributes(&self) -> Option<&Attributes> {
        Some(&self.attributes)
    }

    fn set_extrusion(&mut self, extrusion: &Extrusion) {
        self.extrusion = *extrusion;
    }

    fn extrusion(&self) -> Option<&Extrusion> {
        Some(&self.extrusion)
    }
}
