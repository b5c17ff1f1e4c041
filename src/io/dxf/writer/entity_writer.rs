//! Per-record writers of [`DxfEncoder`]
//!
//! Each writer emits the pairs the decoder reads back into the same record.
//! Angles stored in radians (text rotation, hatch edge arcs) go out in
//! degrees; the others are written as stored. `ARCALIGNEDTEXT` keeps its
//! radians on the wire.

use tracing::debug;

use crate::attributes::Attributes;
use crate::entities::*;
use crate::error::Result;
use crate::notification::NotificationType;
use crate::objects::{Dictionary, DictionaryEntry, ImageDefinition, XRecordData, XRecordValue};
use crate::record::{Record, RecordEntry};
use crate::tables::{Layer, LineType, TextStyle};
use crate::types::{Color, DxfVersion, LineWeight, Vector3};
use crate::xdata::{XDataItem, XDataValue};

use super::encoder::DxfEncoder;
use super::stream_writer::{DxfStreamWriter, DxfStreamWriterExt};

impl<W: DxfStreamWriter> DxfEncoder<W> {
    /// Write a record with its extrusion and extended data
    pub fn write_entry(&mut self, entry: &RecordEntry) -> Result<()> {
        self.extrusion = entry.extrusion;
        self.xdata = entry.xdata.clone();
        let result = self.write_record(&entry.record, &entry.attributes);
        self.extrusion = Default::default();
        self.xdata.clear();
        result
    }

    /// Write one record
    ///
    /// Kinds an R12 reader does not know are still written for legacy
    /// targets, with an `UnsupportedVersionFeature` notification.
    pub fn write_record(&mut self, record: &Record, attributes: &Attributes) -> Result<()> {
        if let Some(kind) = record.kind() {
            if self.version.is_legacy() && kind.requires_r13() {
                debug!(record = kind.type_name(), version = %self.version, "record kind newer than target");
                self.notify(
                    NotificationType::UnsupportedVersionFeature,
                    format!("{} is not part of {}", kind.type_name(), self.version),
                );
            }
        }
        match record {
            Record::Layer(layer) => self.write_layer(layer, attributes),
            Record::LineType { line_type, dashes } => self.write_line_type(line_type, dashes),
            Record::TextStyle(style) => self.write_text_style(style),
            Record::Block(block) => self.block_start(block, attributes),
            Record::EndBlock => self.block_end(attributes),
            Record::Point(point) => self.write_point(point, attributes),
            Record::Line(line) => self.write_line(line, attributes),
            Record::XLine(xline) => self.write_xline(xline, attributes),
            Record::Ray(ray) => self.write_ray(ray, attributes),
            Record::Arc(arc) => self.write_arc(arc, attributes),
            Record::Circle(circle) => self.write_circle(circle, attributes),
            Record::Ellipse(ellipse) => self.write_ellipse(ellipse, attributes),
            Record::Polyline { polyline, vertices } => self.write_polyline(polyline, vertices, attributes),
            Record::Spline {
                spline,
                knots,
                control_points,
                fit_points,
            } => self.write_spline(spline, knots, control_points, fit_points, attributes),
            Record::Insert(insert) => self.write_insert(insert, false, attributes),
            Record::Trace(trace) => self.write_solid("TRACE", trace, attributes),
            Record::Solid(solid) => self.write_solid("SOLID", solid, attributes),
            Record::Face3D(face) => self.write_face(face, attributes),
            Record::Text(text) => self.write_text(text, attributes),
            Record::Attribute(attribute) => self.write_attribute(attribute, attributes),
            Record::MText(mtext) => self.write_mtext(mtext, attributes),
            Record::ArcAlignedText(text) => self.write_arc_aligned_text(text, attributes),
            Record::Dimension(dimension) => self.write_dimension(dimension, attributes),
            Record::Leader { leader, vertices } => self.write_leader(leader, vertices, attributes),
            Record::Hatch { hatch, loops } => self.write_hatch(hatch, loops, attributes),
            Record::Image(image) => self.write_image(image, attributes),
            Record::ImageDefinition(definition) => self.write_image_definition(definition),
            Record::Dictionary { dictionary, entries } => self.write_dictionary(dictionary, entries),
            Record::XRecord { handle, values } => self.write_xrecord(handle, values),
            Record::Unknown { type_name, pairs } => self.write_unknown(type_name, pairs),
        }
    }

    // ---- tables ----

    /// `LAYER` entry; an off layer carries a negative color
    pub fn write_layer(&mut self, layer: &Layer, attributes: &Attributes) -> Result<()> {
        self.table_entry("LAYER", "AcDbLayerTableRecord")?;
        self.writer.write_string(2, &layer.name)?;
        self.writer.write_int(70, layer.flags.bits() as i64)?;
        let color = match attributes.color {
            Color::Index(index) => index as i64,
            Color::ByLayer | Color::ByBlock => 7,
        };
        self.writer.write_int(62, if layer.off { -color } else { color })?;
        let line_type = if attributes.line_type_is_bylayer() {
            "CONTINUOUS"
        } else {
            attributes.line_type()
        };
        self.writer.write_string(6, line_type)?;
        let weight = match attributes.line_weight {
            LineWeight::Value(v) if v >= 0 => v,
            _ => LineWeight::Default.value(),
        };
        if self.allows(370, attributes.line_weight.is_explicit()) {
            self.writer.write_int(370, weight as i64)?;
        }
        self.write_xdata()
    }

    /// `LTYPE` entry followed by its dash lengths
    pub fn write_line_type(&mut self, line_type: &LineType, dashes: &[f64]) -> Result<()> {
        self.table_entry("LTYPE", "AcDbLinetypeTableRecord")?;
        self.writer.write_string(2, &line_type.name)?;
        self.writer.write_int(70, line_type.flags as i64)?;
        self.writer.write_string(3, &line_type.description)?;
        self.writer.write_int(72, 65)?;
        self.writer.write_int(73, dashes.len() as i64)?;
        self.writer.write_real(40, line_type.pattern_length)?;
        for dash in dashes {
            self.writer.write_real(49, *dash)?;
            if self.version >= DxfVersion::AC1015 {
                self.writer.write_int(74, 0)?;
            }
        }
        self.write_xdata()
    }

    /// `STYLE` entry; bold and italic travel as ACAD extended data
    pub fn write_text_style(&mut self, style: &TextStyle) -> Result<()> {
        self.table_entry("STYLE", "AcDbTextStyleTableRecord")?;
        self.writer.write_string(2, &style.name)?;
        self.writer.write_int(70, style.flags as i64)?;
        self.writer.write_real(40, style.fixed_height)?;
        self.writer.write_real(41, style.width_factor)?;
        self.writer.write_real(50, style.oblique_angle)?;
        self.writer.write_int(71, style.generation_flags as i64)?;
        self.writer.write_real(42, style.last_height)?;
        self.writer.write_string(3, &style.font_file)?;
        self.writer.write_string(4, &style.big_font_file)?;
        let flags = style.font_flags();
        let acad = if flags != 0 {
            vec![
                XDataItem::new(1000, XDataValue::String(style.name.clone())),
                XDataItem::new(1071, XDataValue::Integer(flags)),
            ]
        } else {
            Vec::new()
        };
        self.write_xdata_with(&acad)
    }

    // ---- simple geometry ----

    pub fn write_point(&mut self, point: &Point, attributes: &Attributes) -> Result<()> {
        self.entity("POINT", attributes)?;
        self.subclass("AcDbPoint")?;
        self.writer.write_point3d(10, point.location)?;
        self.write_extrusion()?;
        self.write_xdata()
    }

    pub fn write_line(&mut self, line: &Line, attributes: &Attributes) -> Result<()> {
        self.entity("LINE", attributes)?;
        self.subclass("AcDbLine")?;
        self.writer.write_point3d(10, line.start)?;
        self.writer.write_point3d(11, line.end)?;
        self.write_extrusion()?;
        self.write_xdata()
    }

    pub fn write_xline(&mut self, xline: &XLine, attributes: &Attributes) -> Result<()> {
        self.entity("XLINE", attributes)?;
        self.subclass("AcDbXline")?;
        self.writer.write_point3d(10, xline.base_point)?;
        self.writer.write_point3d(11, xline.direction)?;
        self.write_xdata()
    }

    pub fn write_ray(&mut self, ray: &Ray, attributes: &Attributes) -> Result<()> {
        self.entity("RAY", attributes)?;
        self.subclass("AcDbRay")?;
        self.writer.write_point3d(10, ray.base_point)?;
        self.writer.write_point3d(11, ray.direction)?;
        self.write_xdata()
    }

    /// Angles of an arc are stored in degrees and written unchanged
    pub fn write_arc(&mut self, arc: &Arc, attributes: &Attributes) -> Result<()> {
        self.entity("ARC", attributes)?;
        self.subclass("AcDbCircle")?;
        self.writer.write_point3d(10, arc.center)?;
        self.writer.write_real(40, arc.radius)?;
        self.write_extrusion()?;
        self.subclass("AcDbArc")?;
        self.writer.write_real(50, arc.start_angle)?;
        self.writer.write_real(51, arc.end_angle)?;
        self.write_xdata()
    }

    pub fn write_circle(&mut self, circle: &Circle, attributes: &Attributes) -> Result<()> {
        self.entity("CIRCLE", attributes)?;
        self.subclass("AcDbCircle")?;
        self.writer.write_point3d(10, circle.center)?;
        self.writer.write_real(40, circle.radius)?;
        self.write_extrusion()?;
        self.write_xdata()
    }

    pub fn write_ellipse(&mut self, ellipse: &Ellipse, attributes: &Attributes) -> Result<()> {
        self.entity("ELLIPSE", attributes)?;
        self.subclass("AcDbEllipse")?;
        self.writer.write_point3d(10, ellipse.center)?;
        self.writer.write_point3d(11, ellipse.major_axis)?;
        self.write_extrusion()?;
        self.writer.write_real(40, ellipse.ratio)?;
        self.writer.write_real(41, ellipse.start_parameter)?;
        self.writer.write_real(42, ellipse.end_parameter)?;
        self.write_xdata()
    }

    /// `SOLID` or `TRACE`
    pub fn write_solid(&mut self, type_name: &str, solid: &Solid, attributes: &Attributes) -> Result<()> {
        self.entity(type_name, attributes)?;
        self.subclass("AcDbTrace")?;
        self.write_corners(solid)?;
        if solid.thickness != 0.0 {
            self.writer.write_real(39, solid.thickness)?;
        }
        self.write_extrusion()?;
        self.write_xdata()
    }

    pub fn write_face(&mut self, face: &Face3D, attributes: &Attributes) -> Result<()> {
        self.entity("3DFACE", attributes)?;
        self.subclass("AcDbFace")?;
        self.write_corners(face)?;
        self.write_xdata()
    }

    fn write_corners(&mut self, solid: &Solid) -> Result<()> {
        for (i, corner) in solid.corners.iter().enumerate() {
            self.writer.write_point3d(10 + i as i32, *corner)?;
        }
        Ok(())
    }

    // ---- polylines and splines ----

    /// Polyline in the compact form where the target allows it, otherwise
    /// `POLYLINE`, one `VERTEX` per vertex and `SEQEND`
    pub fn write_polyline(&mut self, polyline: &Polyline, vertices: &[Vertex], attributes: &Attributes) -> Result<()> {
        if self.version >= DxfVersion::AC1015 {
            if !polyline.is_non_planar() {
                return self.write_lwpolyline(polyline, vertices, attributes);
            }
            debug!(flags = polyline.flags.bits(), "non-planar polyline kept in classic form");
        }

        let three_d = polyline.flags.contains(PolylineFlags::POLYLINE_3D);
        let mesh = polyline
            .flags
            .intersects(PolylineFlags::POLYGON_MESH | PolylineFlags::POLYFACE_MESH);
        self.entity("POLYLINE", attributes)?;
        let (marker, vertex_marker, vertex_flags) = if mesh {
            ("AcDbPolyFaceMesh", "AcDbPolyFaceMeshVertex", 64 | 128)
        } else if three_d {
            ("AcDb3dPolyline", "AcDb3dPolylineVertex", 32)
        } else {
            ("AcDb2dPolyline", "AcDb2dVertex", 0)
        };
        self.subclass(marker)?;
        self.writer.write_int(66, 1)?;
        self.writer.write_point3d(10, Vector3::new(0.0, 0.0, polyline.elevation))?;
        self.writer.write_int(70, polyline.flags.bits() as i64)?;
        if polyline.m != 0 || polyline.n != 0 {
            self.writer.write_int(71, polyline.m as i64)?;
            self.writer.write_int(72, polyline.n as i64)?;
        }
        self.write_extrusion()?;
        self.write_xdata()?;

        for vertex in vertices {
            self.entity("VERTEX", attributes)?;
            self.subclass("AcDbVertex")?;
            self.subclass(vertex_marker)?;
            self.writer.write_point3d(10, vertex.location)?;
            if vertex.bulge != 0.0 {
                self.writer.write_real(42, vertex.bulge)?;
            }
            self.writer.write_int(70, vertex_flags)?;
        }
        self.write_sequence_end(attributes)
    }

    /// `SEQEND` closing vertices or attributes
    pub fn write_sequence_end(&mut self, attributes: &Attributes) -> Result<()> {
        self.writer.write_record_type("SEQEND")?;
        self.handle()?;
        self.subclass("AcDbEntity")?;
        self.writer.write_string(8, attributes.layer_name())
    }

    fn write_lwpolyline(&mut self, polyline: &Polyline, vertices: &[Vertex], attributes: &Attributes) -> Result<()> {
        self.entity("LWPOLYLINE", attributes)?;
        self.subclass("AcDbPolyline")?;
        self.writer.write_int(90, vertices.len() as i64)?;
        self.writer.write_int(70, polyline.flags.bits() as i64)?;
        if polyline.elevation != 0.0 {
            self.writer.write_real(38, polyline.elevation)?;
        }
        for vertex in vertices {
            self.writer
                .write_point2d(10, vertex.location.x, vertex.location.y)?;
            if vertex.bulge != 0.0 {
                self.writer.write_real(42, vertex.bulge)?;
            }
        }
        self.write_extrusion()?;
        self.write_xdata()
    }

    /// Weights (41) follow every control point once any of them is not 1
    pub fn write_spline(
        &mut self,
        spline: &Spline,
        knots: &[f64],
        control_points: &[ControlPoint],
        fit_points: &[Vector3],
        attributes: &Attributes,
    ) -> Result<()> {
        self.entity("SPLINE", attributes)?;
        self.subclass("AcDbSpline")?;
        self.write_extrusion()?;
        self.writer.write_int(70, spline.flags.bits() as i64)?;
        self.writer.write_int(71, spline.degree as i64)?;
        self.writer.write_int(72, knots.len() as i64)?;
        self.writer.write_int(73, control_points.len() as i64)?;
        self.writer.write_int(74, fit_points.len() as i64)?;
        if spline.start_tangent != Vector3::ZERO {
            self.writer.write_point3d(12, spline.start_tangent)?;
        }
        if spline.end_tangent != Vector3::ZERO {
            self.writer.write_point3d(13, spline.end_tangent)?;
        }
        for knot in knots {
            self.writer.write_real(40, *knot)?;
        }
        let weighted = spline.flags.contains(SplineFlags::RATIONAL)
            || control_points.iter().any(|cp| cp.weight != 1.0);
        for cp in control_points {
            self.writer.write_point3d(10, cp.location)?;
            if weighted {
                self.writer.write_real(41, cp.weight)?;
            }
        }
        for fit in fit_points {
            self.writer.write_point3d(11, *fit)?;
        }
        self.write_xdata()
    }

    // ---- block references and text ----

    /// `INSERT`; with `attributes_follow` the caller writes the `ATTRIB`
    /// records and a closing [`DxfEncoder::write_sequence_end`]
    pub fn write_insert(&mut self, insert: &Insert, attributes_follow: bool, attributes: &Attributes) -> Result<()> {
        self.entity("INSERT", attributes)?;
        self.subclass(if insert.is_array() {
            "AcDbMInsertBlock"
        } else {
            "AcDbBlockReference"
        })?;
        if attributes_follow {
            self.writer.write_int(66, 1)?;
        }
        self.writer.write_string(2, &insert.block_name)?;
        self.writer.write_point3d(10, insert.insert_point)?;
        self.writer.write_real(41, insert.scale.x)?;
        self.writer.write_real(42, insert.scale.y)?;
        self.writer.write_real(43, insert.scale.z)?;
        self.writer.write_real(50, insert.rotation)?;
        if insert.is_array() {
            self.writer.write_int(70, insert.columns as i64)?;
            self.writer.write_int(71, insert.rows as i64)?;
            self.writer.write_real(44, insert.column_spacing)?;
            self.writer.write_real(45, insert.row_spacing)?;
        }
        self.write_extrusion()?;
        self.write_xdata()
    }

    /// `INSERT` entry with its `ATTRIB` entries and the closing `SEQEND`
    pub fn write_insert_sequence(&mut self, entry: &RecordEntry, insert: &Insert, attribs: &[&RecordEntry]) -> Result<()> {
        self.extrusion = entry.extrusion;
        self.xdata = entry.xdata.clone();
        let head = self.write_insert(insert, !attribs.is_empty(), &entry.attributes);
        self.extrusion = Default::default();
        self.xdata.clear();
        head?;
        for attrib in attribs {
            self.write_entry(attrib)?;
        }
        if attribs.is_empty() {
            return Ok(());
        }
        self.write_sequence_end(&entry.attributes)
    }

    /// Fields shared by `TEXT` and `ATTRIB`, up to the second subclass
    fn write_text_body(&mut self, text: &Text) -> Result<()> {
        self.subclass("AcDbText")?;
        self.writer.write_point3d(10, text.insert_point)?;
        self.writer.write_real(40, text.height)?;
        self.writer.write_string(1, &text.value)?;
        self.writer.write_real(50, text.rotation.to_degrees())?;
        self.writer.write_real(41, text.x_scale)?;
        self.writer.write_string(7, &text.style)?;
        self.writer.write_int(71, text.generation_flags as i64)?;
        self.writer.write_int(72, text.horizontal_justification as i64)?;
        let justified = text.horizontal_justification != 0 || text.vertical_justification != 0;
        if justified || text.alignment_point != Vector3::ZERO {
            self.writer.write_point3d(11, text.alignment_point)?;
        }
        self.write_extrusion()
    }

    pub fn write_text(&mut self, text: &Text, attributes: &Attributes) -> Result<()> {
        self.entity("TEXT", attributes)?;
        self.write_text_body(text)?;
        self.subclass("AcDbText")?;
        self.writer.write_int(73, text.vertical_justification as i64)?;
        self.write_xdata()
    }

    /// `ATTRIB`: vertical justification moves to 74, 73 is the field length
    pub fn write_attribute(&mut self, attribute: &AttributeEntity, attributes: &Attributes) -> Result<()> {
        self.entity("ATTRIB", attributes)?;
        self.write_text_body(&attribute.text)?;
        self.subclass("AcDbAttribute")?;
        self.writer.write_string(2, &attribute.tag)?;
        self.writer.write_int(70, attribute.flags as i64)?;
        self.writer
            .write_int(74, attribute.text.vertical_justification as i64)?;
        self.write_xdata()
    }

    /// Text past 250 characters goes out as code-3 chunks before the final
    /// code-1 pair
    pub fn write_mtext(&mut self, mtext: &MText, attributes: &Attributes) -> Result<()> {
        self.entity("MTEXT", attributes)?;
        self.subclass("AcDbMText")?;
        self.writer.write_point3d(10, mtext.insert_point)?;
        self.writer.write_real(40, mtext.height)?;
        self.writer.write_real(41, mtext.width)?;
        self.writer.write_int(71, mtext.attachment_point as i64)?;
        self.writer.write_int(72, mtext.drawing_direction as i64)?;
        let chunks = mtext.chunks();
        if let Some((last, head)) = chunks.split_last() {
            for chunk in head {
                self.writer.write_string(3, chunk)?;
            }
            self.writer.write_string(1, last)?;
        }
        self.writer.write_string(7, &mtext.style)?;
        self.write_extrusion()?;
        self.writer.write_point3d(11, mtext.direction)?;
        self.writer.write_real(50, mtext.rotation.to_degrees())?;
        self.writer.write_int(73, mtext.line_spacing_style as i64)?;
        self.writer.write_real(44, mtext.line_spacing_factor)?;
        self.write_xdata()
    }

    /// `ARCALIGNEDTEXT`; the arc reference (330) needs R2000 or later
    pub fn write_arc_aligned_text(&mut self, text: &ArcAlignedText, attributes: &Attributes) -> Result<()> {
        self.entity("ARCALIGNEDTEXT", attributes)?;
        self.subclass("AcDbArcAlignedText")?;
        self.writer.write_string(1, &text.value)?;
        self.writer.write_string(2, &text.font)?;
        self.writer.write_string(7, &text.style)?;
        self.writer.write_point3d(10, text.center)?;
        self.writer.write_real(40, text.radius)?;
        self.writer.write_real(41, text.x_scale)?;
        self.writer.write_real(42, text.height)?;
        self.writer.write_real(43, text.spacing)?;
        self.writer.write_real(44, text.offset)?;
        self.writer.write_real(45, text.right_offset)?;
        self.writer.write_real(46, text.left_offset)?;
        self.writer.write_real(50, text.start_angle)?;
        self.writer.write_real(51, text.end_angle)?;
        self.writer.write_bool(70, text.reversed)?;
        self.writer.write_int(71, text.direction as i64)?;
        self.writer.write_int(72, text.alignment as i64)?;
        self.writer.write_int(73, text.side as i64)?;
        self.writer.write_bool(74, text.bold)?;
        self.writer.write_bool(75, text.italic)?;
        self.writer.write_bool(76, text.underline)?;
        self.writer.write_int(77, text.character_set as i64)?;
        self.writer.write_int(78, text.pitch as i64)?;
        self.writer.write_bool(79, text.shx_font)?;
        self.writer.write_bool(280, text.wizard)?;
        let arc = text.arc_handle.trim();
        if self.allows(330, !arc.is_empty()) && !arc.is_empty() {
            self.writer.write_string(330, arc)?;
        }
        self.write_extrusion()?;
        self.write_xdata()
    }

    // ---- annotations ----

    pub fn write_dimension(&mut self, dimension: &Dimension, attributes: &Attributes) -> Result<()> {
        let common = &dimension.common;
        self.entity("DIMENSION", attributes)?;
        self.subclass("AcDbDimension")?;
        self.writer.write_point3d(10, common.definition_point)?;
        self.writer.write_point3d(11, common.text_middle_point)?;
        self.writer.write_int(70, dimension.type_flags() as i64)?;
        self.writer.write_int(71, common.attachment_point as i64)?;
        self.writer.write_int(72, common.line_spacing_style as i64)?;
        self.writer.write_real(41, common.line_spacing_factor)?;
        self.writer.write_string(1, &common.text)?;
        self.writer.write_string(3, &common.style)?;
        if common.text_rotation != 0.0 {
            self.writer.write_real(53, common.text_rotation)?;
        }
        self.write_extrusion()?;

        self.subclass(dimension.kind.subclass_marker())?;
        match &dimension.kind {
            DimensionKind::Linear(linear) => {
                self.writer.write_point3d(13, linear.first_point)?;
                self.writer.write_point3d(14, linear.second_point)?;
                self.writer.write_real(50, linear.rotation)?;
                if linear.oblique != 0.0 {
                    self.writer.write_real(52, linear.oblique)?;
                }
                self.subclass("AcDbRotatedDimension")?;
            }
            DimensionKind::Aligned(aligned) => {
                self.writer.write_point3d(13, aligned.first_point)?;
                self.writer.write_point3d(14, aligned.second_point)?;
            }
            DimensionKind::Angular(angular) => {
                self.writer.write_point3d(13, angular.first_line_start)?;
                self.writer.write_point3d(14, angular.first_line_end)?;
                self.writer.write_point3d(15, angular.second_line_start)?;
                self.writer.write_point3d(16, angular.arc_point)?;
            }
            DimensionKind::Diametric(DiametricDimension {
                definition_point,
                leader_length,
            })
            | DimensionKind::Radial(RadialDimension {
                definition_point,
                leader_length,
            }) => {
                self.writer.write_point3d(15, *definition_point)?;
                self.writer.write_real(40, *leader_length)?;
            }
            DimensionKind::Angular3Point(angular) => {
                self.writer.write_point3d(13, angular.first_point)?;
                self.writer.write_point3d(14, angular.second_point)?;
                self.writer.write_point3d(15, angular.vertex)?;
            }
            DimensionKind::Ordinate(ordinate) => {
                self.writer.write_point3d(13, ordinate.feature_point)?;
                self.writer.write_point3d(14, ordinate.leader_end_point)?;
            }
        }
        self.write_xdata()
    }

    pub fn write_leader(&mut self, leader: &Leader, vertices: &[Vector3], attributes: &Attributes) -> Result<()> {
        self.entity("LEADER", attributes)?;
        self.subclass("AcDbLeader")?;
        self.writer.write_string(3, "Standard")?;
        self.writer.write_int(71, leader.arrow_head as i64)?;
        self.writer.write_int(72, leader.path_type as i64)?;
        self.writer.write_int(73, leader.creation_flag as i64)?;
        self.writer.write_int(74, leader.hookline_direction as i64)?;
        self.writer.write_int(75, leader.hookline as i64)?;
        self.writer.write_real(40, leader.text_height)?;
        self.writer.write_real(41, leader.text_width)?;
        self.writer.write_int(76, vertices.len() as i64)?;
        for vertex in vertices {
            self.writer.write_point3d(10, *vertex)?;
        }
        self.write_extrusion()?;
        self.write_xdata()
    }

    /// `HATCH` with its loops; the pattern origin goes to the ACAD
    /// extended data
    pub fn write_hatch(&mut self, hatch: &Hatch, loops: &[HatchBoundary], attributes: &Attributes) -> Result<()> {
        self.entity("HATCH", attributes)?;
        self.subclass("AcDbHatch")?;
        self.writer
            .write_point3d(10, Vector3::new(0.0, 0.0, self.extrusion.elevation))?;
        self.writer.write_point3d(210, self.extrusion.direction)?;
        self.writer.write_string(2, &hatch.pattern)?;
        self.writer.write_bool(70, hatch.solid)?;
        self.writer.write_int(71, 0)?;
        self.writer.write_int(91, loops.len() as i64)?;
        for boundary in loops {
            self.write_hatch_loop(boundary)?;
        }
        self.writer.write_int(75, 0)?;
        self.writer.write_int(76, 1)?;
        if !hatch.solid {
            self.writer.write_real(52, hatch.angle)?;
            self.writer.write_real(41, hatch.scale)?;
            self.writer.write_int(77, 0)?;
            self.writer.write_int(78, 0)?;
        }
        self.writer.write_int(98, 0)?;
        let acad = if hatch.origin != Vector3::ZERO {
            vec![
                XDataItem::new(1010, XDataValue::Real(hatch.origin.x)),
                XDataItem::new(1020, XDataValue::Real(hatch.origin.y)),
                XDataItem::new(1030, XDataValue::Real(hatch.origin.z)),
            ]
        } else {
            Vec::new()
        };
        self.write_xdata_with(&acad)
    }

    fn write_hatch_loop(&mut self, boundary: &HatchBoundary) -> Result<()> {
        self.writer.write_int(92, boundary.flags.bits() as i64)?;
        if let (true, [HatchEdge::Polyline { closed, vertices }]) = (
            boundary.flags.contains(BoundaryPathFlags::POLYLINE),
            boundary.edges.as_slice(),
        ) {
            let has_bulge = vertices.iter().any(|v| v.bulge != 0.0);
            self.writer.write_bool(72, has_bulge)?;
            self.writer.write_bool(73, *closed)?;
            self.writer.write_int(93, vertices.len() as i64)?;
            for vertex in vertices {
                self.writer.write_point2d(10, vertex.x, vertex.y)?;
                if has_bulge {
                    self.writer.write_real(42, vertex.bulge)?;
                }
            }
        } else {
            let edges: Vec<&HatchEdge> = boundary
                .edges
                .iter()
                .filter(|e| !matches!(e, HatchEdge::Polyline { .. }))
                .collect();
            if edges.len() != boundary.edges.len() {
                self.notify(
                    NotificationType::Warning,
                    "polyline edge inside an edge loop dropped from HATCH",
                );
            }
            self.writer.write_int(93, edges.len() as i64)?;
            for edge in edges {
                self.write_hatch_edge(edge)?;
            }
        }
        self.writer.write_int(97, 0)
    }

    fn write_hatch_edge(&mut self, edge: &HatchEdge) -> Result<()> {
        self.writer.write_int(72, edge.type_code() as i64)?;
        match edge {
            HatchEdge::Line { start, end } => {
                self.writer.write_point2d(10, start.x, start.y)?;
                self.writer.write_point2d(11, end.x, end.y)?;
            }
            HatchEdge::CircularArc {
                center,
                radius,
                start_angle,
                end_angle,
                counter_clockwise,
            } => {
                self.writer.write_point2d(10, center.x, center.y)?;
                self.writer.write_real(40, *radius)?;
                self.writer.write_real(50, start_angle.to_degrees())?;
                self.writer.write_real(51, end_angle.to_degrees())?;
                self.writer.write_bool(73, *counter_clockwise)?;
            }
            HatchEdge::EllipticArc {
                center,
                major_axis,
                ratio,
                start_angle,
                end_angle,
                counter_clockwise,
            } => {
                self.writer.write_point2d(10, center.x, center.y)?;
                self.writer.write_point2d(11, major_axis.x, major_axis.y)?;
                self.writer.write_real(40, *ratio)?;
                self.writer.write_real(50, start_angle.to_degrees())?;
                self.writer.write_real(51, end_angle.to_degrees())?;
                self.writer.write_bool(73, *counter_clockwise)?;
            }
            HatchEdge::Spline(spline) => {
                self.writer.write_int(94, spline.degree as i64)?;
                self.writer.write_bool(73, spline.rational)?;
                self.writer.write_bool(74, spline.periodic)?;
                self.writer.write_int(95, spline.knots.len() as i64)?;
                self.writer.write_int(96, spline.control_points.len() as i64)?;
                for knot in &spline.knots {
                    self.writer.write_real(40, *knot)?;
                }
                for cp in &spline.control_points {
                    self.writer.write_point2d(10, cp.location.x, cp.location.y)?;
                    if spline.rational {
                        self.writer.write_real(42, cp.weight)?;
                    }
                }
                self.writer.write_int(97, spline.fit_points.len() as i64)?;
                for fit in &spline.fit_points {
                    self.writer.write_point2d(11, fit.x, fit.y)?;
                }
                if !spline.fit_points.is_empty() {
                    self.writer
                        .write_point2d(12, spline.start_tangent.x, spline.start_tangent.y)?;
                    self.writer
                        .write_point2d(13, spline.end_tangent.x, spline.end_tangent.y)?;
                }
            }
            HatchEdge::Polyline { .. } => {}
        }
        Ok(())
    }

    // ---- images and objects ----

    pub fn write_image(&mut self, image: &RasterImage, attributes: &Attributes) -> Result<()> {
        self.entity("IMAGE", attributes)?;
        self.subclass("AcDbRasterImage")?;
        self.writer.write_int(90, 0)?;
        self.writer.write_point3d(10, image.insert_point)?;
        self.writer.write_point3d(11, image.u_vector)?;
        self.writer.write_point3d(12, image.v_vector)?;
        self.writer.write_real(13, image.width)?;
        self.writer.write_real(23, image.height)?;
        let definition = image.definition_handle.trim();
        if self.allows(340, !definition.is_empty()) && !definition.is_empty() {
            self.writer.write_string(340, definition)?;
        }
        self.writer.write_int(70, 1)?;
        self.writer.write_int(280, 0)?;
        self.writer.write_int(281, image.brightness as i64)?;
        self.writer.write_int(282, image.contrast as i64)?;
        self.writer.write_int(283, image.fade as i64)?;
        self.write_xdata()
    }

    pub fn write_image_definition(&mut self, definition: &ImageDefinition) -> Result<()> {
        self.writer.write_record_type("IMAGEDEF")?;
        self.object_handle(&definition.handle)?;
        self.subclass("AcDbRasterImageDef")?;
        self.writer.write_int(90, 0)?;
        self.writer.write_string(1, &definition.file_name)?;
        self.writer.write_int(280, 1)?;
        self.writer.write_int(281, 0)?;
        self.write_xdata()
    }

    pub fn write_dictionary(&mut self, dictionary: &Dictionary, entries: &[DictionaryEntry]) -> Result<()> {
        self.writer.write_record_type("DICTIONARY")?;
        self.object_handle(&dictionary.handle)?;
        self.subclass("AcDbDictionary")?;
        self.writer.write_int(281, 1)?;
        for entry in entries {
            self.writer.write_string(3, &entry.name)?;
            let handle = entry.handle.trim();
            self.writer
                .write_string(350, if handle.is_empty() { "0" } else { handle })?;
        }
        self.write_xdata()
    }

    /// `XRECORD`; the payload starts after the cloning flag (280)
    pub fn write_xrecord(&mut self, handle: &str, values: &[XRecordValue]) -> Result<()> {
        self.writer.write_record_type("XRECORD")?;
        self.object_handle(handle)?;
        if let Some(owner) = self.app_dictionary() {
            if self.allows(330, true) {
                self.writer.write_handle(330, owner)?;
            }
        }
        self.subclass("AcDbXrecord")?;
        self.writer.write_int(280, 1)?;
        for value in values {
            match &value.value {
                XRecordData::String(s) => self.writer.write_string(value.code, s)?,
                XRecordData::Real(r) => self.writer.write_real(value.code, *r)?,
                XRecordData::Int(i) => self.writer.write_int(value.code, *i)?,
                XRecordData::Bool(b) => self.writer.write_bool(value.code, *b)?,
            }
        }
        Ok(())
    }

    /// A record kept verbatim by the decoder
    pub fn write_unknown(&mut self, type_name: &str, pairs: &[(i32, String)]) -> Result<()> {
        self.writer.write_record_type(type_name)?;
        for (code, value) in pairs {
            self.writer.write_string(*code, value)?;
        }
        Ok(())
    }
}
