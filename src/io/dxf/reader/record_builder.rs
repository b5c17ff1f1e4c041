//! Typed record assembly from the per-record value table
//!
//! While a record's pairs arrive, every field that is not a sub-record item
//! lands in a [`RecordValues`] table keyed by group code; the last value for
//! a code wins. When the record closes, the functions here read the table
//! and produce the typed record, applying the documented default for every
//! absent field.

use ahash::AHashMap;

use crate::entities::*;
use crate::io::dxf::group_code::{parse_int, parse_real};
use crate::objects::{Dictionary, ImageDefinition};
use crate::tables::{Layer, LayerFlags, LineType, TextStyle};
use crate::types::Vector3;

/// Field values of the record being decoded
#[derive(Debug, Clone, Default)]
pub struct RecordValues {
    values: AHashMap<i32, String>,
}

impl RecordValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: i32, value: impl Into<String>) {
        self.values.insert(code, value.into());
    }

    pub fn contains(&self, code: i32) -> bool {
        self.values.contains_key(&code)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Smallest code present
    pub fn first_code(&self) -> Option<i32> {
        self.values.keys().copied().min()
    }

    pub fn raw(&self, code: i32) -> Option<&str> {
        self.values.get(&code).map(|s| s.as_str())
    }

    pub fn string(&self, code: i32, default: &str) -> String {
        self.raw(code).unwrap_or(default).to_string()
    }

    pub fn real(&self, code: i32, default: f64) -> f64 {
        self.raw(code).and_then(parse_real).unwrap_or(default)
    }

    pub fn int(&self, code: i32, default: i64) -> i64 {
        self.raw(code).and_then(parse_int).unwrap_or(default)
    }

    pub fn int32(&self, code: i32, default: i32) -> i32 {
        self.int(code, default as i64) as i32
    }

    pub fn flag(&self, code: i32) -> bool {
        self.int(code, 0) != 0
    }

    /// Point whose x code is `code`; missing components are 0
    pub fn point(&self, code: i32) -> Vector3 {
        Vector3::new(
            self.real(code, 0.0),
            self.real(code + 10, 0.0),
            self.real(code + 20, 0.0),
        )
    }

    /// Point with an explicit default when none of its codes is present
    pub fn point_or(&self, code: i32, default: Vector3) -> Vector3 {
        if self.contains(code) || self.contains(code + 10) || self.contains(code + 20) {
            Vector3::new(
                self.real(code, default.x),
                self.real(code + 10, default.y),
                self.real(code + 20, default.z),
            )
        } else {
            default
        }
    }

    /// Name field (2); `None` when absent or blank
    pub fn name(&self) -> Option<String> {
        self.raw(2)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

pub fn layer(values: &RecordValues, name: String) -> Layer {
    let mut layer = Layer::new(name);
    layer.flags = LayerFlags::from_bits_retain(values.int(70, 0) as i16);
    layer.off = values.int(62, 7) < 0;
    layer
}

pub fn line_type(values: &RecordValues, name: String) -> LineType {
    let mut lt = LineType::new(name);
    lt.description = values.string(3, "");
    lt.flags = values.int(70, 0) as i16;
    lt.dash_count = values.int(73, 0).max(0) as usize;
    lt.pattern_length = values.real(40, 0.0);
    lt
}

pub fn text_style(values: &RecordValues, name: String) -> TextStyle {
    let mut style = TextStyle::new(name);
    style.flags = values.int(70, 0) as i16;
    style.fixed_height = values.real(40, 0.0);
    style.width_factor = values.real(41, 1.0);
    style.oblique_angle = values.real(50, 0.0);
    style.generation_flags = values.int(71, 0) as i16;
    style.last_height = values.real(42, 2.5);
    style.font_file = values.string(3, "");
    style.big_font_file = values.string(4, "");
    style
}

pub fn block(values: &RecordValues, name: String) -> Block {
    let mut block = Block::new(name, values.point(10));
    block.flags = values.int32(70, 0);
    block
}

pub fn point(values: &RecordValues) -> Point {
    Point {
        location: values.point(10),
    }
}

pub fn line(values: &RecordValues) -> Line {
    Line::new(values.point(10), values.point(11))
}

pub fn xline(values: &RecordValues) -> XLine {
    XLine::new(values.point(10), values.point(11))
}

pub fn ray(values: &RecordValues) -> Ray {
    Ray::new(values.point(10), values.point(11))
}

pub fn arc(values: &RecordValues) -> Arc {
    Arc::new(
        values.point(10),
        values.real(40, 1.0),
        values.real(50, 0.0),
        values.real(51, 0.0),
    )
}

pub fn circle(values: &RecordValues) -> Circle {
    Circle::new(values.point(10), values.real(40, 1.0))
}

pub fn ellipse(values: &RecordValues) -> Ellipse {
    let mut ellipse = Ellipse::new(
        values.point(10),
        values.point_or(11, Vector3::UNIT_X),
        values.real(40, 1.0),
    );
    ellipse.start_parameter = values.real(41, 0.0);
    ellipse.end_parameter = values.real(42, std::f64::consts::TAU);
    ellipse
}

/// Header of a classic `POLYLINE`; the elevation is the z of its 10/20/30
pub fn polyline(values: &RecordValues) -> Polyline {
    Polyline {
        vertex_count: 0,
        m: values.int32(71, 0),
        n: values.int32(72, 0),
        flags: PolylineFlags::from_bits_retain(values.int(70, 0) as i16),
        elevation: values.real(30, 0.0),
    }
}

/// Header of an `LWPOLYLINE`
pub fn lwpolyline(values: &RecordValues, vertex_count: usize) -> Polyline {
    Polyline {
        vertex_count,
        m: 0,
        n: 0,
        flags: PolylineFlags::from_bits_retain(values.int(70, 0) as i16),
        elevation: values.real(38, 0.0),
    }
}

pub fn vertex(values: &RecordValues) -> Vertex {
    Vertex {
        location: values.point(10),
        bulge: values.real(42, 0.0),
    }
}

pub fn spline(values: &RecordValues) -> Spline {
    let mut spline = Spline::new(
        values.int32(71, 3),
        SplineFlags::from_bits_retain(values.int(70, 4) as i16),
    );
    spline.knot_count = values.int(72, 0).max(0) as usize;
    spline.control_point_count = values.int(73, 0).max(0) as usize;
    spline.fit_point_count = values.int(74, 0).max(0) as usize;
    spline.start_tangent = values.point(12);
    spline.end_tangent = values.point(13);
    spline
}

pub fn insert(values: &RecordValues, name: String) -> Insert {
    let mut insert = Insert::new(name, values.point(10));
    insert.scale = Vector3::new(
        values.real(41, 1.0),
        values.real(42, 1.0),
        values.real(43, 1.0),
    );
    insert.rotation = values.real(50, 0.0);
    insert.columns = values.int32(70, 1);
    insert.rows = values.int32(71, 1);
    insert.column_spacing = values.real(44, 0.0);
    insert.row_spacing = values.real(45, 0.0);
    insert
}

pub fn solid(values: &RecordValues) -> Solid {
    let mut solid = Solid::new([
        values.point(10),
        values.point(11),
        values.point(12),
        values.point(13),
    ]);
    solid.thickness = values.real(39, 0.0);
    solid
}

pub fn text(values: &RecordValues) -> Text {
    Text {
        insert_point: values.point(10),
        alignment_point: values.point(11),
        height: values.real(40, 2.5),
        x_scale: values.real(41, 1.0),
        generation_flags: values.int32(71, 0),
        horizontal_justification: values.int32(72, 0),
        vertical_justification: values.int32(73, 0),
        value: values.string(1, ""),
        style: values.string(7, "STANDARD"),
        rotation: values.real(50, 0.0).to_radians(),
    }
}

pub fn attribute(values: &RecordValues) -> AttributeEntity {
    let mut text = text(values);
    text.vertical_justification = values.int32(74, 0);
    AttributeEntity {
        text,
        tag: values.string(2, ""),
        flags: values.int32(70, 0),
    }
}

/// Angles are radians on the wire
pub fn arc_aligned_text(values: &RecordValues) -> ArcAlignedText {
    ArcAlignedText {
        value: values.string(1, ""),
        font: values.string(2, ""),
        style: values.string(7, "STANDARD"),
        center: values.point(10),
        radius: values.real(40, 0.0),
        x_scale: values.real(41, 1.0),
        height: values.real(42, 0.0),
        spacing: values.real(43, 0.0),
        offset: values.real(44, 0.0),
        right_offset: values.real(45, 0.0),
        left_offset: values.real(46, 0.0),
        start_angle: values.real(50, 0.0),
        end_angle: values.real(51, 0.0),
        reversed: values.flag(70),
        direction: values.int32(71, 1),
        alignment: values.int32(72, 1),
        side: values.int32(73, 1),
        bold: values.flag(74),
        italic: values.flag(75),
        underline: values.flag(76),
        character_set: values.int32(77, 0),
        pitch: values.int32(78, 0),
        shx_font: values.flag(79),
        wizard: values.flag(280),
        arc_handle: values.string(330, ""),
    }
}

/// `chunks` is the concatenation of all code-3 values in arrival order
pub fn mtext(values: &RecordValues, chunks: &str) -> MText {
    let direction = values.point_or(11, Vector3::UNIT_X);
    let rotation = if values.contains(50) {
        values.real(50, 0.0).to_radians()
    } else if values.contains(11) || values.contains(21) {
        direction.y.atan2(direction.x)
    } else {
        0.0
    };
    MText {
        insert_point: values.point(10),
        direction,
        height: values.real(40, 2.5),
        width: values.real(41, 0.0),
        attachment_point: values.int32(71, 1),
        drawing_direction: values.int32(72, 1),
        line_spacing_style: values.int32(73, 1),
        line_spacing_factor: values.real(44, 1.0),
        text: format!("{}{}", chunks, values.string(1, "")),
        style: values.string(7, "STANDARD"),
        rotation,
    }
}

/// `None` when the low three bits of 70 name no dimension kind
pub fn dimension(values: &RecordValues) -> Option<Dimension> {
    let raw_type = values.int32(70, 0);
    let dimension_type = raw_type & !DimensionKind::ORDINATE_X_TYPE;
    let common = DimensionCommon {
        definition_point: values.point(10),
        text_middle_point: values.point(11),
        dimension_type,
        attachment_point: values.int32(71, 5),
        line_spacing_style: values.int32(72, 1),
        line_spacing_factor: values.real(41, 1.0),
        text: values.string(1, ""),
        style: values.string(3, "Standard"),
        text_rotation: values.real(53, 0.0),
    };
    let kind = match dimension_type & 0x07 {
        0 => DimensionKind::Linear(LinearDimension {
            first_point: values.point(13),
            second_point: values.point(14),
            rotation: values.real(50, 0.0),
            oblique: values.real(52, 0.0),
        }),
        1 => DimensionKind::Aligned(AlignedDimension {
            first_point: values.point(13),
            second_point: values.point(14),
        }),
        2 => DimensionKind::Angular(AngularDimension {
            first_line_start: values.point(13),
            first_line_end: values.point(14),
            second_line_start: values.point(15),
            arc_point: values.point(16),
        }),
        3 => DimensionKind::Diametric(DiametricDimension {
            definition_point: values.point(15),
            leader_length: values.real(40, 0.0),
        }),
        4 => DimensionKind::Radial(RadialDimension {
            definition_point: values.point(15),
            leader_length: values.real(40, 0.0),
        }),
        5 => DimensionKind::Angular3Point(Angular3PointDimension {
            first_point: values.point(13),
            second_point: values.point(14),
            vertex: values.point(15),
        }),
        6 => DimensionKind::Ordinate(OrdinateDimension {
            feature_point: values.point(13),
            leader_end_point: values.point(14),
            x_type: raw_type & DimensionKind::ORDINATE_X_TYPE != 0,
        }),
        _ => return None,
    };
    Some(Dimension::new(common, kind))
}

pub fn leader(values: &RecordValues, vertex_count: usize) -> Leader {
    Leader {
        arrow_head: values.int32(71, 1),
        path_type: values.int32(72, 0),
        creation_flag: values.int32(73, 3),
        hookline_direction: values.int32(74, 1),
        hookline: values.int32(75, 0),
        text_height: values.real(40, 1.0),
        text_width: values.real(41, 1.0),
        vertex_count,
    }
}

pub fn hatch(values: &RecordValues, loop_count: usize, origin: Vector3) -> Hatch {
    Hatch {
        loop_count,
        solid: values.flag(70),
        scale: values.real(41, 1.0),
        angle: values.real(52, 0.0),
        pattern: values.string(2, ""),
        origin,
    }
}

pub fn image(values: &RecordValues) -> RasterImage {
    RasterImage {
        definition_handle: values.string(340, ""),
        insert_point: values.point(10),
        u_vector: values.point(11),
        v_vector: values.point(12),
        width: values.real(13, 0.0),
        height: values.real(23, 0.0),
        brightness: values.int32(281, 50),
        contrast: values.int32(282, 50),
        fade: values.int32(283, 0),
    }
}

pub fn image_definition(values: &RecordValues) -> ImageDefinition {
    ImageDefinition::new(values.string(5, ""), values.string(1, ""))
}

pub fn dictionary(values: &RecordValues) -> Dictionary {
    Dictionary::new(values.string(5, ""))
}
