//! Assembled records
//!
//! A [`Record`] is one complete entity, table row or object together with
//! its sub-record lists. [`RecordEntry`] pairs it with the presentation
//! state that was live when it completed. Records are what
//! [`RecordCollector`](crate::io::dxf::RecordCollector) builds from decoder
//! callbacks and what [`DxfEncoder::write_record`](crate::io::dxf::DxfEncoder::write_record)
//! consumes.

use crate::attributes::{Attributes, Extrusion};
use crate::entities::*;
use crate::objects::{Dictionary, DictionaryEntry, ImageDefinition, XRecordValue};
use crate::tables::{Layer, LineType, TextStyle};
use crate::types::Vector3;
use crate::xdata::ExtendedData;

/// Record type names known to the codec
///
/// Matched exhaustively by the decoder; anything else is an unknown record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Section,
    EndSection,
    Table,
    EndTable,
    Layer,
    LineType,
    TextStyle,
    Block,
    EndBlock,
    Point,
    Line,
    XLine,
    Ray,
    LwPolyline,
    Polyline,
    Vertex,
    SeqEnd,
    Arc,
    Circle,
    Ellipse,
    Spline,
    Insert,
    Text,
    MText,
    ArcAlignedText,
    Dimension,
    Leader,
    Hatch,
    Attribute,
    Image,
    ImageDefinition,
    XRecord,
    Dictionary,
    Trace,
    Solid,
    Face3D,
    Eof,
}

impl RecordKind {
    /// Type name as it appears after group code 0
    pub fn type_name(&self) -> &'static str {
        match self {
            RecordKind::Section => "SECTION",
            RecordKind::EndSection => "ENDSEC",
            RecordKind::Table => "TABLE",
            RecordKind::EndTable => "ENDTAB",
            RecordKind::Layer => "LAYER",
            RecordKind::LineType => "LTYPE",
            RecordKind::TextStyle => "STYLE",
            RecordKind::Block => "BLOCK",
            RecordKind::EndBlock => "ENDBLK",
            RecordKind::Point => "POINT",
            RecordKind::Line => "LINE",
            RecordKind::XLine => "XLINE",
            RecordKind::Ray => "RAY",
            RecordKind::LwPolyline => "LWPOLYLINE",
            RecordKind::Polyline => "POLYLINE",
            RecordKind::Vertex => "VERTEX",
            RecordKind::SeqEnd => "SEQEND",
            RecordKind::Arc => "ARC",
            RecordKind::Circle => "CIRCLE",
            RecordKind::Ellipse => "ELLIPSE",
            RecordKind::Spline => "SPLINE",
            RecordKind::Insert => "INSERT",
            RecordKind::Text => "TEXT",
            RecordKind::MText => "MTEXT",
            RecordKind::ArcAlignedText => "ARCALIGNEDTEXT",
            RecordKind::Dimension => "DIMENSION",
            RecordKind::Leader => "LEADER",
            RecordKind::Hatch => "HATCH",
            RecordKind::Attribute => "ATTRIB",
            RecordKind::Image => "IMAGE",
            RecordKind::ImageDefinition => "IMAGEDEF",
            RecordKind::XRecord => "XRECORD",
            RecordKind::Dictionary => "DICTIONARY",
            RecordKind::Trace => "TRACE",
            RecordKind::Solid => "SOLID",
            RecordKind::Face3D => "3DFACE",
            RecordKind::Eof => "EOF",
        }
    }

    /// Record kinds introduced with R13; R12 readers do not know them
    pub fn requires_r13(&self) -> bool {
        matches!(
            self,
            RecordKind::Ellipse
                | RecordKind::Spline
                | RecordKind::LwPolyline
                | RecordKind::MText
                | RecordKind::ArcAlignedText
                | RecordKind::Leader
                | RecordKind::Hatch
                | RecordKind::Image
                | RecordKind::ImageDefinition
                | RecordKind::XLine
                | RecordKind::Ray
                | RecordKind::Dictionary
                | RecordKind::XRecord
        )
    }
}

/// Section of a file a record is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordPlacement {
    Tables,
    Blocks,
    Entities,
    Objects,
}

/// One complete record with its sub-records
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Layer(Layer),
    LineType {
        line_type: LineType,
        dashes: Vec<f64>,
    },
    TextStyle(TextStyle),
    Block(Block),
    EndBlock,
    Point(Point),
    Line(Line),
    XLine(XLine),
    Ray(Ray),
    Arc(Arc),
    Circle(Circle),
    Ellipse(Ellipse),
    Polyline {
        polyline: Polyline,
        vertices: Vec<Vertex>,
    },
    Spline {
        spline: Spline,
        knots: Vec<f64>,
        control_points: Vec<ControlPoint>,
        fit_points: Vec<Vector3>,
    },
    Insert(Insert),
    Trace(Trace),
    Solid(Solid),
    Face3D(Face3D),
    Text(Text),
    Attribute(AttributeEntity),
    MText(MText),
    ArcAlignedText(ArcAlignedText),
    Dimension(Dimension),
    Leader {
        leader: Leader,
        vertices: Vec<Vector3>,
    },
    Hatch {
        hatch: Hatch,
        loops: Vec<HatchBoundary>,
    },
    Image(RasterImage),
    ImageDefinition(ImageDefinition),
    Dictionary {
        dictionary: Dictionary,
        entries: Vec<DictionaryEntry>,
    },
    XRecord {
        handle: String,
        values: Vec<XRecordValue>,
    },
    /// A record type the codec does not model; its raw pairs are kept
    Unknown {
        type_name: String,
        pairs: Vec<(i32, String)>,
    },
}

impl Record {
    /// Kind of a modelled record, `None` for [`Record::Unknown`]
    pub fn kind(&self) -> Option<RecordKind> {
        let kind = match self {
            Record::Layer(_) => RecordKind::Layer,
            Record::LineType { .. } => RecordKind::LineType,
            Record::TextStyle(_) => RecordKind::TextStyle,
            Record::Block(_) => RecordKind::Block,
            Record::EndBlock => RecordKind::EndBlock,
            Record::Point(_) => RecordKind::Point,
            Record::Line(_) => RecordKind::Line,
            Record::XLine(_) => RecordKind::XLine,
            Record::Ray(_) => RecordKind::Ray,
            Record::Arc(_) => RecordKind::Arc,
            Record::Circle(_) => RecordKind::Circle,
            Record::Ellipse(_) => RecordKind::Ellipse,
            Record::Polyline { .. } => RecordKind::Polyline,
            Record::Spline { .. } => RecordKind::Spline,
            Record::Insert(_) => RecordKind::Insert,
            Record::Trace(_) => RecordKind::Trace,
            Record::Solid(_) => RecordKind::Solid,
            Record::Face3D(_) => RecordKind::Face3D,
            Record::Text(_) => RecordKind::Text,
            Record::Attribute(_) => RecordKind::Attribute,
            Record::MText(_) => RecordKind::MText,
            Record::ArcAlignedText(_) => RecordKind::ArcAlignedText,
            Record::Dimension(_) => RecordKind::Dimension,
            Record::Leader { .. } => RecordKind::Leader,
            Record::Hatch { .. } => RecordKind::Hatch,
            Record::Image(_) => RecordKind::Image,
            Record::ImageDefinition(_) => RecordKind::ImageDefinition,
            Record::Dictionary { .. } => RecordKind::Dictionary,
            Record::XRecord { .. } => RecordKind::XRecord,
            Record::Unknown { .. } => return None,
        };
        Some(kind)
    }

    /// Type name written after group code 0
    pub fn type_name(&self) -> &str {
        match self {
            Record::Unknown { type_name, .. } => type_name,
            other => other.kind().map(|k| k.type_name()).unwrap_or(""),
        }
    }

    /// Section the record belongs to in a complete file
    pub fn placement(&self) -> RecordPlacement {
        match self {
            Record::Layer(_) | Record::LineType { .. } | Record::TextStyle(_) => RecordPlacement::Tables,
            Record::Block(_) | Record::EndBlock => RecordPlacement::Blocks,
            Record::ImageDefinition(_) | Record::Dictionary { .. } | Record::XRecord { .. } => {
                RecordPlacement::Objects
            }
            _ => RecordPlacement::Entities,
        }
    }
}

/// A record together with the state that accompanied it on the wire
#[derive(Debug, Clone, PartialEq)]
pub struct RecordEntry {
    pub record: Record,
    pub attributes: Attributes,
    pub extrusion: Extrusion,
    pub xdata: ExtendedData,
}

impl RecordEntry {
    /// A record with default attributes
    pub fn new(record: Record) -> Self {
        RecordEntry {
            record,
            attributes: Attributes::default(),
            extrusion: Extrusion::default(),
            xdata: ExtendedData::default(),
        }
    }

    pub fn with_attributes(record: Record, attributes: Attributes) -> Self {
        RecordEntry {
            attributes,
            ..RecordEntry::new(record)
        }
    }
}

impl From<Record> for RecordEntry {
    fn from(record: Record) -> Self {
        RecordEntry::new(record)
    }
}
