//! Group codes
//!
//! Every value in a pair stream is preceded by an integer group code. The
//! code range decides how the value text is interpreted, with one twist:
//! inside an XRecord payload every coordinate code is a plain real.
//! Codes outside every range are unknown and are reported, never fatal.

use ahash::AHashMap;
use once_cell::sync::Lazy;

use crate::record::RecordKind;

/// Record type name (0)
pub const ENTITY_TYPE: i32 = 0;
/// Primary text value (1)
pub const TEXT: i32 = 1;
/// Name (2)
pub const NAME: i32 = 2;
/// Handle (5)
pub const HANDLE: i32 = 5;
/// Line type name (6)
pub const LINE_TYPE: i32 = 6;
/// Layer name (8)
pub const LAYER: i32 = 8;
/// Header variable name (9)
pub const VARIABLE: i32 = 9;
/// Line-type scale (48)
pub const LINE_TYPE_SCALE: i32 = 48;
/// Color index (62)
pub const COLOR: i32 = 62;
/// Entities follow flag (66)
pub const ENTITIES_FOLLOW: i32 = 66;
/// Paper space flag (67)
pub const PAPER_SPACE: i32 = 67;
/// Subclass marker (100)
pub const SUBCLASS: i32 = 100;
/// Line weight (370)
pub const LINE_WEIGHT: i32 = 370;
/// 24-bit color (420)
pub const TRUE_COLOR: i32 = 420;
/// Comment (999)
pub const COMMENT: i32 = 999;
/// Extended data application name (1001)
pub const XDATA_APP: i32 = 1001;

/// Interpretation of a group value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupValueType {
    String,
    CoordinateX,
    CoordinateY,
    CoordinateZ,
    Real,
    ShortInt,
    Int32,
    Int64,
    Boolean,
    Handle,
    SubclassMarker,
    ControlString,
    ExtendedCoord,
    ExtendedDataString,
    ExtendedDataReal,
    ExtendedDataInt,
    Comment,
    Unknown,
}

impl GroupValueType {
    /// Value must parse as a number
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            GroupValueType::CoordinateX
                | GroupValueType::CoordinateY
                | GroupValueType::CoordinateZ
                | GroupValueType::Real
                | GroupValueType::ShortInt
                | GroupValueType::Int32
                | GroupValueType::Int64
                | GroupValueType::Boolean
                | GroupValueType::ExtendedCoord
                | GroupValueType::ExtendedDataReal
                | GroupValueType::ExtendedDataInt
        )
    }

    /// Value parses as an integer
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            GroupValueType::ShortInt
                | GroupValueType::Int32
                | GroupValueType::Int64
                | GroupValueType::Boolean
                | GroupValueType::ExtendedDataInt
        )
    }

    /// Check that `value` is acceptable for this type
    pub fn accepts(&self, value: &str) -> bool {
        if *self == GroupValueType::Handle {
            u64::from_str_radix(value.trim(), 16).is_ok()
        } else if self.is_integer() {
            parse_int(value).is_some()
        } else if self.is_numeric() {
            parse_real(value).is_some()
        } else {
            true
        }
    }
}

/// Parse context of a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CodeContext {
    /// Ordinary record fields
    #[default]
    Entity,
    /// After a 1001 in the current record
    ExtendedData,
    /// XRECORD payload after its 280 marker
    XRecord,
}

/// Classify a group code in the given context
pub fn classify(code: i32, context: CodeContext) -> GroupValueType {
    if context == CodeContext::XRecord {
        return classify_xrecord(code);
    }
    match code {
        -5..=-1 => GroupValueType::String,
        5 | 105 => GroupValueType::Handle,
        0..=9 => GroupValueType::String,
        10..=18 | 110..=112 | 210 => GroupValueType::CoordinateX,
        20..=28 | 120..=122 | 220 => GroupValueType::CoordinateY,
        30..=37 | 130..=132 | 230 => GroupValueType::CoordinateZ,
        38..=59 | 140..=149 | 460..=469 => GroupValueType::Real,
        60..=79 | 170..=179 | 270..=289 | 370..=389 | 400..=409 => GroupValueType::ShortInt,
        90..=99 | 420..=429 | 440..=459 => GroupValueType::Int32,
        100 => GroupValueType::SubclassMarker,
        101 => GroupValueType::String,
        102 => GroupValueType::ControlString,
        160..=169 => GroupValueType::Int64,
        290..=299 => GroupValueType::Boolean,
        300..=319 | 410..=419 | 430..=439 | 470..=479 => GroupValueType::String,
        320..=369 | 390..=399 | 480..=481 => GroupValueType::Handle,
        999 => GroupValueType::Comment,
        1000..=1009 => GroupValueType::ExtendedDataString,
        1010..=1013 | 1020..=1023 | 1030..=1033 => GroupValueType::ExtendedCoord,
        1040..=1059 => GroupValueType::ExtendedDataReal,
        1060..=1071 => GroupValueType::ExtendedDataInt,
        _ => GroupValueType::Unknown,
    }
}

fn classify_xrecord(code: i32) -> GroupValueType {
    match code {
        1..=9 | 100..=102 | 300..=309 | 410..=419 | 430..=439 | 470..=479 | 999 | 1000..=1009 => {
            GroupValueType::String
        }
        10..=59 | 110..=149 | 210..=239 | 1010..=1059 => GroupValueType::Real,
        60..=99 | 160..=179 | 270..=289 | 370..=389 | 400..=409 | 1060..=1071 => GroupValueType::Int32,
        290..=299 => GroupValueType::Boolean,
        310..=369 | 390..=399 | 480..=481 => GroupValueType::String,
        _ => GroupValueType::Unknown,
    }
}

/// Base x code of the point slot a coordinate code belongs to
pub fn point_slot(code: i32) -> Option<i32> {
    match code {
        10..=18 | 110..=112 | 210 | 1010..=1013 => Some(code),
        20..=28 | 120..=122 | 220 | 1020..=1023 => Some(code - 10),
        30..=37 | 130..=132 | 230 | 1030..=1033 => Some(code - 20),
        _ => None,
    }
}

/// Axis of a coordinate code: 0 = x, 1 = y, 2 = z
pub fn point_axis(code: i32) -> Option<usize> {
    point_slot(code).map(|slot| ((code - slot) / 10) as usize)
}

static RECORD_KINDS: Lazy<AHashMap<&'static str, RecordKind>> = Lazy::new(|| {
    use RecordKind::*;
    [
        Section, EndSection, Table, EndTable, Layer, LineType, TextStyle, Block, EndBlock, Point, Line,
        XLine, Ray, LwPolyline, Polyline, Vertex, SeqEnd, Arc, Circle, Ellipse, Spline, Insert, Text,
        MText, ArcAlignedText, Dimension, Leader, Hatch, Attribute, Image, ImageDefinition, XRecord, Dictionary, Trace,
        Solid, Face3D, Eof,
    ]
    .into_iter()
    .map(|kind| (kind.type_name(), kind))
    .collect()
});

/// Look up the record kind named after a group code 0
pub fn record_kind(type_name: &str) -> Option<RecordKind> {
    RECORD_KINDS.get(type_name.trim()).copied()
}

/// Parse a real value; surrounding blanks are ignored
pub fn parse_real(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an integer value; an integral real such as `"3.0"` is accepted
pub fn parse_int(value: &str) -> Option<i64> {
    let text = value.trim();
    text.parse::<i64>().ok().or_else(|| {
        text.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64)
            .map(|v| v as i64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ranges() {
        assert_eq!(classify(0, CodeContext::Entity), GroupValueType::String);
        assert_eq!(classify(5, CodeContext::Entity), GroupValueType::Handle);
        assert_eq!(classify(10, CodeContext::Entity), GroupValueType::CoordinateX);
        assert_eq!(classify(23, CodeContext::Entity), GroupValueType::CoordinateY);
        assert_eq!(classify(38, CodeContext::Entity), GroupValueType::Real);
        assert_eq!(classify(62, CodeContext::Entity), GroupValueType::ShortInt);
        assert_eq!(classify(90, CodeContext::Entity), GroupValueType::Int32);
        assert_eq!(classify(100, CodeContext::Entity), GroupValueType::SubclassMarker);
        assert_eq!(classify(160, CodeContext::Entity), GroupValueType::Int64);
        assert_eq!(classify(290, CodeContext::Entity), GroupValueType::Boolean);
        assert_eq!(classify(330, CodeContext::Entity), GroupValueType::Handle);
        assert_eq!(classify(999, CodeContext::Entity), GroupValueType::Comment);
        assert_eq!(classify(1071, CodeContext::ExtendedData), GroupValueType::ExtendedDataInt);
        assert_eq!(classify(1020, CodeContext::ExtendedData), GroupValueType::ExtendedCoord);
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(classify(999999, CodeContext::Entity), GroupValueType::Unknown);
        assert_eq!(classify(1072, CodeContext::Entity), GroupValueType::Unknown);
        assert_eq!(classify(-6, CodeContext::Entity), GroupValueType::Unknown);
        assert_eq!(classify(-3, CodeContext::Entity), GroupValueType::String);
    }

    #[test]
    fn test_xrecord_context() {
        assert_eq!(classify(10, CodeContext::XRecord), GroupValueType::Real);
        assert_eq!(classify(70, CodeContext::XRecord), GroupValueType::Int32);
        assert_eq!(classify(290, CodeContext::XRecord), GroupValueType::Boolean);
        assert_eq!(classify(1, CodeContext::XRecord), GroupValueType::String);
    }

    #[test]
    fn test_point_slot() {
        assert_eq!(point_slot(10), Some(10));
        assert_eq!(point_slot(20), Some(10));
        assert_eq!(point_slot(33), Some(13));
        assert_eq!(point_slot(220), Some(210));
        assert_eq!(point_slot(1020), Some(1010));
        assert_eq!(point_slot(38), None);
        assert_eq!(point_slot(40), None);
        assert_eq!(point_axis(31), Some(2));
    }

    #[test]
    fn test_record_kind_lookup() {
        assert_eq!(record_kind("LWPOLYLINE"), Some(RecordKind::LwPolyline));
        assert_eq!(record_kind("3DFACE"), Some(RecordKind::Face3D));
        assert_eq!(record_kind("ARCALIGNEDTEXT"), Some(RecordKind::ArcAlignedText));
        assert_eq!(record_kind("WIPEOUT"), None);
    }

    #[test]
    fn test_value_parsing() {
        assert_eq!(parse_int(" 42 "), Some(42));
        assert_eq!(parse_int("3.0"), Some(3));
        assert_eq!(parse_int("3.5"), None);
        assert_eq!(parse_real("1e3"), Some(1000.0));
        assert_eq!(parse_real("abc"), None);
        assert!(GroupValueType::ShortInt.accepts("7"));
        assert!(!GroupValueType::Real.accepts("x"));
        assert!(GroupValueType::Handle.accepts("1A"));
        assert!(!GroupValueType::Handle.accepts("zz"));
    }
}
