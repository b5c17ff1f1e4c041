//! Text laid out along an arc

use crate::types::Vector3;

/// An `ARCALIGNEDTEXT` entity
///
/// Angles are radians on the wire and in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcAlignedText {
    /// Text value (1)
    pub value: String,
    /// Font name (2)
    pub font: String,
    /// Style name (7)
    pub style: String,
    /// Arc center (10/20/30)
    pub center: Vector3,
    /// Arc radius (40)
    pub radius: f64,
    /// Relative X scale factor (41)
    pub x_scale: f64,
    /// Text height (42)
    pub height: f64,
    /// Character spacing (43)
    pub spacing: f64,
    /// Offset from the arc (44)
    pub offset: f64,
    /// Right offset (45)
    pub right_offset: f64,
    /// Left offset (46)
    pub left_offset: f64,
    /// Start angle (50)
    pub start_angle: f64,
    /// End angle (51)
    pub end_angle: f64,
    /// Characters run in reverse order (70)
    pub reversed: bool,
    /// 1 outward from the center, 2 inward (71)
    pub direction: i32,
    /// 1 fit, 2 left, 3 right, 4 center (72)
    pub alignment: i32,
    /// 1 convex, 2 concave (73)
    pub side: i32,
    /// (74)
    pub bold: bool,
    /// (75)
    pub italic: bool,
    /// (76)
    pub underline: bool,
    /// Windows character set identifier (77)
    pub character_set: i32,
    /// Windows pitch and family identifier (78)
    pub pitch: i32,
    /// SHX font rather than TrueType (79)
    pub shx_font: bool,
    /// (280)
    pub wizard: bool,
    /// Handle of the arc the text follows (330), empty when unset
    pub arc_handle: String,
}

impl ArcAlignedText {
    pub fn new(value: impl Into<String>, center: Vector3, radius: f64) -> Self {
        ArcAlignedText {
            value: value.into(),
            font: String::new(),
            style: "STANDARD".to_string(),
            center,
            radius,
            x_scale: 1.0,
            height: 2.5,
            spacing: 0.0,
            offset: 0.0,
            right_offset: 0.0,
            left_offset: 0.0,
            start_angle: 0.0,
            end_angle: 0.0,
            reversed: false,
            direction: 1,
            alignment: 1,
            side: 1,
            bold: false,
            italic: false,
            underline: false,
            character_set: 0,
            pitch: 0,
            shx_font: false,
            wizard: false,
            arc_handle: String::new(),
        }
    }
}

impl Default for ArcAlignedText {
    fn default() -> Self {
        ArcAlignedText::new("", Vector3::ZERO, 1.0)
    }
}
