//! Single-line text

use crate::types::Vector3;

/// A single-line text entity
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// First alignment point (10/20/30)
    pub insert_point: Vector3,
    /// Second alignment point (11/21/31), used with non-default justification
    pub alignment_point: Vector3,
    /// Text height (40)
    pub height: f64,
    /// Relative X scale factor (41)
    pub x_scale: f64,
    /// Text generation flags (71)
    pub generation_flags: i32,
    /// Horizontal justification (72)
    pub horizontal_justification: i32,
    /// Vertical justification (73, 74 for attributes)
    pub vertical_justification: i32,
    /// Text value (1)
    pub value: String,
    /// Style name (7)
    pub style: String,
    /// Rotation in radians (degrees on the wire, 50)
    pub rotation: f64,
}

impl Text {
    pub fn new(value: impl Into<String>, insert_point: Vector3, height: f64) -> Self {
        Text {
            insert_point,
            alignment_point: Vector3::ZERO,
            height,
            x_scale: 1.0,
            generation_flags: 0,
            horizontal_justification: 0,
            vertical_justification: 0,
            value: value.into(),
            style: "STANDARD".to_string(),
            rotation: 0.0,
        }
    }
}

impl Default for Text {
    fn default() -> Self {
        Text::new("", Vector3::ZERO, 2.5)
    }
}
