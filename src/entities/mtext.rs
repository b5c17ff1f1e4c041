//! Multi-line text

use crate::types::Vector3;

/// Longest value carried by one text pair; longer text is split into
/// code-3 chunks followed by a final code-1 pair
pub const MTEXT_CHUNK_LEN: usize = 250;

/// A multi-line text entity
#[derive(Debug, Clone, PartialEq)]
pub struct MText {
    /// Insertion point (10/20/30)
    pub insert_point: Vector3,
    /// X-axis direction (11/21/31)
    pub direction: Vector3,
    /// Nominal text height (40)
    pub height: f64,
    /// Reference rectangle width (41)
    pub width: f64,
    /// Attachment point (71), 1 = top left .. 9 = bottom right
    pub attachment_point: i32,
    /// Drawing direction (72)
    pub drawing_direction: i32,
    /// Line spacing style (73)
    pub line_spacing_style: i32,
    /// Line spacing factor (44)
    pub line_spacing_factor: f64,
    /// Complete text, chunks included
    pub text: String,
    /// Style name (7)
    pub style: String,
    /// Rotation in radians (degrees on the wire, 50)
    pub rotation: f64,
}

impl MText {
    pub fn new(text: impl Into<String>, insert_point: Vector3, height: f64) -> Self {
        MText {
            insert_point,
            direction: Vector3::UNIT_X,
            height,
            width: 0.0,
            attachment_point: 1,
            drawing_direction: 1,
            line_spacing_style: 1,
            line_spacing_factor: 1.0,
            text: text.into(),
            style: "STANDARD".to_string(),
            rotation: 0.0,
        }
    }

    /// Split the text at character boundaries into wire chunks: all but the
    /// last go to code 3, the last to code 1
    pub fn chunks(&self) -> Vec<&str> {
        let mut chunks = Vec::new();
        let mut rest = self.text.as_str();
        while rest.chars().count() > MTEXT_CHUNK_LEN {
            let split = rest
                .char_indices()
                .nth(MTEXT_CHUNK_LEN)
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
            let (head, tail) = rest.split_at(split);
            chunks.push(head);
            rest = tail;
        }
        chunks.push(rest);
        chunks
    }
}

impl Default for MText {
    fn default() -> Self {
        MText::new("", Vector3::ZERO, 2.5)
    }
}
