//! Attribute attached to a block reference

use super::text::Text;

/// An attribute (`ATTRIB`): a tagged text value following an insert
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeEntity {
    /// Text geometry and value
    pub text: Text,
    /// Attribute tag (2)
    pub tag: String,
    /// Attribute flags (70): 1 invisible, 2 constant, 4 verify, 8 preset
    pub flags: i32,
}

impl AttributeEntity {
    pub fn new(tag: impl Into<String>, text: Text) -> Self {
        AttributeEntity {
            text,
            tag: tag.into(),
            flags: 0,
        }
    }

    pub fn is_invisible(&self) -> bool {
        self.flags & 1 != 0
    }
}
