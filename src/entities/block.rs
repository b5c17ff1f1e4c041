//! Block definition header

use crate::types::Vector3;

/// Start of a block definition; its entities follow until `ENDBLK`
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Block name (2)
    pub name: String,
    /// Block type flags (70)
    pub flags: i32,
    /// Base point (10/20/30)
    pub base_point: Vector3,
}

impl Block {
    pub fn new(name: impl Into<String>, base_point: Vector3) -> Self {
        Block {
            name: name.into(),
            flags: 0,
            base_point,
        }
    }

    /// Handles reserved for the begin/end records of the layout blocks,
    /// if `name` is one of them
    pub fn layout_handles(&self) -> Option<(u64, u64)> {
        match self.name.to_ascii_uppercase().as_str() {
            "*PAPER_SPACE" => Some((0x1c, 0x1d)),
            "*MODEL_SPACE" => Some((0x20, 0x21)),
            "*PAPER_SPACE0" => Some((0x24, 0x25)),
            _ => None,
        }
    }

    /// Paper space layout block
    pub fn is_paper_space(&self) -> bool {
        self.name.to_ascii_uppercase().starts_with("*PAPER_SPACE")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_handles() {
        assert_eq!(Block::new("*Model_Space", Vector3::ZERO).layout_handles(), Some((0x20, 0x21)));
        assert_eq!(Block::new("*Paper_Space", Vector3::ZERO).layout_handles(), Some((0x1c, 0x1d)));
        assert_eq!(Block::new("DOOR", Vector3::ZERO).layout_handles(), None);
        assert!(Block::new("*Paper_Space0", Vector3::ZERO).is_paper_space());
    }
}
