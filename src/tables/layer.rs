//! Layer table entry

use bitflags::bitflags;

bitflags! {
    /// Layer standard flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LayerFlags: i16 {
        /// Layer is frozen
        const FROZEN = 1;
        /// Layer is frozen by default in new viewports
        const FROZEN_IN_NEW_VIEWPORTS = 2;
        /// Layer is locked
        const LOCKED = 4;
        /// Layer depends on an external reference
        const XREF_DEPENDENT = 16;
        /// External reference resolved
        const XREF_RESOLVED = 32;
        /// Referenced by at least one entity
        const REFERENCED = 64;
    }
}

/// A layer table entry
///
/// Color, line type and line weight of a layer travel in its
/// [`Attributes`](crate::attributes::Attributes).
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Layer name
    pub name: String,
    /// Standard flags
    pub flags: LayerFlags,
    /// Layer is switched off (negative color on the wire)
    pub off: bool,
}

impl Layer {
    /// Create a visible layer without flags
    pub fn new(name: impl Into<String>) -> Self {
        Layer {
            name: name.into(),
            flags: LayerFlags::empty(),
            off: false,
        }
    }

    /// Check whether the layer is frozen
    pub fn is_frozen(&self) -> bool {
        self.flags.contains(LayerFlags::FROZEN)
    }

    /// Check whether the layer is locked
    pub fn is_locked(&self) -> bool {
        self.flags.contains(LayerFlags::LOCKED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_flags() {
        let mut layer = Layer::new("WALLS");
        assert!(!layer.is_frozen());
        layer.flags = LayerFlags::from_bits_retain(5);
        assert!(layer.is_frozen());
        assert!(layer.is_locked());
        assert_eq!(layer.flags.bits(), 5);
    }
}
