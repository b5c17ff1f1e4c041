//! Color representation for CAD entities

use std::fmt;

/// Represents an indexed color
///
/// Colors are carried on the wire as an AutoCAD Color Index (ACI) in group
/// code 62. Two indices are inheritance sentinels:
/// - 256: use the layer's color
/// - 0: use the block's color
///
/// A 24-bit override travels separately as a [`TrueColor`] (code 420).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Color by layer (index 256)
    #[default]
    ByLayer,
    /// Color by block (index 0)
    ByBlock,
    /// AutoCAD Color Index (1-255)
    Index(u8),
}

impl Color {
    /// Create a color from an AutoCAD Color Index
    ///
    /// Negative indices mark a layer that is switched off; the absolute value
    /// is kept as the color.
    pub fn from_index(index: i16) -> Self {
        match index {
            0 => Color::ByBlock,
            256 => Color::ByLayer,
            1..=255 => Color::Index(index as u8),
            _ if index < 0 => Color::from_index(index.saturating_abs()),
            _ => Color::Index(7),
        }
    }

    /// Get the raw color index (0-256)
    pub fn index(&self) -> i16 {
        match self {
            Color::ByBlock => 0,
            Color::Index(i) => *i as i16,
            Color::ByLayer => 256,
        }
    }

    /// Whether this color inherits from the owning layer or block
    pub fn is_inherited(&self) -> bool {
        matches!(self, Color::ByLayer | Color::ByBlock)
    }

    /// Display color of an explicit index, looked up in [`ACI_PALETTE`]
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        match self {
            Color::Index(i) => {
                let [r, g, b] = ACI_PALETTE[*i as usize];
                Some((to_byte(r), to_byte(g), to_byte(b)))
            }
            _ => None,
        }
    }

    /// Standard named colors
    pub const BLACK: Color = Color::Index(250);
    pub const RED: Color = Color::Index(1);
    pub const YELLOW: Color = Color::Index(2);
    pub const GREEN: Color = Color::Index(3);
    pub const CYAN: Color = Color::Index(4);
    pub const BLUE: Color = Color::Index(5);
    pub const MAGENTA: Color = Color::Index(6);
    pub const WHITE: Color = Color::Index(7);
    pub const GRAY: Color = Color::Index(8);
    pub const BROWN: Color = Color::Index(15);
    pub const LIGHT_RED: Color = Color::Index(23);
    pub const LIGHT_GREEN: Color = Color::Index(121);
    pub const LIGHT_CYAN: Color = Color::Index(131);
    pub const LIGHT_BLUE: Color = Color::Index(163);
    pub const LIGHT_MAGENTA: Color = Color::Index(221);
    pub const LIGHT_GRAY: Color = Color::Index(252);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::ByLayer => write!(f, "ByLayer"),
            Color::ByBlock => write!(f, "ByBlock"),
            Color::Index(i) => write!(f, "Index({})", i),
        }
    }
}

fn to_byte(component: f64) -> u8 {
    (component.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// A 24-bit color override, packed as `0x00RRGGBB` (group code 420)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrueColor(u32);

impl TrueColor {
    /// Create from a packed value; bits above the low 24 are dropped
    pub const fn new(value: u32) -> Self {
        TrueColor(value & 0x00FF_FFFF)
    }

    /// Create from RGB components
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        TrueColor(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Packed `0x00RRGGBB` value
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// RGB components
    pub const fn rgb(&self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

/// Standard indexed color palette as fractional RGB.
///
/// Entry 0 is unused and only exists so that the table can be indexed
/// directly with a color index; entry 1 is red.
pub static ACI_PALETTE: [[f64; 3]; 256] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 1.0, 1.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
    [0.5, 0.5, 0.5],
    [0.75, 0.75, 0.75],
    [1.0, 0.0, 0.0],
    [1.0, 0.5, 0.5],
    [0.65, 0.0, 0.0],
    [0.65, 0.325, 0.325],
    [0.5, 0.0, 0.0],
    [0.5, 0.25, 0.25],
    [0.3, 0.0, 0.0],
    [0.3, 0.15, 0.15],
    [0.15, 0.0, 0.0],
    [0.15, 0.075, 0.075],
    [1.0, 0.25, 0.0],
    [1.0, 0.625, 0.5],
    [0.65, 0.1625, 0.0],
    [0.65, 0.4063, 0.325],
    [0.5, 0.125, 0.0],
    [0.5, 0.3125, 0.25],
    [0.3, 0.075, 0.0],
    [0.3, 0.1875, 0.15],
    [0.15, 0.0375, 0.0],
    [0.15, 0.0938, 0.075],
    [1.0, 0.5, 0.0],
    [1.0, 0.75, 0.5],
    [0.65, 0.325, 0.0],
    [0.65, 0.4875, 0.325],
    [0.5, 0.25, 0.0],
    [0.5, 0.375, 0.25],
    [0.3, 0.15, 0.0],
    [0.3, 0.225, 0.15],
    [0.15, 0.075, 0.0],
    [0.15, 0.1125, 0.075],
    [1.0, 0.75, 0.0],
    [1.0, 0.875, 0.5],
    [0.65, 0.4875, 0.0],
    [0.65, 0.5688, 0.325],
    [0.5, 0.375, 0.0],
    [0.5, 0.4375, 0.25],
    [0.3, 0.225, 0.0],
    [0.3, 0.2625, 0.15],
    [0.15, 0.1125, 0.0],
    [0.15, 0.1313, 0.075],
    [1.0, 1.0, 0.0],
    [1.0, 1.0, 0.5],
    [0.65, 0.65, 0.0],
    [0.65, 0.65, 0.325],
    [0.5, 0.5, 0.0],
    [0.5, 0.5, 0.25],
    [0.3, 0.3, 0.0],
    [0.3, 0.3, 0.15],
    [0.15, 0.15, 0.0],
    [0.15, 0.15, 0.075],
    [0.75, 1.0, 0.0],
    [0.875, 1.0, 0.5],
    [0.4875, 0.65, 0.0],
    [0.5688, 0.65, 0.325],
    [0.375, 0.5, 0.0],
    [0.4375, 0.5, 0.25],
    [0.225, 0.3, 0.0],
    [0.2625, 0.3, 0.15],
    [0.1125, 0.15, 0.0],
    [0.1313, 0.15, 0.075],
    [0.5, 1.0, 0.0],
    [0.75, 1.0, 0.5],
    [0.325, 0.65, 0.0],
    [0.4875, 0.65, 0.325],
    [0.25, 0.5, 0.0],
    [0.375, 0.5, 0.25],
    [0.15, 0.3, 0.0],
    [0.225, 0.3, 0.15],
    [0.075, 0.15, 0.0],
    [0.1125, 0.15, 0.075],
    [0.25, 1.0, 0.0],
    [0.625, 1.0, 0.5],
    [0.1625, 0.65, 0.0],
    [0.4063, 0.65, 0.325],
    [0.125, 0.5, 0.0],
    [0.3125, 0.5, 0.25],
    [0.075, 0.3, 0.0],
    [0.1875, 0.3, 0.15],
    [0.0375, 0.15, 0.0],
    [0.0938, 0.15, 0.075],
    [0.0, 1.0, 0.0],
    [0.5, 1.0, 0.5],
    [0.0, 0.65, 0.0],
    [0.325, 0.65, 0.325],
    [0.0, 0.5, 0.0],
    [0.25, 0.5, 0.25],
    [0.0, 0.3, 0.0],
    [0.15, 0.3, 0.15],
    [0.0, 0.15, 0.0],
    [0.075, 0.15, 0.075],
    [0.0, 1.0, 0.25],
    [0.5, 1.0, 0.625],
    [0.0, 0.65, 0.1625],
    [0.325, 0.65, 0.4063],
    [0.0, 0.5, 0.125],
    [0.25, 0.5, 0.3125],
    [0.0, 0.3, 0.075],
    [0.15, 0.3, 0.1875],
    [0.0, 0.15, 0.0375],
    [0.075, 0.15, 0.0938],
    [0.0, 1.0, 0.5],
    [0.5, 1.0, 0.75],
    [0.0, 0.65, 0.325],
    [0.325, 0.65, 0.4875],
    [0.0, 0.5, 0.25],
    [0.25, 0.5, 0.375],
    [0.0, 0.3, 0.15],
    [0.15, 0.3, 0.225],
    [0.0, 0.15, 0.075],
    [0.075, 0.15, 0.1125],
    [0.0, 1.0, 0.75],
    [0.5, 1.0, 0.875],
    [0.0, 0.65, 0.4875],
    [0.325, 0.65, 0.5688],
    [0.0, 0.5, 0.375],
    [0.25, 0.5, 0.4375],
    [0.0, 0.3, 0.225],
    [0.15, 0.3, 0.2625],
    [0.0, 0.15, 0.1125],
    [0.075, 0.15, 0.1313],
    [0.0, 1.0, 1.0],
    [0.5, 1.0, 1.0],
    [0.0, 0.65, 0.65],
    [0.325, 0.65, 0.65],
    [0.0, 0.5, 0.5],
    [0.25, 0.5, 0.5],
    [0.0, 0.3, 0.3],
    [0.15, 0.3, 0.3],
    [0.0, 0.15, 0.15],
    [0.075, 0.15, 0.15],
    [0.0, 0.75, 1.0],
    [0.5, 0.875, 1.0],
    [0.0, 0.4875, 0.65],
    [0.325, 0.5688, 0.65],
    [0.0, 0.375, 0.5],
    [0.25, 0.4375, 0.5],
    [0.0, 0.225, 0.3],
    [0.15, 0.2625, 0.3],
    [0.0, 0.1125, 0.15],
    [0.075, 0.1313, 0.15],
    [0.0, 0.5, 1.0],
    [0.5, 0.75, 1.0],
    [0.0, 0.325, 0.65],
    [0.325, 0.4875, 0.65],
    [0.0, 0.25, 0.5],
    [0.25, 0.375, 0.5],
    [0.0, 0.15, 0.3],
    [0.15, 0.225, 0.3],
    [0.0, 0.075, 0.15],
    [0.075, 0.1125, 0.15],
    [0.0, 0.25, 1.0],
    [0.5, 0.625, 1.0],
    [0.0, 0.1625, 0.65],
    [0.325, 0.4063, 0.65],
    [0.0, 0.125, 0.5],
    [0.25, 0.3125, 0.5],
    [0.0, 0.075, 0.3],
    [0.15, 0.1875, 0.3],
    [0.0, 0.0375, 0.15],
    [0.075, 0.0938, 0.15],
    [0.0, 0.0, 1.0],
    [0.5, 0.5, 1.0],
    [0.0, 0.0, 0.65],
    [0.325, 0.325, 0.65],
    [0.0, 0.0, 0.5],
    [0.25, 0.25, 0.5],
    [0.0, 0.0, 0.3],
    [0.15, 0.15, 0.3],
    [0.0, 0.0, 0.15],
    [0.075, 0.075, 0.15],
    [0.25, 0.0, 1.0],
    [0.625, 0.5, 1.0],
    [0.1625, 0.0, 0.65],
    [0.4063, 0.325, 0.65],
    [0.125, 0.0, 0.5],
    [0.3125, 0.25, 0.5],
    [0.075, 0.0, 0.3],
    [0.1875, 0.15, 0.3],
    [0.0375, 0.0, 0.15],
    [0.0938, 0.075, 0.15],
    [0.5, 0.0, 1.0],
    [0.75, 0.5, 1.0],
    [0.325, 0.0, 0.65],
    [0.4875, 0.325, 0.65],
    [0.25, 0.0, 0.5],
    [0.375, 0.25, 0.5],
    [0.15, 0.0, 0.3],
    [0.225, 0.15, 0.3],
    [0.075, 0.0, 0.15],
    [0.1125, 0.075, 0.15],
    [0.75, 0.0, 1.0],
    [0.875, 0.5, 1.0],
    [0.4875, 0.0, 0.65],
    [0.5688, 0.325, 0.65],
    [0.375, 0.0, 0.5],
    [0.4375, 0.25, 0.5],
    [0.225, 0.0, 0.3],
    [0.2625, 0.15, 0.3],
    [0.1125, 0.0, 0.15],
    [0.1313, 0.075, 0.15],
    [1.0, 0.0, 1.0],
    [1.0, 0.5, 1.0],
    [0.65, 0.0, 0.65],
    [0.65, 0.325, 0.65],
    [0.5, 0.0, 0.5],
    [0.5, 0.25, 0.5],
    [0.3, 0.0, 0.3],
    [0.3, 0.15, 0.3],
    [0.15, 0.0, 0.15],
    [0.15, 0.075, 0.15],
    [1.0, 0.0, 0.75],
    [1.0, 0.5, 0.875],
    [0.65, 0.0, 0.4875],
    [0.65, 0.325, 0.5688],
    [0.5, 0.0, 0.375],
    [0.5, 0.25, 0.4375],
    [0.3, 0.0, 0.225],
    [0.3, 0.15, 0.2625],
    [0.15, 0.0, 0.1125],
    [0.15, 0.075, 0.1313],
    [1.0, 0.0, 0.5],
    [1.0, 0.5, 0.75],
    [0.65, 0.0, 0.325],
    [0.65, 0.325, 0.4875],
    [0.5, 0.0, 0.25],
    [0.5, 0.25, 0.375],
    [0.3, 0.0, 0.15],
    [0.3, 0.15, 0.225],
    [0.15, 0.0, 0.075],
    [0.15, 0.075, 0.1125],
    [1.0, 0.0, 0.25],
    [1.0, 0.5, 0.625],
    [0.65, 0.0, 0.1625],
    [0.65, 0.325, 0.4063],
    [0.5, 0.0, 0.125],
    [0.5, 0.25, 0.3125],
    [0.3, 0.0, 0.075],
    [0.3, 0.15, 0.1875],
    [0.15, 0.0, 0.0375],
    [0.15, 0.075, 0.0938],
    [0.33, 0.33, 0.33],
    [0.464, 0.464, 0.464],
    [0.598, 0.598, 0.598],
    [0.732, 0.732, 0.732],
    [0.866, 0.866, 0.866],
    [1.0, 1.0, 1.0],];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_index() {
        assert_eq!(Color::from_index(0), Color::ByBlock);
        assert_eq!(Color::from_index(256), Color::ByLayer);
        assert_eq!(Color::from_index(1), Color::Index(1));
        assert_eq!(Color::from_index(-5), Color::Index(5));
    }

    #[test]
    fn test_color_index_round_trip() {
        for i in 0..=256 {
            assert_eq!(Color::from_index(i).index(), i);
        }
    }

    #[test]
    fn test_palette_lookup() {
        assert_eq!(Color::RED.rgb(), Some((255, 0, 0)));
        assert_eq!(Color::WHITE.rgb(), Some((255, 255, 255)));
        assert_eq!(Color::ByLayer.rgb(), None);
        assert_eq!(ACI_PALETTE.len(), 256);
    }

    #[test]
    fn test_color_constants() {
        assert_eq!(Color::RED, Color::Index(1));
        assert_eq!(Color::BLACK, Color::Index(250));
        assert!(Color::ByBlock.is_inherited());
        assert!(!Color::BLUE.is_inherited());
    }

    #[test]
    fn test_true_color() {
        let tc = TrueColor::from_rgb(0x12, 0x34, 0x56);
        assert_eq!(tc.value(), 0x123456);
        assert_eq!(tc.rgb(), (0x12, 0x34, 0x56));
        assert_eq!(TrueColor::new(0xFF12_3456).value(), 0x123456);
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::ByLayer.to_string(), "ByLayer");
        assert_eq!(Color::Index(3).to_string(), "Index(3)");
    }
}
