//! Dimension entities
//!
//! Every dimension shares [`DimensionCommon`]; the low three bits of its
//! type (group code 70) select the variant carried in [`DimensionKind`].

use crate::types::Vector3;

/// Fields shared by all dimension kinds
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionCommon {
    /// Definition point (10/20/30)
    pub definition_point: Vector3,
    /// Middle point of the text (11/21/31)
    pub text_middle_point: Vector3,
    /// Dimension type (70) with its flag bits; the ordinate x-type bit
    /// (64) is carried by [`OrdinateDimension::x_type`] instead
    pub dimension_type: i32,
    /// Text attachment point (71)
    pub attachment_point: i32,
    /// Text line spacing style (72)
    pub line_spacing_style: i32,
    /// Text line spacing factor (41)
    pub line_spacing_factor: f64,
    /// Explicit text (1); empty means measured value, `<>` embeds it
    pub text: String,
    /// Dimension style name (3)
    pub style: String,
    /// Text rotation in degrees (53)
    pub text_rotation: f64,
}

impl Default for DimensionCommon {
    fn default() -> Self {
        DimensionCommon {
            definition_point: Vector3::ZERO,
            text_middle_point: Vector3::ZERO,
            dimension_type: 0,
            attachment_point: 5,
            line_spacing_style: 1,
            line_spacing_factor: 1.0,
            text: String::new(),
            style: "Standard".to_string(),
            text_rotation: 0.0,
        }
    }
}

/// Aligned dimension: measured parallel to its extension points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AlignedDimension {
    /// First extension line origin (13/23/33)
    pub first_point: Vector3,
    /// Second extension line origin (14/24/34)
    pub second_point: Vector3,
}

/// Linear (rotated) dimension
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearDimension {
    /// First extension line origin (13/23/33)
    pub first_point: Vector3,
    /// Second extension line origin (14/24/34)
    pub second_point: Vector3,
    /// Rotation of the dimension line in degrees (50)
    pub rotation: f64,
    /// Oblique angle of the extension lines in degrees (52)
    pub oblique: f64,
}

/// Radial dimension
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RadialDimension {
    /// Point on the curve (15/25/35)
    pub definition_point: Vector3,
    /// Leader length (40)
    pub leader_length: f64,
}

/// Diametric dimension
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DiametricDimension {
    /// Point on the curve opposite the definition point (15/25/35)
    pub definition_point: Vector3,
    /// Leader length (40)
    pub leader_length: f64,
}

/// Two-line angular dimension
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AngularDimension {
    /// First line start (13/23/33)
    pub first_line_start: Vector3,
    /// First line end (14/24/34)
    pub first_line_end: Vector3,
    /// Second line start (15/25/35)
    pub second_line_start: Vector3,
    /// Location of the dimension arc (16/26/36)
    pub arc_point: Vector3,
}

/// Three-point angular dimension
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angular3PointDimension {
    /// First extension line point (13/23/33)
    pub first_point: Vector3,
    /// Second extension line point (14/24/34)
    pub second_point: Vector3,
    /// Angle vertex (15/25/35)
    pub vertex: Vector3,
}

/// Ordinate dimension
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrdinateDimension {
    /// Feature location (13/23/33)
    pub feature_point: Vector3,
    /// Leader end point (14/24/34)
    pub leader_end_point: Vector3,
    /// Measures the X ordinate (type bit 64) instead of Y
    pub x_type: bool,
}

/// Variant data of a dimension
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DimensionKind {
    Linear(LinearDimension),
    Aligned(AlignedDimension),
    Angular(AngularDimension),
    Diametric(DiametricDimension),
    Radial(RadialDimension),
    Angular3Point(Angular3PointDimension),
    Ordinate(OrdinateDimension),
}

impl DimensionKind {
    /// Bit flag in the type marking an X-ordinate dimension
    pub const ORDINATE_X_TYPE: i32 = 64;

    /// Type code carried in the low three bits of group code 70
    pub fn type_code(&self) -> i32 {
        match self {
            DimensionKind::Linear(_) => 0,
            DimensionKind::Aligned(_) => 1,
            DimensionKind::Angular(_) => 2,
            DimensionKind::Diametric(_) => 3,
            DimensionKind::Radial(_) => 4,
            DimensionKind::Angular3Point(_) => 5,
            DimensionKind::Ordinate(_) => 6,
        }
    }

    /// Subclass marker written after the common dimension fields
    pub fn subclass_marker(&self) -> &'static str {
        match self {
            DimensionKind::Linear(_) | DimensionKind::Aligned(_) => "AcDbAlignedDimension",
            DimensionKind::Angular(_) => "AcDb2LineAngularDimension",
            DimensionKind::Diametric(_) => "AcDbDiametricDimension",
            DimensionKind::Radial(_) => "AcDbRadialDimension",
            DimensionKind::Angular3Point(_) => "AcDb3PointAngularDimension",
            DimensionKind::Ordinate(_) => "AcDbOrdinateDimension",
        }
    }
}

/// A complete dimension
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub common: DimensionCommon,
    pub kind: DimensionKind,
}

impl Dimension {
    pub fn new(common: DimensionCommon, kind: DimensionKind) -> Self {
        Dimension { common, kind }
    }

    /// The group code 70 value to write: the variant's type code over the
    /// flag bits kept from `common.dimension_type`
    pub fn type_flags(&self) -> i32 {
        let flags = (self.common.dimension_type & !(0x07 | DimensionKind::ORDINATE_X_TYPE)) | self.kind.type_code();
        match &self.kind {
            DimensionKind::Ordinate(ordinate) if ordinate.x_type => flags | DimensionKind::ORDINATE_X_TYPE,
            _ => flags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_flags_keep_upper_bits() {
        let common = DimensionCommon {
            dimension_type: 32 | 4,
            ..Default::default()
        };
        let dim = Dimension::new(common, DimensionKind::Aligned(AlignedDimension::default()));
        assert_eq!(dim.type_flags(), 33);
    }

    #[test]
    fn test_ordinate_x_type_bit() {
        let ordinate = OrdinateDimension {
            x_type: true,
            ..Default::default()
        };
        let dim = Dimension::new(DimensionCommon::default(), DimensionKind::Ordinate(ordinate));
        assert_eq!(dim.type_flags(), 64 | 6);
    }

    #[test]
    fn test_x_type_bit_only_from_ordinate() {
        let common = DimensionCommon {
            dimension_type: 64 | 32,
            ..Default::default()
        };
        let linear = Dimension::new(common.clone(), DimensionKind::Linear(LinearDimension::default()));
        assert_eq!(linear.type_flags(), 32);
        let ordinate = Dimension::new(common, DimensionKind::Ordinate(OrdinateDimension::default()));
        assert_eq!(ordinate.type_flags(), 32 | 6);
    }
}
