//! Format revisions

use std::fmt;

/// Format revision targeted by the encoder or detected by the decoder
///
/// Ordering follows release order, so gating is a plain comparison:
/// `version >= DxfVersion::AC1015`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum DxfVersion {
    /// Minimal R12: no `$ACADVER`, six-digit reals
    AC1009Min,
    /// R11/R12
    AC1009,
    /// R13
    AC1012,
    /// R14
    AC1014,
    /// R2000 and later
    #[default]
    AC1015,
}

impl DxfVersion {
    /// All supported revisions, oldest first
    pub const ALL: [DxfVersion; 5] = [
        DxfVersion::AC1009Min,
        DxfVersion::AC1009,
        DxfVersion::AC1012,
        DxfVersion::AC1014,
        DxfVersion::AC1015,
    ];

    /// Parse the `$ACADVER` value. Revisions newer than AC1015 map to AC1015.
    pub fn from_version_string(value: &str) -> Option<Self> {
        match value.trim() {
            "AC1009" | "AC1006" | "AC1004" | "AC1002" => Some(DxfVersion::AC1009),
            "AC1012" => Some(DxfVersion::AC1012),
            "AC1014" => Some(DxfVersion::AC1014),
            "AC1015" | "AC1018" | "AC1021" | "AC1024" | "AC1027" | "AC1032" => {
                Some(DxfVersion::AC1015)
            }
            _ => None,
        }
    }

    /// The `$ACADVER` value, or `None` for the minimal variant which does
    /// not identify itself
    pub fn version_string(&self) -> Option<&'static str> {
        match self {
            DxfVersion::AC1009Min => None,
            DxfVersion::AC1009 => Some("AC1009"),
            DxfVersion::AC1012 => Some("AC1012"),
            DxfVersion::AC1014 => Some("AC1014"),
            DxfVersion::AC1015 => Some("AC1015"),
        }
    }

    /// Decimal digits written for real values
    pub fn real_precision(&self) -> usize {
        match self {
            DxfVersion::AC1009Min => 6,
            _ => 16,
        }
    }

    /// Entities and table entries carry explicit handles (code 5)
    pub fn has_handles(&self) -> bool {
        *self >= DxfVersion::AC1015
    }

    /// Subclass markers (code 100) are written
    pub fn has_subclass_markers(&self) -> bool {
        *self >= DxfVersion::AC1015
    }

    /// 24-bit color (420), line weight (370) and line-type scale (48)
    pub fn has_extended_attributes(&self) -> bool {
        *self >= DxfVersion::AC1015
    }

    /// BYLAYER color (62 = 256) may be written explicitly
    pub fn writes_bylayer_color(&self) -> bool {
        *self >= DxfVersion::AC1015
    }

    /// Legacy R12 and its minimal variant
    pub fn is_legacy(&self) -> bool {
        *self <= DxfVersion::AC1009
    }
}

impl fmt::Display for DxfVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DxfVersion::AC1009Min => write!(f, "AC1009 (minimal)"),
            other => write!(f, "{}", other.version_string().unwrap_or("AC1009")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(DxfVersion::AC1009Min < DxfVersion::AC1009);
        assert!(DxfVersion::AC1014 < DxfVersion::AC1015);
    }

    #[test]
    fn test_version_strings() {
        assert_eq!(DxfVersion::from_version_string("AC1015"), Some(DxfVersion::AC1015));
        assert_eq!(DxfVersion::from_version_string("AC1032"), Some(DxfVersion::AC1015));
        assert_eq!(DxfVersion::from_version_string("AC1012"), Some(DxfVersion::AC1012));
        assert_eq!(DxfVersion::from_version_string("XYZ"), None);
        assert_eq!(DxfVersion::AC1009Min.version_string(), None);
    }

    #[test]
    fn test_gating() {
        assert!(!DxfVersion::AC1009.has_handles());
        assert!(!DxfVersion::AC1014.has_subclass_markers());
        assert!(DxfVersion::AC1015.has_extended_attributes());
        assert_eq!(DxfVersion::AC1009Min.real_precision(), 6);
        assert_eq!(DxfVersion::AC1012.real_precision(), 16);
        assert!(DxfVersion::AC1009Min.is_legacy());
        assert!(!DxfVersion::AC1012.is_legacy());
    }
}
