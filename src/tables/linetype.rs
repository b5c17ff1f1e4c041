//! Line type table entry

/// A line type table entry
///
/// The dash pattern is delivered separately, one length per dash (group
/// code 49): positive values are dashes, negative values gaps and zero a dot.
#[derive(Debug, Clone, PartialEq)]
pub struct LineType {
    /// Line type name
    pub name: String,
    /// Description shown to users (group code 3)
    pub description: String,
    /// Standard flags
    pub flags: i16,
    /// Number of dash items announced (group code 73)
    pub dash_count: usize,
    /// Total pattern length
    pub pattern_length: f64,
}

impl LineType {
    /// Create a line type without a pattern
    pub fn new(name: impl Into<String>) -> Self {
        LineType {
            name: name.into(),
            description: String::new(),
            flags: 0,
            dash_count: 0,
            pattern_length: 0.0,
        }
    }

    /// Create a line type with its pattern; the length is the sum of the
    /// absolute dash lengths
    pub fn with_pattern(name: impl Into<String>, description: impl Into<String>, dashes: &[f64]) -> Self {
        LineType {
            name: name.into(),
            description: description.into(),
            flags: 0,
            dash_count: dashes.len(),
            pattern_length: dashes.iter().map(|d| d.abs()).sum(),
        }
    }

    /// One of the inheritance pseudo line types `BYLAYER` / `BYBLOCK`
    pub fn is_inheritance_sentinel(&self) -> bool {
        let upper = self.name.to_ascii_uppercase();
        matches!(upper.as_str(), "BYLAYER" | "BYBLOCK" | "BY LAYER" | "BY BLOCK")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_pattern() {
        let lt = LineType::with_pattern("DASHED", "__ __", &[0.5, -0.25]);
        assert_eq!(lt.dash_count, 2);
        assert_eq!(lt.pattern_length, 0.75);
    }

    #[test]
    fn test_sentinels() {
        assert!(LineType::new("ByLayer").is_inheritance_sentinel());
        assert!(LineType::new("By Block").is_inheritance_sentinel());
        assert!(!LineType::new("CONTINUOUS").is_inheritance_sentinel());
    }
}
