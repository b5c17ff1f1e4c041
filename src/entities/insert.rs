//! Block reference

use crate::types::Vector3;

/// A block reference, optionally arrayed in rows and columns
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Referenced block name (2)
    pub block_name: String,
    /// Insertion point (10/20/30)
    pub insert_point: Vector3,
    /// Scale factors (41/42/43)
    pub scale: Vector3,
    /// Rotation in degrees (50)
    pub rotation: f64,
    /// Column count (70)
    pub columns: i32,
    /// Row count (71)
    pub rows: i32,
    /// Column spacing (44)
    pub column_spacing: f64,
    /// Row spacing (45)
    pub row_spacing: f64,
}

impl Insert {
    pub fn new(block_name: impl Into<String>, insert_point: Vector3) -> Self {
        Insert {
            block_name: block_name.into(),
            insert_point,
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation: 0.0,
            columns: 1,
            rows: 1,
            column_spacing: 0.0,
            row_spacing: 0.0,
        }
    }

    /// Whether the insert is a rectangular array (`MINSERT`)
    pub fn is_array(&self) -> bool {
        self.columns != 1 || self.rows != 1
    }
}
