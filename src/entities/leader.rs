//! Leader entity

/// Leader header; its vertices follow as sub-records
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leader {
    /// Arrowhead flag (71)
    pub arrow_head: i32,
    /// Path type (72): 0 straight segments, 1 spline
    pub path_type: i32,
    /// Creation flag (73)
    pub creation_flag: i32,
    /// Hookline direction (74)
    pub hookline_direction: i32,
    /// Hookline flag (75)
    pub hookline: i32,
    /// Text annotation height (40)
    pub text_height: f64,
    /// Text annotation width (41)
    pub text_width: f64,
    /// Number of vertices (76)
    pub vertex_count: usize,
}

impl Default for Leader {
    fn default() -> Self {
        Leader {
            arrow_head: 1,
            path_type: 0,
            creation_flag: 3,
            hookline_direction: 1,
            hookline: 0,
            text_height: 1.0,
            text_width: 1.0,
            vertex_count: 0,
        }
    }
}
