//! Image definition object

/// Links an image file to the `IMAGE` entities referring to its handle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageDefinition {
    /// Hex handle (5)
    pub handle: String,
    /// Path of the image file (1)
    pub file_name: String,
}

impl ImageDefinition {
    pub fn new(handle: impl Into<String>, file_name: impl Into<String>) -> Self {
        ImageDefinition {
            handle: handle.into(),
            file_name: file_name.into(),
        }
    }
}
