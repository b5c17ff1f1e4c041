//! Dictionary object

/// A dictionary header; its entries follow as sub-records
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dictionary {
    /// Hex handle of the dictionary (5)
    pub handle: String,
}

impl Dictionary {
    pub fn new(handle: impl Into<String>) -> Self {
        Dictionary { handle: handle.into() }
    }
}

/// One named entry: entry name (3) and owned object handle (350/360)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DictionaryEntry {
    pub name: String,
    pub handle: String,
}

impl DictionaryEntry {
    pub fn new(name: impl Into<String>, handle: impl Into<String>) -> Self {
        DictionaryEntry {
            name: name.into(),
            handle: handle.into(),
        }
    }
}
