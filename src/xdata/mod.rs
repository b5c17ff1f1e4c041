//! Extended Data (XDATA) support
//!
//! Extended data is application-specific data attached to records. It
//! starts with an application name (1001) and runs until the next record.
//! Values are typed by code range: 1000-1009 strings, 1010-1059 reals and
//! 1060-1071 integers.

use indexmap::IndexMap;

/// Extended data value types
#[derive(Debug, Clone, PartialEq)]
pub enum XDataValue {
    /// String-like value (1000-1009)
    String(String),
    /// Real value or point component (1010-1059)
    Real(f64),
    /// Integer value (1060-1071)
    Integer(i32),
}

impl XDataValue {
    pub fn as_real(&self) -> Option<f64> {
        match self {
            XDataValue::Real(r) => Some(*r),
            XDataValue::Integer(i) => Some(*i as f64),
            XDataValue::String(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            XDataValue::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

/// A single coded value
#[derive(Debug, Clone, PartialEq)]
pub struct XDataItem {
    pub code: i32,
    pub value: XDataValue,
}

impl XDataItem {
    pub fn new(code: i32, value: XDataValue) -> Self {
        Self { code, value }
    }
}

/// Extended data of one record, keyed by application name in arrival order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtendedData {
    apps: IndexMap<String, Vec<XDataItem>>,
}

impl ExtendedData {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            apps: IndexMap::new(),
        }
    }

    /// Start (or resume) the value list of an application
    pub fn begin_app(&mut self, name: impl Into<String>) {
        self.apps.entry(name.into()).or_default();
    }

    /// Append a value to the most recently started application.
    ///
    /// Returns `false` when no application has been started.
    pub fn push(&mut self, code: i32, value: XDataValue) -> bool {
        match self.apps.last_mut() {
            Some((_, items)) => {
                items.push(XDataItem::new(code, value));
                true
            }
            None => false,
        }
    }

    /// Append a value under an explicit application
    pub fn push_to(&mut self, app: &str, code: i32, value: XDataValue) {
        self.apps
            .entry(app.to_string())
            .or_default()
            .push(XDataItem::new(code, value));
    }

    /// Values of one application
    pub fn get(&self, app: &str) -> Option<&[XDataItem]> {
        self.apps.get(app).map(|v| v.as_slice())
    }

    /// First value with `code` in the given application
    pub fn find(&self, app: &str, code: i32) -> Option<&XDataValue> {
        self.get(app)?
            .iter()
            .find(|item| item.code == code)
            .map(|item| &item.value)
    }

    /// Iterate over `(application, values)` in arrival order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[XDataItem])> {
        self.apps.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of applications
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    pub fn clear(&mut self) {
        self.apps.clear();
    }
}
