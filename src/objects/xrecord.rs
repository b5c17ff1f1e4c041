//! XRecord object - arbitrary application data

use std::fmt;

/// Typed payload value
#[derive(Debug, Clone, PartialEq)]
pub enum XRecordData {
    String(String),
    Real(f64),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for XRecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XRecordData::String(s) => write!(f, "{}", s),
            XRecordData::Real(r) => write!(f, "{}", r),
            XRecordData::Int(i) => write!(f, "{}", i),
            XRecordData::Bool(b) => write!(f, "{}", *b as i32),
        }
    }
}

/// One payload pair of an XRecord
#[derive(Debug, Clone, PartialEq)]
pub struct XRecordValue {
    pub code: i32,
    pub value: XRecordData,
}

impl XRecordValue {
    pub fn new(code: i32, value: XRecordData) -> Self {
        XRecordValue { code, value }
    }

    pub fn string(code: i32, value: impl Into<String>) -> Self {
        Self::new(code, XRecordData::String(value.into()))
    }

    pub fn real(code: i32, value: f64) -> Self {
        Self::new(code, XRecordData::Real(value))
    }

    pub fn int(code: i32, value: i64) -> Self {
        Self::new(code, XRecordData::Int(value))
    }

    pub fn boolean(code: i32, value: bool) -> Self {
        Self::new(code, XRecordData::Bool(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(XRecordData::Bool(true).to_string(), "1");
        assert_eq!(XRecordData::Int(-4).to_string(), "-4");
        assert_eq!(XRecordValue::string(1, "abc").value.to_string(), "abc");
    }
}
