//! Header variables

use indexmap::IndexMap;
use std::fmt;

use crate::types::Vector3;

/// Value of a `$NAME` header variable
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    String(String),
    Real(f64),
    Int(i64),
    Point(Vector3),
}

impl HeaderValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HeaderValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            HeaderValue::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderValue::String(s) => write!(f, "{}", s),
            HeaderValue::Real(r) => write!(f, "{}", r),
            HeaderValue::Int(i) => write!(f, "{}", i),
            HeaderValue::Point(p) => write!(f, "{}", p),
        }
    }
}

/// Header variables in file order, keyed by name including the `$`
pub type HeaderVariables = IndexMap<String, HeaderValue>;
