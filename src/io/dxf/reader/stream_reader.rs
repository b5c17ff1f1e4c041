//! Pair sources and the code/value pair type

use crate::error::Result;
use crate::io::dxf::group_code::{self, CodeContext, GroupValueType};

/// A group code and its raw value text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DxfCodePair {
    /// The group code
    pub code: i32,
    /// Value exactly as read, line terminator removed
    pub value: String,
}

impl DxfCodePair {
    /// Create a new code/value pair
    pub fn new(code: i32, value: impl Into<String>) -> Self {
        Self {
            code,
            value: value.into(),
        }
    }

    /// Value type of the code outside any special context
    pub fn value_type(&self) -> GroupValueType {
        group_code::classify(self.code, CodeContext::Entity)
    }

    /// Get value as string
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get value as integer
    pub fn as_int(&self) -> Option<i64> {
        group_code::parse_int(&self.value)
    }

    /// Get value as double
    pub fn as_double(&self) -> Option<f64> {
        group_code::parse_real(&self.value)
    }

    /// Get value as a hex handle
    pub fn as_handle(&self) -> Option<u64> {
        u64::from_str_radix(self.value.trim(), 16).ok()
    }

    /// `0/<name>` marker test
    pub fn is_marker(&self, name: &str) -> bool {
        self.code == group_code::ENTITY_TYPE && self.value.trim() == name
    }
}

impl From<(i32, String)> for DxfCodePair {
    fn from((code, value): (i32, String)) -> Self {
        DxfCodePair::new(code, value)
    }
}

impl From<(i32, &str)> for DxfCodePair {
    fn from((code, value): (i32, &str)) -> Self {
        DxfCodePair::new(code, value)
    }
}

/// Anything that yields code/value pairs in stream order
pub trait PairSource {
    /// Read the next pair; `Ok(None)` at end of stream
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>>;
}

impl<S: PairSource + ?Sized> PairSource for &mut S {
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>> {
        (**self).read_pair()
    }
}

impl<S: PairSource + ?Sized> PairSource for Box<S> {
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>> {
        (**self).read_pair()
    }
}

/// Pair source over an in-memory iterator of pairs
pub struct PairIter<I> {
    inner: I,
}

impl<I, P> PairIter<I>
where
    I: Iterator<Item = P>,
    P: Into<DxfCodePair>,
{
    pub fn new<T>(pairs: T) -> Self
    where
        T: IntoIterator<IntoIter = I, Item = P>,
    {
        PairIter {
            inner: pairs.into_iter(),
        }
    }
}

impl<I, P> PairSource for PairIter<I>
where
    I: Iterator<Item = P>,
    P: Into<DxfCodePair>,
{
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>> {
        Ok(self.inner.next().map(Into::into))
    }
}

impl From<Vec<(i32, String)>> for PairIter<std::vec::IntoIter<(i32, String)>> {
    fn from(pairs: Vec<(i32, String)>) -> Self {
        PairIter::new(pairs)
    }
}
