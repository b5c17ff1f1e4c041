//! Pair sink trait, real-number formatting and value escaping

use std::borrow::Cow;

use crate::error::Result;
use crate::io::dxf::reader::DxfCodePair;
use crate::types::{Handle, Vector3};

/// Default number of decimal digits for reals
pub const DEFAULT_PRECISION: usize = 16;

/// Trait for writing code/value pairs
pub trait DxfStreamWriter {
    /// Write a code/value pair with a string value
    fn write_string(&mut self, code: i32, value: &str) -> Result<()>;

    /// Write a code/value pair with an integer value
    fn write_int(&mut self, code: i32, value: i64) -> Result<()>;

    /// Write a code/value pair with a real value
    fn write_real(&mut self, code: i32, value: f64) -> Result<()>;

    /// Write a handle as lowercase hexadecimal
    fn write_handle(&mut self, code: i32, handle: Handle) -> Result<()> {
        self.write_string(code, &handle.to_hex())
    }

    /// Write a boolean as 0/1
    fn write_bool(&mut self, code: i32, value: bool) -> Result<()> {
        self.write_int(code, value as i64)
    }

    /// Number of decimal digits used by `write_real`
    fn set_precision(&mut self, digits: usize);

    /// Flush the sink
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Extension trait for convenient writing operations
pub trait DxfStreamWriterExt: DxfStreamWriter {
    /// Write a 2D point (codes x and x + 10)
    fn write_point2d(&mut self, x_code: i32, x: f64, y: f64) -> Result<()> {
        self.write_real(x_code, x)?;
        self.write_real(x_code + 10, y)?;
        Ok(())
    }

    /// Write a 3D point (codes x, x + 10 and x + 20)
    fn write_point3d(&mut self, x_code: i32, point: Vector3) -> Result<()> {
        self.write_real(x_code, point.x)?;
        self.write_real(x_code + 10, point.y)?;
        self.write_real(x_code + 20, point.z)?;
        Ok(())
    }

    fn write_record_type(&mut self, type_name: &str) -> Result<()> {
        self.write_string(0, type_name)
    }

    fn write_subclass(&mut self, marker: &str) -> Result<()> {
        self.write_string(100, marker)
    }

    fn write_comment(&mut self, text: &str) -> Result<()> {
        self.write_string(999, text)
    }
}

impl<T: DxfStreamWriter + ?Sized> DxfStreamWriterExt for T {}

/// Fixed-point text form of a real
///
/// `digits` decimals, then trailing zeros and a trailing point are cut.
/// `-0` becomes `0`. Non-finite values are written as `0`.
pub fn format_real(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let mut text = format!("{:.*}", digits, value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}

/// Caret escapes for values bound for a text stream
///
/// Line breaks and tabs become `^J`, `^M` and `^I`; a literal caret becomes
/// `^ ` so the reader does not take it for an escape.
pub fn escape_value(value: &str) -> Cow<'_, str> {
    if !value.contains(['^', '\n', '\r', '\t']) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '\n' => out.push_str("^J"),
            '\r' => out.push_str("^M"),
            '\t' => out.push_str("^I"),
            '^' => out.push_str("^ "),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// In-memory sink keeping the formatted pairs
#[derive(Debug, Clone)]
pub struct PairBuffer {
    pairs: Vec<DxfCodePair>,
    precision: usize,
}

impl PairBuffer {
    pub fn new() -> Self {
        PairBuffer {
            pairs: Vec::new(),
            precision: DEFAULT_PRECISION,
        }
    }

    pub fn pairs(&self) -> &[DxfCodePair] {
        &self.pairs
    }

    pub fn into_pairs(self) -> Vec<DxfCodePair> {
        self.pairs
    }

    /// Value of the first pair with `code`
    pub fn find(&self, code: i32) -> Option<&str> {
        self.pairs.iter().find(|p| p.code == code).map(|p| p.value.as_str())
    }
}

impl Default for PairBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DxfStreamWriter for PairBuffer {
    fn write_string(&mut self, code: i32, value: &str) -> Result<()> {
        self.pairs.push(DxfCodePair::new(code, value));
        Ok(())
    }

    fn write_int(&mut self, code: i32, value: i64) -> Result<()> {
        self.pairs.push(DxfCodePair::new(code, value.to_string()));
        Ok(())
    }

    fn write_real(&mut self, code: i32, value: f64) -> Result<()> {
        self.pairs.push(DxfCodePair::new(code, format_real(value, self.precision)));
        Ok(())
    }

    fn set_precision(&mut self, digits: usize) {
        self.precision = digits;
    }
}
