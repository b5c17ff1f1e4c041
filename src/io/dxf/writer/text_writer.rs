//! ASCII pair writer

use std::io::Write;

use super::stream_writer::{escape_value, format_real, DxfStreamWriter, DEFAULT_PRECISION};
use crate::error::Result;

/// Writes pairs as text, two lines per pair; string values are caret
/// escaped
pub struct DxfTextWriter<W: Write> {
    writer: W,
    precision: usize,
}

impl<W: Write> DxfTextWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Code right-aligned in a 3-character field
    fn write_code(&mut self, code: i32) -> Result<()> {
        writeln!(self.writer, "{:>3}", code)?;
        Ok(())
    }

    /// Get the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DxfStreamWriter for DxfTextWriter<W> {
    fn write_string(&mut self, code: i32, value: &str) -> Result<()> {
        self.write_code(code)?;
        writeln!(self.writer, "{}", escape_value(value))?;
        Ok(())
    }

    fn write_int(&mut self, code: i32, value: i64) -> Result<()> {
        self.write_code(code)?;
        writeln!(self.writer, "{}", value)?;
        Ok(())
    }

    fn write_real(&mut self, code: i32, value: f64) -> Result<()> {
        self.write_code(code)?;
        writeln!(self.writer, "{}", format_real(value, self.precision))?;
        Ok(())
    }

    fn set_precision(&mut self, digits: usize) {
        self.precision = digits;
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::stream_writer::DxfStreamWriterExt;
    use super::*;
    use crate::types::{Handle, Vector3};

    fn written(f: impl FnOnce(&mut DxfTextWriter<&mut Vec<u8>>)) -> String {
        let mut buf = Vec::new();
        {
            let mut writer = DxfTextWriter::new(&mut buf);
            f(&mut writer);
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_string() {
        let out = written(|w| w.write_string(0, "LINE").unwrap());
        assert_eq!(out, "  0\nLINE\n");
    }

    #[test]
    fn test_code_alignment() {
        let out = written(|w| {
            w.write_int(5, 100).unwrap();
            w.write_int(62, 7).unwrap();
            w.write_int(370, -1).unwrap();
            w.write_string(1001, "ACAD").unwrap();
        });
        assert_eq!(out, "  5\n100\n 62\n7\n370\n-1\n1001\nACAD\n");
    }

    #[test]
    fn test_write_point3d() {
        let out = written(|w| w.write_point3d(10, Vector3::new(1.0, 2.5, 0.0)).unwrap());
        assert_eq!(out, " 10\n1\n 20\n2.5\n 30\n0\n");
    }

    #[test]
    fn test_legacy_precision() {
        let out = written(|w| {
            w.set_precision(6);
            w.write_real(40, 1.0 / 3.0).unwrap();
        });
        assert_eq!(out, " 40\n0.333333\n");
    }

    #[test]
    fn test_string_values_are_escaped() {
        let out = written(|w| w.write_string(1, "two\nlines ^ caret").unwrap());
        assert_eq!(out, "  1\ntwo^Jlines ^  caret\n");
    }

    #[test]
    fn test_write_handle() {
        let out = written(|w| w.write_handle(5, Handle::new(255)).unwrap());
        assert_eq!(out, "  5\nff\n");
    }
}
