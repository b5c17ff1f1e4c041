//! DXF ASCII text reader

use super::stream_reader::{DxfCodePair, PairSource};
use crate::error::{DxfError, Result};
use encoding_rs::Encoding;
use std::io::{BufRead, BufReader, Read};

/// Reads code/value pairs from a text stream, two lines per pair
pub struct DxfTextReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    /// Non-UTF8 fallback encoding.  `None` means use Latin-1 (byte-to-char).
    encoding: Option<&'static Encoding>,
}

impl<R: Read> DxfTextReader<R> {
    /// Create a new DXF text reader
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            encoding: None,
        }
    }

    /// Fallback encoding for lines that are not valid UTF-8
    pub fn with_encoding(mut self, encoding: Option<&'static Encoding>) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = Some(encoding);
    }

    /// Lines consumed so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read one line without its terminator; UTF-8 first, then the fallback
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        while matches!(bytes.last(), Some(b'\n') | Some(b'\r')) {
            bytes.pop();
        }

        let line = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(err) => {
                let bytes = err.into_bytes();
                match self.encoding {
                    Some(enc) => enc.decode(&bytes).0.into_owned(),
                    // Latin-1 is a 1:1 mapping of bytes 0-255 to Unicode code points
                    None => bytes.iter().map(|&b| b as char).collect(),
                }
            }
        };
        Ok(Some(line))
    }
}

/// Undo the caret escapes used for control characters in values
pub fn unescape_value(value: &str) -> String {
    if !value.contains('^') {
        return value.to_string();
    }
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '^' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('J') => out.push('\n'),
            Some('M') => out.push('\r'),
            Some('I') => out.push('\t'),
            Some(' ') => out.push('^'),
            _ => {
                out.push('^');
                continue;
            }
        }
        chars.next();
    }
    out
}

impl<R: Read> PairSource for DxfTextReader<R> {
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>> {
        let code_line = loop {
            match self.read_line()? {
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => break line,
                None => return Ok(None),
            }
        };

        let code = code_line.trim().parse::<i32>().map_err(|_| {
            DxfError::Parse(format!(
                "Invalid group code at line {}: '{}'",
                self.line_number, code_line
            ))
        })?;

        let value_line = match self.read_line()? {
            Some(line) => line,
            None => {
                return Err(DxfError::Parse(format!(
                    "Unexpected end of stream after code {} at line {}",
                    code, self.line_number
                )))
            }
        };

        Ok(Some(DxfCodePair::new(code, unescape_value(&value_line))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_simple_pair() {
        let mut reader = DxfTextReader::new(Cursor::new("  0\r\nSECTION\r\n"));
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.code, 0);
        assert_eq!(pair.value, "SECTION");
        assert!(reader.read_pair().unwrap().is_none());
    }

    #[test]
    fn test_read_numeric_pairs() {
        let mut reader = DxfTextReader::new(Cursor::new(" 70\n42\n 10\n123.456\n"));
        assert_eq!(reader.read_pair().unwrap().unwrap().as_int(), Some(42));
        assert_eq!(reader.read_pair().unwrap().unwrap().as_double(), Some(123.456));
        assert_eq!(reader.line_number(), 4);
    }

    #[test]
    fn test_bad_code_line() {
        let mut reader = DxfTextReader::new(Cursor::new("abc\nx\n"));
        assert!(matches!(reader.read_pair(), Err(DxfError::Parse(_))));
    }

    #[test]
    fn test_missing_value_line() {
        let mut reader = DxfTextReader::new(Cursor::new("  0\n"));
        assert!(reader.read_pair().is_err());
    }

    #[test]
    fn test_special_characters() {
        let mut reader = DxfTextReader::new(Cursor::new("1\nLine1^JLine2^MLine3^ x\n"));
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.value, "Line1\nLine2\rLine3^x");
    }

    #[test]
    fn test_fallback_encoding() {
        let bytes: Vec<u8> = vec![b'1', b'\n', 0xC4, b'\n'];
        let mut reader = DxfTextReader::new(Cursor::new(bytes.clone()));
        assert_eq!(reader.read_pair().unwrap().unwrap().value, "\u{c4}");

        let mut reader = DxfTextReader::new(Cursor::new(bytes)).with_encoding(Some(encoding_rs::WINDOWS_1251));
        assert_eq!(reader.read_pair().unwrap().unwrap().value, "\u{414}");
    }
}
