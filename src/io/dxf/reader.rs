//! DXF stream reader

pub mod accumulator;
pub mod decoder;
pub mod hatch_accumulator;
pub mod record_builder;
pub mod stream_reader;
pub mod text_reader;

pub use decoder::{
    CancellationToken, DecodeOutcome, DecodeReport, Decoder, DecoderConfiguration, DecoderState,
    MalformedValuePolicy, SubRecord,
};
pub use stream_reader::{DxfCodePair, PairIter, PairSource};
pub use text_reader::DxfTextReader;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use encoding_rs::Encoding;
use tracing::debug;

use crate::error::{DxfError, Result};
use crate::io::dxf::code_page::{detect_code_page, encoding_from_code_page};
use crate::io::dxf::collector::{CollectedRecords, RecordCollector};
use crate::io::dxf::creation::CreationInterface;

const BINARY_SENTINEL: &[u8] = b"AutoCAD Binary DXF";

/// Reads a whole text stream and decodes it
pub struct DxfReader {
    bytes: Vec<u8>,
    encoding: Option<&'static Encoding>,
    config: DecoderConfiguration,
    cancellation: Option<CancellationToken>,
}

impl DxfReader {
    /// Create a reader over any byte source
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(bytes)
    }

    /// Create a reader from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    /// Create a reader over an in-memory stream
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.starts_with(BINARY_SENTINEL) {
            return Err(DxfError::Parse("binary DXF streams are not supported".to_string()));
        }
        let encoding = detect_code_page(&bytes).and_then(|cp| {
            let encoding = encoding_from_code_page(&cp);
            debug!(code_page = %cp, encoding = ?encoding.map(|e| e.name()), "fallback text encoding");
            encoding
        });
        Ok(Self {
            bytes,
            encoding,
            config: DecoderConfiguration::default(),
            cancellation: None,
        })
    }

    /// Set the decoder configuration
    pub fn with_configuration(mut self, config: DecoderConfiguration) -> Self {
        self.config = config;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Encoding used for lines that are not valid UTF-8; `None` is Latin-1
    pub fn encoding(&self) -> Option<&'static Encoding> {
        self.encoding
    }

    /// Decode the stream into `creation`
    pub fn read(&self, creation: &mut dyn CreationInterface) -> Result<DecodeReport> {
        let mut source = DxfTextReader::new(self.bytes.as_slice()).with_encoding(self.encoding);
        let mut decoder = Decoder::with_configuration(self.config.clone());
        if let Some(token) = &self.cancellation {
            decoder = decoder.with_cancellation(token.clone());
        }
        decoder.decode(&mut source, creation)
    }

    /// Decode the stream into owned records
    pub fn read_records(&self) -> Result<(CollectedRecords, DecodeReport)> {
        let mut collector = RecordCollector::new();
        let report = self.read(&mut collector)?;
        Ok((collector.into_records(), report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    const MINIMAL: &str = "  0\nSECTION\n  2\nENTITIES\n  0\nCIRCLE\n  8\n0\n 10\n1\n 20\n2\n 30\n0\n 40\n3\n  0\nENDSEC\n  0\nEOF\n";

    #[test]
    fn test_read_records() {
        let reader = DxfReader::from_reader(MINIMAL.as_bytes()).unwrap();
        let (records, report) = reader.read_records().unwrap();
        assert!(report.is_complete());
        assert_eq!(records.entries.len(), 1);
        match &records.entries[0].record {
            Record::Circle(c) => assert_eq!(c.radius, 3.0),
            other => panic!("unexpected record {:?}", other),
        }
    }

    #[test]
    fn test_binary_rejected() {
        let mut bytes = BINARY_SENTINEL.to_vec();
        bytes.extend_from_slice(b"\r\n\x1a\0");
        assert!(matches!(DxfReader::from_bytes(bytes), Err(DxfError::Parse(_))));
    }

    #[test]
    fn test_code_page_detected() {
        let text = "  0\nSECTION\n  2\nHEADER\n  9\n$DWGCODEPAGE\n  3\nANSI_1251\n  0\nENDSEC\n  0\nEOF\n";
        let reader = DxfReader::from_bytes(text.as_bytes().to_vec()).unwrap();
        assert_eq!(reader.encoding(), Some(encoding_rs::WINDOWS_1251));
    }

    #[test]
    fn test_parse_error_has_line_number() {
        let text = "  0\nSECTION\nabc\nENTITIES\n";
        let reader = DxfReader::from_bytes(text.as_bytes().to_vec()).unwrap();
        let err = reader.read(&mut crate::io::dxf::creation::NullCreation).unwrap_err();
        assert!(matches!(err, DxfError::Parse(_)));
    }
}
