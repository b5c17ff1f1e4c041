//! Shared test utilities for dxf-codec integration tests.
//!
//! Builds pair streams from `(code, value)` lists, decodes them and runs
//! records through a write/read cycle. All test crates import this module
//! via `mod common;`.

#![allow(dead_code)]

use dxf_codec::io::dxf::{CollectedRecords, DecodeReport, DecoderConfiguration, PairBuffer};
use dxf_codec::{DxfReader, DxfVersion, DxfWriter, Record, RecordEntry};

// ===========================================================================
// Stream builders
// ===========================================================================

/// Format pairs as a text stream, codes right-aligned like the writer does
pub fn stream(pairs: &[(i32, &str)]) -> String {
    let mut out = String::new();
    for (code, value) in pairs {
        out.push_str(&format!("{:>3}\n{}\n", code, value));
    }
    out
}

/// An ENTITIES section holding `body`, closed by `0/EOF`
pub fn entities_stream(body: &[(i32, &str)]) -> String {
    let mut pairs = vec![(0, "SECTION"), (2, "ENTITIES")];
    pairs.extend_from_slice(body);
    pairs.extend_from_slice(&[(0, "ENDSEC"), (0, "EOF")]);
    stream(&pairs)
}

// ===========================================================================
// Decoding
// ===========================================================================

pub fn decode(text: &str) -> (CollectedRecords, DecodeReport) {
    decode_with(text, DecoderConfiguration::default())
}

pub fn decode_with(text: &str, config: DecoderConfiguration) -> (CollectedRecords, DecodeReport) {
    DxfReader::from_bytes(text.as_bytes().to_vec())
        .expect("reader")
        .with_configuration(config)
        .read_records()
        .expect("decode")
}

// ===========================================================================
// Round-trip helpers
// ===========================================================================

/// Write `records` for `version` and read the result back
pub fn round_trip(version: DxfVersion, records: Vec<Record>) -> (CollectedRecords, DecodeReport) {
    let mut writer = DxfWriter::new(version);
    for record in records {
        writer.push(record);
    }
    let bytes = writer.write_to_vec().expect("write");
    DxfReader::from_bytes(bytes)
        .expect("reader")
        .read_records()
        .expect("decode")
}

/// Decoded records without the table sentinels the writer adds
pub fn content(records: &CollectedRecords) -> Vec<&RecordEntry> {
    records
        .entries
        .iter()
        .filter(|e| match &e.record {
            Record::LineType { line_type, .. } => !line_type.is_inheritance_sentinel(),
            _ => true,
        })
        .collect()
}

/// Pairs the encoder emits for one record at `version`
pub fn record_pairs(version: DxfVersion, record: &Record) -> Vec<(i32, String)> {
    let mut encoder = dxf_codec::DxfEncoder::new(PairBuffer::new(), version);
    encoder
        .write_record(record, &dxf_codec::Attributes::default())
        .expect("encode");
    encoder
        .into_inner()
        .pairs()
        .iter()
        .map(|p| (p.code, p.value.clone()))
        .collect()
}

/// Group codes in emission order
pub fn codes(pairs: &[(i32, String)]) -> Vec<i32> {
    pairs.iter().map(|(code, _)| *code).collect()
}

/// Value of the first pair with `code`
pub fn value_of(pairs: &[(i32, String)], code: i32) -> Option<&str> {
    pairs.iter().find(|(c, _)| *c == code).map(|(_, v)| v.as_str())
}
