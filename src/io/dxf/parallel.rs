//! Decoding independent streams in parallel
//!
//! Each stream gets its own [`DxfReader`], decoder and
//! [`RecordCollector`](crate::io::dxf::RecordCollector); nothing mutable is
//! shared between workers.

use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::io::dxf::collector::CollectedRecords;
use crate::io::dxf::reader::{DecodeReport, DecoderConfiguration, DxfReader};

/// Decode every input on the rayon pool; results keep the input order
pub fn decode_all<T>(inputs: &[T], config: &DecoderConfiguration) -> Vec<Result<(CollectedRecords, DecodeReport)>>
where
    T: AsRef<[u8]> + Sync,
{
    debug!(streams = inputs.len(), "parallel decode");
    inputs
        .par_iter()
        .map(|input| {
            DxfReader::from_bytes(input.as_ref().to_vec())?
                .with_configuration(config.clone())
                .read_records()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DxfError;
    use crate::record::Record;

    fn stream(radius: u32) -> String {
        format!(
            "  0\nSECTION\n  2\nENTITIES\n  0\nCIRCLE\n 10\n0\n 20\n0\n 40\n{}\n  0\nENDSEC\n  0\nEOF\n",
            radius
        )
    }

    #[test]
    fn test_results_keep_input_order() {
        let inputs: Vec<String> = (1..=8).map(stream).collect();
        let results = decode_all(&inputs, &DecoderConfiguration::default());
        assert_eq!(results.len(), 8);
        for (i, result) in results.iter().enumerate() {
            let (records, report) = result.as_ref().unwrap();
            assert!(report.is_complete());
            match &records.entries[0].record {
                Record::Circle(c) => assert_eq!(c.radius, (i + 1) as f64),
                other => panic!("unexpected record {:?}", other),
            }
        }
    }

    #[test]
    fn test_failures_stay_per_stream() {
        let inputs = vec![stream(1), "  0\nSECTION\nnot-a-code\n".to_string()];
        let results = decode_all(&inputs, &DecoderConfiguration::default());
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(DxfError::Parse(_))));
    }
}
