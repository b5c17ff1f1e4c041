//! DXF pair streams: decoding, record assembly and encoding
//!
//! - [`reader`]: text pair source, the [`Decoder`] state machine and
//!   [`DxfReader`]
//! - [`creation`]: the [`CreationInterface`] the decoder calls
//! - [`collector`]: a [`CreationInterface`] that keeps owned records
//! - [`writer`]: the [`DxfEncoder`] and the file-level [`DxfWriter`]

pub mod code_page;
pub mod collector;
pub mod creation;
pub mod group_code;
pub mod parallel;
pub mod reader;
pub mod writer;

pub use code_page::{detect_code_page, encoding_from_code_page};
pub use collector::{CollectedRecords, RecordCollector};
pub use creation::{CreationInterface, NullCreation};
pub use group_code::{classify, CodeContext, GroupValueType};
pub use parallel::decode_all;
pub use reader::{
    CancellationToken, DecodeOutcome, DecodeReport, Decoder, DecoderConfiguration, DecoderState,
    DxfCodePair, DxfReader, DxfTextReader, MalformedValuePolicy, PairSource,
};
pub use writer::{DxfEncoder, DxfStreamWriter, DxfStreamWriterExt, DxfTextWriter, DxfWriter, PairBuffer};
