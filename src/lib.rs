//! # dxf-codec
//!
//! A streaming reader and writer for DXF group-code/value pair streams.
//!
//! Decoding is a left-to-right fold over pairs. The [`Decoder`] groups them
//! into records and reports each one to a [`CreationInterface`]; problems in
//! the input become [`Notification`]s instead of errors wherever decoding can
//! go on. The [`DxfEncoder`] goes the other way, writing records for a chosen
//! format revision.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxf_codec::{DxfReader, DxfWriter, DxfVersion};
//!
//! // Read a file into owned records
//! let (records, report) = DxfReader::from_file("sample.dxf")?.read_records()?;
//! for note in report.notifications.iter() {
//!     println!("{}", note);
//! }
//!
//! // Write them back as AutoCAD 2000
//! DxfWriter::from_records(records, DxfVersion::AC1015).write_to_file("output.dxf")?;
//! # Ok::<(), dxf_codec::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`io::dxf::reader`]: pair source, decoder state machine, accumulators
//! - [`io::dxf::creation`]: the callback trait records are delivered to
//! - [`io::dxf::collector`]: a callback sink keeping [`Record`]s
//! - [`io::dxf::writer`]: the encoder, pair sinks and the file writer
//! - [`entities`], [`tables`], [`objects`]: plain record data

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod attributes;
pub mod entities;
pub mod error;
pub mod header;
pub mod io;
pub mod notification;
pub mod objects;
pub mod record;
pub mod tables;
pub mod types;
pub mod xdata;

// Re-export commonly used types
pub use attributes::{Attributes, Extrusion};
pub use error::{DxfError, Result};
pub use header::{HeaderValue, HeaderVariables};
pub use notification::{Notification, NotificationCollection, NotificationType};
pub use record::{Record, RecordEntry, RecordKind, RecordPlacement};
pub use types::{Color, DxfVersion, Handle, HandleSeed, LineWeight, TrueColor, Vector3};

// Re-export I/O types
pub use io::dxf::{
    decode_all, CancellationToken, CollectedRecords, CreationInterface, DecodeOutcome, DecodeReport, Decoder,
    DecoderConfiguration, DxfEncoder, DxfReader, DxfWriter, MalformedValuePolicy, RecordCollector,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
