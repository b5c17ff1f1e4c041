//! DXF writer module
//!
//! [`DxfWriter`] lays records out as a complete file: HEADER, TABLES
//! (LTYPE, LAYER, STYLE), BLOCKS, ENTITIES and, when there are any objects,
//! OBJECTS. Records are placed by [`Record::placement`]; everything between
//! a `BLOCK` and its `ENDBLK` stays with the block.

mod encoder;
mod entity_writer;
mod stream_writer;
mod text_writer;

pub use encoder::{table_handle, DxfEncoder};
pub use stream_writer::{escape_value, format_real, DxfStreamWriter, DxfStreamWriterExt, PairBuffer, DEFAULT_PRECISION};
pub use text_writer::DxfTextWriter;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::header::HeaderVariables;
use crate::io::dxf::collector::CollectedRecords;
use crate::notification::NotificationCollection;
use crate::record::{Record, RecordEntry, RecordPlacement};
use crate::tables::LineType;
use crate::types::DxfVersion;

/// Records grouped by the section they are written to
#[derive(Default)]
struct Sections<'a> {
    line_types: Vec<&'a RecordEntry>,
    layers: Vec<&'a RecordEntry>,
    styles: Vec<&'a RecordEntry>,
    blocks: Vec<&'a RecordEntry>,
    entities: Vec<&'a RecordEntry>,
    objects: Vec<&'a RecordEntry>,
}

/// DXF file writer
pub struct DxfWriter {
    version: DxfVersion,
    header: HeaderVariables,
    entries: Vec<RecordEntry>,
}

impl DxfWriter {
    /// Create an empty writer for a target revision
    pub fn new(version: DxfVersion) -> Self {
        Self {
            version,
            header: HeaderVariables::new(),
            entries: Vec::new(),
        }
    }

    /// Writer over decoded records; the header variables are kept
    pub fn from_records(records: CollectedRecords, version: DxfVersion) -> Self {
        Self {
            version,
            header: records.header,
            entries: records.entries,
        }
    }

    pub fn with_header(mut self, header: HeaderVariables) -> Self {
        self.header = header;
        self
    }

    /// Append a record
    pub fn push(&mut self, entry: impl Into<RecordEntry>) {
        self.entries.push(entry.into());
    }

    pub fn entries(&self) -> &[RecordEntry] {
        &self.entries
    }

    pub fn version(&self) -> DxfVersion {
        self.version
    }

    /// Write to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<NotificationCollection> {
        let file = File::create(path)?;
        self.write_to_writer(BufWriter::new(file))
    }

    /// Write to any writer
    pub fn write_to_writer<W: Write>(&self, writer: W) -> Result<NotificationCollection> {
        let (_, notifications) = self.encode(DxfTextWriter::new(writer))?;
        Ok(notifications)
    }

    /// Write to a byte vector
    pub fn write_to_vec(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to_writer(&mut buffer)?;
        Ok(buffer)
    }

    /// Encode the whole file into `sink`, handing the sink back
    pub fn encode<S: DxfStreamWriter>(&self, sink: S) -> Result<(S, NotificationCollection)> {
        let sections = self.sections();
        let mut encoder = DxfEncoder::new(sink, self.version);
        debug!(
            version = %self.version,
            records = self.entries.len(),
            "writing DXF"
        );

        encoder.write_header(&self.header)?;

        encoder.section_start("TABLES")?;
        let sentinels: Vec<RecordEntry> = ["BYBLOCK", "BYLAYER"]
            .iter()
            .map(|name| {
                RecordEntry::new(Record::LineType {
                    line_type: LineType::new(*name),
                    dashes: Vec::new(),
                })
            })
            .collect();
        let line_types: Vec<&RecordEntry> = sentinels.iter().chain(sections.line_types.iter().copied()).collect();
        write_table(&mut encoder, "LTYPE", &line_types)?;
        write_table(&mut encoder, "LAYER", &sections.layers)?;
        write_table(&mut encoder, "STYLE", &sections.styles)?;
        encoder.section_end()?;

        encoder.section_start("BLOCKS")?;
        write_records(&mut encoder, &sections.blocks)?;
        encoder.section_end()?;

        encoder.section_start("ENTITIES")?;
        write_records(&mut encoder, &sections.entities)?;
        encoder.section_end()?;

        if !sections.objects.is_empty() {
            encoder.section_start("OBJECTS")?;
            write_records(&mut encoder, &sections.objects)?;
            encoder.section_end()?;
        }

        encoder.eof()?;
        let notifications = encoder.notifications();
        Ok((encoder.into_inner(), notifications))
    }

    fn sections(&self) -> Sections<'_> {
        let mut sections = Sections::default();
        let mut in_block = false;
        for entry in &self.entries {
            if in_block {
                sections.blocks.push(entry);
                in_block = !matches!(entry.record, Record::EndBlock);
                continue;
            }
            match (&entry.record, entry.record.placement()) {
                (Record::Layer(_), _) => sections.layers.push(entry),
                (Record::LineType { line_type, .. }, _) => {
                    if !line_type.is_inheritance_sentinel() {
                        sections.line_types.push(entry);
                    }
                }
                (Record::TextStyle(_), _) => sections.styles.push(entry),
                (Record::Block(_), _) => {
                    sections.blocks.push(entry);
                    in_block = true;
                }
                (_, RecordPlacement::Blocks) => sections.blocks.push(entry),
                (_, RecordPlacement::Objects) => sections.objects.push(entry),
                _ => sections.entities.push(entry),
            }
        }
        sections
    }
}

fn write_table<S: DxfStreamWriter>(encoder: &mut DxfEncoder<S>, name: &str, entries: &[&RecordEntry]) -> Result<()> {
    let handle = table_handle(name).unwrap_or(0);
    encoder.table_start(name, entries.len(), handle)?;
    for entry in entries {
        encoder.write_entry(entry)?;
    }
    encoder.table_end()
}

/// Write records in order; an `INSERT` followed by `ATTRIB`s gets the
/// attributes-follow flag and a closing `SEQEND`
fn write_records<S: DxfStreamWriter>(encoder: &mut DxfEncoder<S>, entries: &[&RecordEntry]) -> Result<()> {
    let mut i = 0;
    while i < entries.len() {
        let entry = entries[i];
        i += 1;
        let Record::Insert(insert) = &entry.record else {
            encoder.write_entry(entry)?;
            continue;
        };
        let attribs = entries[i..]
            .iter()
            .take_while(|e| matches!(e.record, Record::Attribute(_)))
            .count();
        if attribs == 0 {
            encoder.write_entry(entry)?;
            continue;
        }
        encoder.write_insert_sequence(entry, insert, &entries[i..i + attribs])?;
        i += attribs;
    }
    Ok(())
}

impl Default for DxfWriter {
    fn default() -> Self {
        Self::new(DxfVersion::AC1015)
    }
}
