//! Version-aware pair encoder
//!
//! [`DxfEncoder`] turns records into group-code pairs on any
//! [`DxfStreamWriter`]. It owns the handle counter and decides, per target
//! revision, which codes may appear:
//!
//! - handles (5) and subclass markers (100) only from AC1015 on
//! - 24-bit color (420), line weight (370) and line-type scale (48) only
//!   from AC1015 on
//! - `BYLAYER` color (62 = 256) only from AC1015 on
//!
//! Codes dropped for an older revision are counted and reported through
//! [`DxfEncoder::notifications`]. The per-record writers live in
//! `entity_writer`.

use ahash::AHashSet;
use indexmap::IndexMap;
use tracing::debug;

use crate::attributes::{Attributes, Extrusion};
use crate::entities::Block;
use crate::error::Result;
use crate::header::{HeaderValue, HeaderVariables};
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::{Color, DxfVersion, Handle, HandleSeed, LineWeight, Vector3};
use crate::xdata::{ExtendedData, XDataItem, XDataValue};

use super::stream_writer::{DxfStreamWriter, DxfStreamWriterExt};

/// Application name of the extended data the writer itself emits
pub(super) const ACAD_APP: &str = "ACAD";

/// Lowest value written to `$HANDSEED`
const HANDSEED_FLOOR: u64 = 0xFFFF;

/// Fixed handle of a symbol table, by table name
pub fn table_handle(name: &str) -> Option<u64> {
    match name {
        "BLOCK_RECORD" => Some(0x1),
        "LAYER" => Some(0x2),
        "STYLE" => Some(0x3),
        "LTYPE" => Some(0x5),
        "VIEW" => Some(0x6),
        "UCS" => Some(0x7),
        "VPORT" => Some(0x8),
        "APPID" => Some(0x9),
        "DIMSTYLE" => Some(0xA),
        _ => None,
    }
}

/// Group code carrying a string header variable
fn header_string_code(name: &str) -> i32 {
    match name {
        "$HANDSEED" => 5,
        "$DWGCODEPAGE" => 3,
        "$CLAYER" => 8,
        "$CELTYPE" => 6,
        "$TEXTSTYLE" => 7,
        "$DIMSTYLE" | "$UCSNAME" | "$PUCSNAME" => 2,
        _ => 1,
    }
}

/// Writes records as pairs for one target revision
pub struct DxfEncoder<W: DxfStreamWriter> {
    pub(super) writer: W,
    pub(super) version: DxfVersion,
    handles: HandleSeed,
    /// Every handle issued or written so far
    used: AHashSet<u64>,
    app_dictionary: Option<Handle>,
    notifications: NotificationCollection,
    omitted: IndexMap<i32, usize>,
    /// Extrusion of the record being written
    pub(super) extrusion: Extrusion,
    /// Extended data of the record being written, consumed once
    pub(super) xdata: ExtendedData,
    /// Last block opened, for the matching `ENDBLK`
    pub(super) open_block: Option<Block>,
}

impl<W: DxfStreamWriter> DxfEncoder<W> {
    /// Create an encoder; real precision follows the revision
    pub fn new(mut writer: W, version: DxfVersion) -> Self {
        writer.set_precision(version.real_precision());
        if version.is_legacy() {
            debug!(%version, "legacy target: handles, subclass markers and extended attributes are dropped");
        }
        DxfEncoder {
            writer,
            version,
            handles: HandleSeed::new(),
            used: AHashSet::new(),
            app_dictionary: None,
            notifications: NotificationCollection::new(),
            omitted: IndexMap::new(),
            extrusion: Extrusion::default(),
            xdata: ExtendedData::new(),
            open_block: None,
        }
    }

    /// Start handle numbering somewhere other than [`HandleSeed::BASE`]
    pub fn with_handle_seed(mut self, seed: HandleSeed) -> Self {
        self.handles = seed;
        self
    }

    /// Owner written (330) on XRECORD objects
    pub fn with_app_dictionary(mut self, handle: Handle) -> Self {
        self.app_dictionary = Some(handle);
        self
    }

    pub fn version(&self) -> DxfVersion {
        self.version
    }

    pub fn app_dictionary(&self) -> Option<Handle> {
        self.app_dictionary
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write the current handle to code 5 and advance the counter
    ///
    /// Older revisions advance without writing.
    pub fn handle(&mut self) -> Result<Handle> {
        let handle = self.issue();
        if self.allows(5, true) {
            self.writer.write_handle(5, handle)?;
        }
        Ok(handle)
    }

    /// The value the counter stands at; [`DxfEncoder::handle`] uses it
    /// unless it was already written
    pub fn next_handle(&self) -> Handle {
        self.handles.peek()
    }

    /// Take a handle without writing it
    pub fn reserve_handle(&mut self) -> Handle {
        self.issue()
    }

    /// Next counter value not handed out or written before
    fn issue(&mut self) -> Handle {
        loop {
            let handle = self.handles.issue();
            if self.used.insert(handle.value()) {
                return handle;
            }
        }
    }

    /// Whether `handle` was already issued or written
    pub fn is_used(&self, handle: Handle) -> bool {
        self.used.contains(&handle.value())
    }

    /// Write a handle chosen by the caller; the counter moves past it
    pub(super) fn fixed_handle(&mut self, handle: Handle) -> Result<()> {
        self.handles.skip_past(handle);
        self.used.insert(handle.value());
        if self.allows(5, true) {
            self.writer.write_handle(5, handle)?;
        }
        Ok(())
    }

    /// Write the handle an object already carries, or issue one when it
    /// has none or the handle was written before
    pub(super) fn object_handle(&mut self, existing: &str) -> Result<Handle> {
        match Handle::parse_hex(existing.trim()) {
            Some(handle) if !handle.is_null() && !self.is_used(handle) => {
                self.fixed_handle(handle)?;
                Ok(handle)
            }
            Some(handle) if !handle.is_null() => {
                debug!(%handle, "stored handle already written, issuing a new one");
                self.handle()
            }
            _ => self.handle(),
        }
    }

    /// Everything reported so far, with one entry per dropped group code
    pub fn notifications(&self) -> NotificationCollection {
        let mut all = self.notifications.clone();
        for (code, count) in &self.omitted {
            all.notify(
                NotificationType::UnsupportedVersionFeature,
                format!("group code {} omitted {} time(s) for {}", code, count, self.version),
            );
        }
        all
    }

    /// How often `code` was dropped for the target revision
    pub fn omitted(&self, code: i32) -> usize {
        self.omitted.get(&code).copied().unwrap_or(0)
    }

    pub(super) fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        self.notifications.notify(notification_type, message);
    }

    /// Whether a revision-gated code may be written; a `meaningful` value
    /// that has to be dropped is counted
    pub(super) fn allows(&mut self, code: i32, meaningful: bool) -> bool {
        if self.version >= DxfVersion::AC1015 {
            return true;
        }
        if meaningful {
            *self.omitted.entry(code).or_insert(0) += 1;
        }
        false
    }

    pub(super) fn subclass(&mut self, marker: &str) -> Result<()> {
        if self.allows(100, true) {
            self.writer.write_subclass(marker)?;
        }
        Ok(())
    }

    /// Record type, handle and the entity subclass
    pub(super) fn entity(&mut self, type_name: &str, attributes: &Attributes) -> Result<Handle> {
        self.writer.write_record_type(type_name)?;
        let handle = self.handle()?;
        self.subclass("AcDbEntity")?;
        self.write_attributes(attributes)?;
        Ok(handle)
    }

    /// Presentation attributes in wire order: 8, 62, 420, 370, 48, 6, 67
    pub fn write_attributes(&mut self, attributes: &Attributes) -> Result<()> {
        self.writer.write_string(8, attributes.layer_name())?;
        if attributes.color != Color::ByLayer || self.version.writes_bylayer_color() {
            self.writer.write_int(62, attributes.color.index() as i64)?;
        }
        if let Some(true_color) = attributes.true_color {
            if self.allows(420, true) {
                self.writer.write_int(420, true_color.value() as i64)?;
            }
        }
        if self.allows(370, attributes.line_weight != LineWeight::ByLayer) {
            self.writer.write_int(370, attributes.line_weight.value() as i64)?;
        }
        if self.allows(48, attributes.line_type_scale != 1.0) {
            self.writer.write_real(48, attributes.line_type_scale)?;
        }
        if self.version >= DxfVersion::AC1015 || !attributes.line_type_is_bylayer() {
            self.writer.write_string(6, attributes.line_type())?;
        }
        if attributes.paper_space {
            self.writer.write_int(67, 1)?;
        }
        Ok(())
    }

    /// Extrusion direction (210/220/230) when it is not the world Z axis
    pub(super) fn write_extrusion(&mut self) -> Result<()> {
        if self.extrusion.direction != Vector3::UNIT_Z {
            self.writer.write_point3d(210, self.extrusion.direction)?;
        }
        Ok(())
    }

    /// Pending extended data in application order
    pub(super) fn write_xdata(&mut self) -> Result<()> {
        self.write_xdata_with(&[])
    }

    /// Pending extended data with `acad` leading the ACAD application;
    /// stored ACAD items carrying one of those codes are replaced
    pub(super) fn write_xdata_with(&mut self, acad: &[XDataItem]) -> Result<()> {
        let xdata = std::mem::take(&mut self.xdata);
        if (xdata.is_empty() && acad.is_empty()) || !self.allows(1001, true) {
            return Ok(());
        }
        if !acad.is_empty() && xdata.get(ACAD_APP).is_none() {
            self.write_xdata_app(ACAD_APP, acad.iter())?;
        }
        for (app, items) in xdata.iter() {
            if app == ACAD_APP {
                let stored = items
                    .iter()
                    .filter(|item| !acad.iter().any(|own| own.code == item.code));
                self.write_xdata_app(app, acad.iter().chain(stored))?;
            } else {
                self.write_xdata_app(app, items.iter())?;
            }
        }
        Ok(())
    }

    fn write_xdata_app<'a>(&mut self, app: &str, items: impl Iterator<Item = &'a XDataItem>) -> Result<()> {
        self.writer.write_string(1001, app)?;
        for item in items {
            match &item.value {
                XDataValue::String(s) => self.writer.write_string(item.code, s)?,
                XDataValue::Real(r) => self.writer.write_real(item.code, *r)?,
                XDataValue::Integer(i) => self.writer.write_int(item.code, *i as i64)?,
            }
        }
        Ok(())
    }

    pub fn comment(&mut self, text: &str) -> Result<()> {
        self.writer.write_comment(text)
    }

    pub fn section_start(&mut self, name: &str) -> Result<()> {
        self.writer.write_record_type("SECTION")?;
        self.writer.write_string(2, name)
    }

    pub fn section_end(&mut self) -> Result<()> {
        self.writer.write_record_type("ENDSEC")
    }

    /// Open a symbol table holding `count` entries
    pub fn table_start(&mut self, name: &str, count: usize, handle: u64) -> Result<()> {
        self.writer.write_record_type("TABLE")?;
        self.writer.write_string(2, name)?;
        self.fixed_handle(Handle::new(handle))?;
        self.subclass("AcDbSymbolTable")?;
        self.writer.write_int(70, count as i64)
    }

    pub fn table_end(&mut self) -> Result<()> {
        self.writer.write_record_type("ENDTAB")
    }

    /// Record type, handle and subclass markers of a table entry
    pub(super) fn table_entry(&mut self, type_name: &str, marker: &str) -> Result<()> {
        self.writer.write_record_type(type_name)?;
        self.handle()?;
        self.subclass("AcDbSymbolTableRecord")?;
        self.subclass(marker)
    }

    /// `BLOCK` record; layout blocks use their fixed handles
    pub fn block_start(&mut self, block: &Block, attributes: &Attributes) -> Result<()> {
        self.writer.write_record_type("BLOCK")?;
        match block.layout_handles() {
            Some((begin, _)) => self.fixed_handle(Handle::new(begin))?,
            None => {
                self.handle()?;
            }
        }
        self.subclass("AcDbEntity")?;
        if block.is_paper_space() {
            self.writer.write_int(67, 1)?;
        }
        self.writer.write_string(8, attributes.layer_name())?;
        self.subclass("AcDbBlockBegin")?;
        self.writer.write_string(2, &block.name)?;
        self.writer.write_int(70, block.flags as i64)?;
        self.writer.write_point3d(10, block.base_point)?;
        self.writer.write_string(3, &block.name)?;
        self.write_xdata()?;
        self.open_block = Some(block.clone());
        Ok(())
    }

    /// `ENDBLK` closing the last block opened
    pub fn block_end(&mut self, attributes: &Attributes) -> Result<()> {
        let block = self.open_block.take();
        self.writer.write_record_type("ENDBLK")?;
        match block.as_ref().and_then(Block::layout_handles) {
            Some((_, end)) => self.fixed_handle(Handle::new(end))?,
            None => {
                self.handle()?;
            }
        }
        self.subclass("AcDbEntity")?;
        if block.as_ref().map_or(false, Block::is_paper_space) {
            self.writer.write_int(67, 1)?;
        }
        self.writer.write_string(8, attributes.layer_name())?;
        self.subclass("AcDbBlockEnd")
    }

    /// `EOF` marker and flush
    pub fn eof(&mut self) -> Result<()> {
        self.writer.write_record_type("EOF")?;
        self.writer.flush()
    }

    /// The HEADER section: banner, `$ACADVER`, `$HANDSEED` (AC1015 on),
    /// then `variables` in order
    pub fn write_header(&mut self, variables: &HeaderVariables) -> Result<()> {
        self.comment(&format!("dxf-codec {}", crate::VERSION))?;
        self.section_start("HEADER")?;
        self.writer.write_string(9, "$ACADVER")?;
        self.writer
            .write_string(1, self.version.version_string().unwrap_or("AC1009"))?;
        if self.version.has_handles() {
            let seed = self.handles.peek().value().max(HANDSEED_FLOOR);
            self.writer.write_string(9, "$HANDSEED")?;
            self.writer.write_handle(5, Handle::new(seed))?;
        }
        for (name, value) in variables {
            if name == "$ACADVER" || name == "$HANDSEED" {
                continue;
            }
            self.writer.write_string(9, name)?;
            match value {
                HeaderValue::String(s) => self.writer.write_string(header_string_code(name), s)?,
                HeaderValue::Int(i) => self.writer.write_int(70, *i)?,
                HeaderValue::Real(r) => self.writer.write_real(40, *r)?,
                HeaderValue::Point(p) => self.writer.write_point3d(10, *p)?,
            }
        }
        self.section_end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dxf::writer::stream_writer::PairBuffer;
    use crate::types::TrueColor;

    fn encoder(version: DxfVersion) -> DxfEncoder<PairBuffer> {
        DxfEncoder::new(PairBuffer::new(), version)
    }

    fn codes(encoder: &DxfEncoder<PairBuffer>) -> Vec<i32> {
        encoder.writer().pairs().iter().map(|p| p.code).collect()
    }

    #[test]
    fn test_handles_are_monotonic() {
        let mut enc = encoder(DxfVersion::AC1015);
        assert_eq!(enc.next_handle(), Handle::new(0x30));
        let first = enc.handle().unwrap();
        let reserved = enc.reserve_handle();
        let second = enc.handle().unwrap();
        assert_eq!(first, Handle::new(0x30));
        assert_eq!(reserved, Handle::new(0x31));
        assert_eq!(second, Handle::new(0x32));
        let written: Vec<_> = enc.writer().pairs().iter().map(|p| p.value.clone()).collect();
        assert_eq!(written, vec!["30", "32"]);
    }

    #[test]
    fn test_stored_handles_stay_unique() {
        let mut enc = encoder(DxfVersion::AC1015);
        assert_eq!(enc.handle().unwrap(), Handle::new(0x30));
        assert_eq!(enc.object_handle("30").unwrap(), Handle::new(0x31));
        assert_eq!(enc.object_handle("2a").unwrap(), Handle::new(0x2a));
        assert_eq!(enc.object_handle("2a").unwrap(), Handle::new(0x32));
        assert_eq!(enc.object_handle("40").unwrap(), Handle::new(0x40));
        assert_eq!(enc.handle().unwrap(), Handle::new(0x41));
        assert_eq!(enc.object_handle("0").unwrap(), Handle::new(0x42));
        let written: Vec<_> = enc.writer().pairs().iter().map(|p| p.value.as_str()).collect();
        assert_eq!(written, vec!["30", "31", "2a", "32", "40", "41", "42"]);
    }

    #[test]
    fn test_stored_handle_at_the_top_of_the_range() {
        let mut enc = encoder(DxfVersion::AC1015);
        let top = enc.object_handle("ffffffffffffffff").unwrap();
        assert_eq!(top, Handle::new(u64::MAX));
        assert_eq!(enc.handle().unwrap(), Handle::new(0x30));
        assert_eq!(enc.object_handle("ffffffffffffffff").unwrap(), Handle::new(0x31));
    }

    #[test]
    fn test_fresh_handles_skip_written_ones() {
        let mut enc = encoder(DxfVersion::AC1015).with_handle_seed(HandleSeed::starting_at(u64::MAX));
        enc.object_handle("30").unwrap();
        assert_eq!(enc.handle().unwrap(), Handle::new(u64::MAX));
        assert_eq!(enc.handle().unwrap(), Handle::new(0x31));
        assert!(enc.is_used(Handle::new(0x30)));
    }

    #[test]
    fn test_legacy_handles_not_written() {
        let mut enc = encoder(DxfVersion::AC1009);
        enc.handle().unwrap();
        assert!(enc.writer().pairs().is_empty());
        assert_eq!(enc.next_handle(), Handle::new(0x31));
        assert_eq!(enc.omitted(5), 1);
    }

    #[test]
    fn test_attribute_order() {
        let mut enc = encoder(DxfVersion::AC1015);
        let attributes = Attributes::on_layer("WALLS")
            .with_color(Color::RED)
            .with_true_color(TrueColor::from_rgb(255, 0, 0))
            .with_line_weight(LineWeight::Value(25))
            .with_line_type("DASHED")
            .in_paper_space(true);
        enc.write_attributes(&attributes).unwrap();
        assert_eq!(codes(&enc), vec![8, 62, 420, 370, 48, 6, 67]);
        assert_eq!(enc.writer().find(6), Some("DASHED"));
    }

    #[test]
    fn test_legacy_attributes() {
        let mut enc = encoder(DxfVersion::AC1009);
        enc.write_attributes(&Attributes::default()).unwrap();
        assert_eq!(codes(&enc), vec![8]);
        assert_eq!(enc.writer().find(8), Some("0"));

        let mut enc = encoder(DxfVersion::AC1009);
        let attributes = Attributes::default()
            .with_line_weight(LineWeight::Value(50))
            .with_line_type("CENTER");
        enc.write_attributes(&attributes).unwrap();
        assert_eq!(codes(&enc), vec![8, 6]);
        assert_eq!(enc.omitted(370), 1);
        assert_eq!(enc.omitted(48), 0);
        assert_eq!(
            enc.notifications()
                .count_of(NotificationType::UnsupportedVersionFeature),
            1
        );
    }

    #[test]
    fn test_table_framing() {
        let mut enc = encoder(DxfVersion::AC1015);
        enc.table_start("LAYER", 3, table_handle("LAYER").unwrap()).unwrap();
        let pairs: Vec<(i32, &str)> = enc
            .writer()
            .pairs()
            .iter()
            .map(|p| (p.code, p.value.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![(0, "TABLE"), (2, "LAYER"), (5, "2"), (100, "AcDbSymbolTable"), (70, "3")]
        );

        let mut enc = encoder(DxfVersion::AC1009);
        enc.table_start("LTYPE", 1, 5).unwrap();
        assert_eq!(codes(&enc), vec![0, 2, 70]);
    }

    #[test]
    fn test_layout_block_handles() {
        let mut enc = encoder(DxfVersion::AC1015);
        let block = Block::new("*Paper_Space", Vector3::ZERO);
        enc.block_start(&block, &Attributes::default()).unwrap();
        enc.block_end(&Attributes::default()).unwrap();
        let handles: Vec<&str> = enc
            .writer()
            .pairs()
            .iter()
            .filter(|p| p.code == 5)
            .map(|p| p.value.as_str())
            .collect();
        assert_eq!(handles, vec!["1c", "1d"]);
        let paper: Vec<_> = enc.writer().pairs().iter().filter(|p| p.code == 67).collect();
        assert_eq!(paper.len(), 2);
        assert_eq!(enc.next_handle(), Handle::new(0x30));
    }

    #[test]
    fn test_header() {
        let mut enc = encoder(DxfVersion::AC1015);
        let mut variables = HeaderVariables::new();
        variables.insert("$ACADVER".into(), HeaderValue::String("AC1009".into()));
        variables.insert("$INSBASE".into(), HeaderValue::Point(Vector3::new(1.0, 2.0, 0.0)));
        variables.insert("$CLAYER".into(), HeaderValue::String("WALLS".into()));
        enc.write_header(&variables).unwrap();
        let buf = enc.writer();
        assert_eq!(buf.pairs()[0].code, 999);
        assert_eq!(buf.find(1), Some("AC1015"));
        assert_eq!(buf.find(5), Some("ffff"));
        assert_eq!(buf.find(8), Some("WALLS"));
        assert_eq!(buf.find(10), Some("1"));
        let names: Vec<_> = buf.pairs().iter().filter(|p| p.code == 9).map(|p| p.value.as_str()).collect();
        assert_eq!(names, vec!["$ACADVER", "$HANDSEED", "$INSBASE", "$CLAYER"]);
    }

    #[test]
    fn test_legacy_header_has_no_handseed() {
        let mut enc = encoder(DxfVersion::AC1009Min);
        enc.write_header(&HeaderVariables::new()).unwrap();
        assert_eq!(enc.writer().find(1), Some("AC1009"));
        assert_eq!(enc.writer().find(5), None);
    }
}
