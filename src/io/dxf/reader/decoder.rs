//! Streaming pair decoder
//!
//! The [`Decoder`] is a left-to-right fold over code/value pairs. Fields of
//! the record in progress are collected until the next `0` (or, inside the
//! HEADER section, `9`) pair closes it; the completed record is then handed
//! to a [`CreationInterface`] together with its sub-records.
//!
//! It can be driven by pulling from a [`PairSource`] with
//! [`Decoder::decode`], or by pushing pairs one at a time with
//! [`Decoder::process_pair`] and closing with [`Decoder::finish`]. Both use
//! the same state machine.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use ahash::AHashSet;
use tracing::{debug, trace, warn};

use super::accumulator::{CountedList, Imbalance, ItemList};
use super::hatch_accumulator::HatchAccumulator;
use super::record_builder::{self as build, RecordValues};
use super::stream_reader::PairSource;
use crate::attributes::{Attributes, Extrusion, BYBLOCK, BYLAYER};
use crate::entities::{ControlPoint, DimensionKind, Vertex};
use crate::error::{DxfError, Result};
use crate::header::HeaderValue;
use crate::io::dxf::creation::CreationInterface;
use crate::io::dxf::group_code::{self, CodeContext, GroupValueType};
use crate::notification::{NotificationCollection, NotificationType};
use crate::objects::DictionaryEntry;
use crate::record::RecordKind;
use crate::tables::TextStyle;
use crate::types::{Color, DxfVersion, Handle, LineWeight, TrueColor, Vector3};
use crate::xdata::{ExtendedData, XDataValue};

/// What to do with a value that does not parse as its code's type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedValuePolicy {
    /// Report it and continue with 0 (or an empty string)
    #[default]
    Substitute,
    /// Stop decoding with [`DxfError::MalformedValue`]
    Abort,
}

/// Decoder options
#[derive(Debug, Clone)]
pub struct DecoderConfiguration {
    /// Turn malformed values and count mismatches into hard errors
    pub strict: bool,
    /// Handling of malformed values outside strict mode
    pub malformed_value: MalformedValuePolicy,
    /// Report unknown group codes as notifications
    pub report_unknown_codes: bool,
    /// Deliver unknown record types through `add_unknown`
    pub preserve_unknown_records: bool,
}

impl Default for DecoderConfiguration {
    fn default() -> Self {
        Self {
            strict: false,
            malformed_value: MalformedValuePolicy::Substitute,
            report_unknown_codes: true,
            preserve_unknown_records: true,
        }
    }
}

impl DecoderConfiguration {
    /// Configuration with strict mode enabled
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

/// Cooperative cancellation flag, checked at every record boundary
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// How a decode ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// `0/EOF` was reached
    Complete,
    /// The stream ended without `0/EOF`
    Truncated,
    /// A cancellation token stopped the decode
    Cancelled,
}

/// Result of a decode session
#[derive(Debug, Clone)]
pub struct DecodeReport {
    pub outcome: DecodeOutcome,
    pub notifications: NotificationCollection,
    /// Revision named by `$ACADVER`, if the stream had one
    pub version: Option<DxfVersion>,
}

impl DecodeReport {
    pub fn is_complete(&self) -> bool {
        self.outcome == DecodeOutcome::Complete
    }
}

/// Sub-record list being filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubRecord {
    Vertex,
    Knot,
    ControlPoint,
    FitPoint,
    LeaderVertex,
    Dash,
    HatchLoop,
    HatchEdge,
    DictionaryEntry,
}

/// Position of the decoder between two pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderState {
    /// Outside any section
    AwaitingSection,
    /// After a record that carries no fields of its own
    AwaitingEntityType,
    /// Reading the header fields of a record
    InEntityHeader(RecordKind),
    /// Reading items of a sub-record list
    InSubRecord(RecordKind, SubRecord),
    /// Reading extended data attached to a record
    AwaitingXData(RecordKind),
    /// Reading an XRecord payload
    AwaitingXRecord,
    /// Reading the value of a header variable
    InVariable,
    /// Skipping an unknown record type
    Skipping,
    /// `0/EOF` seen, or cancelled
    Finished,
}

/// Streaming decoder of one pair stream
pub struct Decoder {
    config: DecoderConfiguration,
    cancellation: Option<CancellationToken>,
    state: DecoderState,
    position: usize,
    version: Option<DxfVersion>,
    outcome: Option<DecodeOutcome>,
    notifications: NotificationCollection,

    kind: Option<RecordKind>,
    unknown_type: Option<String>,
    unknown_pairs: Vec<(i32, String)>,
    variable: Option<String>,
    section: Option<String>,
    sequence_open: bool,

    values: RecordValues,
    attributes: Attributes,
    seen_slots: AHashSet<i32>,
    xdata: ExtendedData,
    xdata_active: bool,
    xrecord_payload: bool,

    vertices: ItemList<Vertex>,
    knots: CountedList<f64>,
    control_points: ItemList<ControlPoint>,
    weights: CountedList<f64>,
    fit_points: ItemList<Vector3>,
    leader_vertices: ItemList<Vector3>,
    dashes: CountedList<f64>,
    hatch: HatchAccumulator,
    dictionary_entries: Vec<DictionaryEntry>,
    entry_name: Option<String>,
    mtext_chunks: String,
}

impl Decoder {
    pub fn new() -> Self {
        Self::with_configuration(DecoderConfiguration::default())
    }

    pub fn with_configuration(config: DecoderConfiguration) -> Self {
        Decoder {
            config,
            cancellation: None,
            state: DecoderState::AwaitingSection,
            position: 0,
            version: None,
            outcome: None,
            notifications: NotificationCollection::new(),
            kind: None,
            unknown_type: None,
            unknown_pairs: Vec::new(),
            variable: None,
            section: None,
            sequence_open: false,
            values: RecordValues::new(),
            attributes: Attributes::default(),
            seen_slots: AHashSet::new(),
            xdata: ExtendedData::new(),
            xdata_active: false,
            xrecord_payload: false,
            vertices: ItemList::new(),
            knots: CountedList::new(),
            control_points: ItemList::new(),
            weights: CountedList::new(),
            fit_points: ItemList::new(),
            leader_vertices: ItemList::new(),
            dashes: CountedList::new(),
            hatch: HatchAccumulator::new(),
            dictionary_entries: Vec::new(),
            entry_name: None,
            mtext_chunks: String::new(),
        }
    }

    /// Stop at the next record boundary once `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn configuration(&self) -> &DecoderConfiguration {
        &self.config
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Revision detected from `$ACADVER`
    pub fn version(&self) -> Option<DxfVersion> {
        self.version
    }

    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    pub fn is_finished(&self) -> bool {
        self.state == DecoderState::Finished
    }

    /// Decode every pair of `source`
    pub fn decode(
        &mut self,
        source: &mut dyn PairSource,
        creation: &mut dyn CreationInterface,
    ) -> Result<DecodeReport> {
        while let Some(pair) = source.read_pair()? {
            self.process_pair(pair.code, &pair.value, creation)?;
            if self.is_finished() {
                break;
            }
        }
        self.finish(creation)
    }

    /// Feed one pair
    pub fn process_pair(
        &mut self,
        code: i32,
        value: &str,
        creation: &mut dyn CreationInterface,
    ) -> Result<()> {
        if self.is_finished() {
            return Ok(());
        }
        self.position += 1;
        creation.process_code_value_pair(code, value);

        match code {
            group_code::ENTITY_TYPE => self.begin_record(value, creation),
            group_code::VARIABLE if self.in_header_section() => self.begin_variable(value, creation),
            group_code::COMMENT => {
                creation.add_comment(value);
                Ok(())
            }
            _ => self.process_field(code, value, creation),
        }
    }

    /// Close the stream: flush what is pending and report the outcome
    pub fn finish(&mut self, creation: &mut dyn CreationInterface) -> Result<DecodeReport> {
        if self.outcome.is_none() {
            self.flush(creation)?;
            self.close_sequence(creation);
            self.reset_record();
            warn!(pairs = self.position, "pair stream ended without EOF marker");
            self.notifications
                .notify(NotificationType::TruncatedStream, "stream ended without 0/EOF");
            self.outcome = Some(DecodeOutcome::Truncated);
            self.state = DecoderState::Finished;
        }
        Ok(DecodeReport {
            outcome: self.outcome.unwrap_or(DecodeOutcome::Truncated),
            notifications: std::mem::take(&mut self.notifications),
            version: self.version,
        })
    }

    fn in_header_section(&self) -> bool {
        match self.kind {
            Some(RecordKind::Section) => self.values.raw(2).map(str::trim) == Some("HEADER"),
            _ => self.section.as_deref() == Some("HEADER"),
        }
    }

    fn begin_record(&mut self, value: &str, creation: &mut dyn CreationInterface) -> Result<()> {
        self.flush(creation)?;

        let type_name = value.trim();
        let kind = group_code::record_kind(type_name);
        if !matches!(kind, Some(RecordKind::Vertex | RecordKind::SeqEnd)) {
            self.close_sequence(creation);
        }
        self.reset_record();

        if self.cancelled() {
            debug!(pairs = self.position, "decode cancelled");
            self.close_sequence(creation);
            self.outcome = Some(DecodeOutcome::Cancelled);
            self.state = DecoderState::Finished;
            return Ok(());
        }

        match kind {
            Some(RecordKind::Eof) => {
                self.outcome = Some(DecodeOutcome::Complete);
                self.state = DecoderState::Finished;
            }
            Some(kind) => {
                self.kind = Some(kind);
                self.state = match kind {
                    RecordKind::EndSection => DecoderState::AwaitingSection,
                    RecordKind::EndTable | RecordKind::EndBlock | RecordKind::SeqEnd => {
                        DecoderState::AwaitingEntityType
                    }
                    _ => DecoderState::InEntityHeader(kind),
                };
            }
            None => {
                debug!(type_name, "skipping unknown record type");
                self.notifications.notify_at(
                    NotificationType::UnknownRecordType,
                    self.position,
                    format!("unknown record type '{}'", type_name),
                );
                self.unknown_type = Some(type_name.to_string());
                self.state = DecoderState::Skipping;
            }
        }
        Ok(())
    }

    fn begin_variable(&mut self, name: &str, creation: &mut dyn CreationInterface) -> Result<()> {
        self.flush(creation)?;
        self.reset_record();
        self.variable = Some(name.trim().to_string());
        self.state = DecoderState::InVariable;
        Ok(())
    }

    fn cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .map_or(false, CancellationToken::is_cancelled)
    }

    fn close_sequence(&mut self, creation: &mut dyn CreationInterface) {
        if self.sequence_open {
            self.sequence_open = false;
            creation.end_entity();
        }
    }

    fn reset_record(&mut self) {
        self.kind = None;
        self.unknown_type = None;
        self.unknown_pairs.clear();
        self.variable = None;
        self.values.clear();
        self.attributes = Attributes::default();
        self.seen_slots.clear();
        self.xdata.clear();
        self.xdata_active = false;
        self.xrecord_payload = false;
        self.vertices.clear();
        self.knots.clear();
        self.control_points.clear();
        self.weights.clear();
        self.fit_points.clear();
        self.leader_vertices.clear();
        self.dashes.clear();
        self.hatch.clear();
        self.dictionary_entries.clear();
        self.entry_name = None;
        self.mtext_chunks.clear();
    }

    fn process_field(&mut self, code: i32, value: &str, creation: &mut dyn CreationInterface) -> Result<()> {
        if self.state == DecoderState::Skipping {
            if is_attribute_code(code) {
                self.update_attributes(code, value);
            }
            if self.config.preserve_unknown_records {
                self.unknown_pairs.push((code, value.to_string()));
            }
            return Ok(());
        }

        let context = if self.xrecord_payload {
            CodeContext::XRecord
        } else if self.xdata_active {
            CodeContext::ExtendedData
        } else {
            CodeContext::Entity
        };
        let value_type = group_code::classify(code, context);
        if value_type == GroupValueType::Unknown {
            trace!(code, value, "unknown group code");
            if self.config.report_unknown_codes {
                self.notifications.notify_at(
                    NotificationType::UnknownGroupCode,
                    self.position,
                    format!("unknown group code {}", code),
                );
            }
            return Ok(());
        }

        let substitute;
        let value = if value_type.accepts(value) {
            value
        } else {
            substitute = self.malformed(code, value)?;
            substitute.as_str()
        };

        if self.variable.is_some() {
            self.values.insert(code, value);
            return Ok(());
        }
        if self.kind.is_none() {
            return Ok(());
        }

        if self.xrecord_payload {
            self.xrecord_value(code, value, value_type, creation);
            return Ok(());
        }

        self.track_slot(code);

        if code == group_code::XDATA_APP {
            creation.add_xdata_app(value);
            self.xdata.begin_app(value);
            self.xdata_active = true;
            if let Some(kind) = self.kind {
                self.state = DecoderState::AwaitingXData(kind);
            }
            return Ok(());
        }
        if (1000..=1071).contains(&code) {
            self.xdata_value(code, value, creation);
            return Ok(());
        }

        if is_attribute_code(code) {
            self.update_attributes(code, value);
        }

        if let Some(kind) = self.kind {
            if kind == RecordKind::XRecord {
                match code {
                    group_code::HANDLE => creation.add_xrecord(value.trim()),
                    280 => {
                        if !self.values.contains(group_code::HANDLE) {
                            creation.add_xrecord("");
                        }
                        self.xrecord_payload = true;
                        self.state = DecoderState::AwaitingXRecord;
                        return Ok(());
                    }
                    _ => {}
                }
            } else if self.accumulate(kind, code, value) {
                if let Some(sub) = self.sub_record_for(kind, code) {
                    self.state = DecoderState::InSubRecord(kind, sub);
                }
                return Ok(());
            }
        }

        self.values.insert(code, value);
        Ok(())
    }

    fn malformed(&mut self, code: i32, value: &str) -> Result<String> {
        self.notifications.notify_at(
            NotificationType::MalformedValue,
            self.position,
            format!("group code {} cannot hold '{}'", code, value),
        );
        if self.config.strict || self.config.malformed_value == MalformedValuePolicy::Abort {
            return Err(DxfError::MalformedValue {
                code,
                value: value.to_string(),
                position: self.position,
            });
        }
        Ok("0".to_string())
    }

    fn track_slot(&mut self, code: i32) {
        let Some(slot) = group_code::point_slot(code) else {
            return;
        };
        if slot == code {
            self.seen_slots.insert(slot);
        } else if !self.seen_slots.contains(&slot) {
            self.notifications.notify_at(
                NotificationType::OrphanCoordinate,
                self.position,
                format!("code {} without its x code {}", code, slot),
            );
        }
    }

    fn update_attributes(&mut self, code: i32, value: &str) {
        let int = || group_code::parse_int(value).unwrap_or(0);
        match code {
            group_code::LAYER => self.attributes.layer = Some(value.to_string()),
            group_code::COLOR => self.attributes.color = Color::from_index(to_i16(int())),
            group_code::TRUE_COLOR => {
                self.attributes.true_color = Some(TrueColor::new((int() & 0xff_ffff) as u32))
            }
            group_code::LINE_WEIGHT => self.attributes.line_weight = LineWeight::from_value(to_i16(int())),
            group_code::LINE_TYPE => self.attributes.line_type_name = value.to_string(),
            group_code::LINE_TYPE_SCALE => {
                self.attributes.line_type_scale = group_code::parse_real(value).unwrap_or(1.0)
            }
            group_code::HANDLE => {
                self.attributes.handle = Handle::parse_hex(value).filter(|h| !h.is_null())
            }
            group_code::PAPER_SPACE => self.attributes.paper_space = int() != 0,
            _ => {}
        }
    }

    fn xdata_value(&mut self, code: i32, value: &str, creation: &mut dyn CreationInterface) {
        if !self.xdata_active {
            self.notifications.notify_at(
                NotificationType::Warning,
                self.position,
                format!("extended data code {} before any 1001 application name", code),
            );
            return;
        }
        let item = match code {
            1000..=1009 => {
                creation.add_xdata_string(code, value);
                XDataValue::String(value.to_string())
            }
            1010..=1059 => {
                let real = group_code::parse_real(value).unwrap_or(0.0);
                creation.add_xdata_real(code, real);
                XDataValue::Real(real)
            }
            _ => {
                let int = group_code::parse_int(value)
                    .unwrap_or(0)
                    .clamp(i32::MIN as i64, i32::MAX as i64) as i32;
                creation.add_xdata_int(code, int);
                XDataValue::Integer(int)
            }
        };
        self.xdata.push(code, item);
    }

    fn xrecord_value(
        &mut self,
        code: i32,
        value: &str,
        value_type: GroupValueType,
        creation: &mut dyn CreationInterface,
    ) {
        match value_type {
            GroupValueType::Real
            | GroupValueType::CoordinateX
            | GroupValueType::CoordinateY
            | GroupValueType::CoordinateZ => {
                creation.add_xrecord_real(code, group_code::parse_real(value).unwrap_or(0.0))
            }
            GroupValueType::Boolean => {
                creation.add_xrecord_bool(code, group_code::parse_int(value).unwrap_or(0) != 0)
            }
            GroupValueType::ShortInt | GroupValueType::Int32 | GroupValueType::Int64 => {
                creation.add_xrecord_int(code, group_code::parse_int(value).unwrap_or(0))
            }
            _ => creation.add_xrecord_string(code, value),
        }
    }

    /// Route sub-record items; `true` when the pair was consumed
    fn accumulate(&mut self, kind: RecordKind, code: i32, value: &str) -> bool {
        let real = group_code::parse_real(value).unwrap_or(0.0);
        let count = || group_code::parse_int(value).unwrap_or(0).max(0) as usize;
        match kind {
            RecordKind::LwPolyline => match code {
                90 => self.vertices.declare(count()),
                10 => self.vertices.start(Vertex::new(real, 0.0, 0.0, 0.0)),
                20 | 30 | 42 => {
                    if let Some(v) = self.vertices.current() {
                        match code {
                            20 => v.location.y = real,
                            30 => v.location.z = real,
                            _ => v.bulge = real,
                        }
                    }
                }
                _ => return false,
            },
            RecordKind::Spline => match code {
                72 => self.knots.declare(count()),
                73 => {
                    self.control_points.declare(count());
                    self.weights.declare(count());
                }
                74 => self.fit_points.declare(count()),
                40 => {
                    self.knots.push(real);
                }
                41 => {
                    self.weights.push(real);
                }
                10 => self.control_points.start(ControlPoint::new(real, 0.0, 0.0, 1.0)),
                20 | 30 => {
                    if let Some(cp) = self.control_points.current() {
                        if code == 20 {
                            cp.location.y = real;
                        } else {
                            cp.location.z = real;
                        }
                    }
                }
                11 => self.fit_points.start(Vector3::new(real, 0.0, 0.0)),
                21 | 31 => {
                    if let Some(fp) = self.fit_points.current() {
                        if code == 21 {
                            fp.y = real;
                        } else {
                            fp.z = real;
                        }
                    }
                }
                _ => return false,
            },
            RecordKind::Leader => match code {
                76 => self.leader_vertices.declare(count()),
                10 => self.leader_vertices.start(Vector3::new(real, 0.0, 0.0)),
                20 | 30 => {
                    if let Some(v) = self.leader_vertices.current() {
                        if code == 20 {
                            v.y = real;
                        } else {
                            v.z = real;
                        }
                    }
                }
                _ => return false,
            },
            RecordKind::LineType => match code {
                73 => self.dashes.declare(count()),
                49 => {
                    self.dashes.push(real);
                }
                _ => return false,
            },
            RecordKind::Hatch => {
                let int = group_code::parse_int(value).unwrap_or(0);
                return self.hatch.accept(code, real, int);
            }
            RecordKind::Dictionary => match code {
                3 => self.entry_name = Some(value.to_string()),
                350 | 360 => {
                    let name = self.entry_name.take().unwrap_or_default();
                    self.dictionary_entries
                        .push(DictionaryEntry::new(name, value.trim()));
                }
                _ => return false,
            },
            RecordKind::MText => match code {
                3 => self.mtext_chunks.push_str(value),
                _ => return false,
            },
            _ => return false,
        }
        true
    }

    fn sub_record_for(&self, kind: RecordKind, code: i32) -> Option<SubRecord> {
        match (kind, code) {
            (RecordKind::LwPolyline, 10 | 20 | 30 | 42) => Some(SubRecord::Vertex),
            (RecordKind::Spline, 40) => Some(SubRecord::Knot),
            (RecordKind::Spline, 10 | 20 | 30 | 41) => Some(SubRecord::ControlPoint),
            (RecordKind::Spline, 11 | 21 | 31) => Some(SubRecord::FitPoint),
            (RecordKind::Leader, 10 | 20 | 30) => Some(SubRecord::LeaderVertex),
            (RecordKind::LineType, 49) => Some(SubRecord::Dash),
            (RecordKind::Hatch, 92) => Some(SubRecord::HatchLoop),
            (RecordKind::Hatch, _) if self.hatch.in_loops() => Some(SubRecord::HatchEdge),
            (RecordKind::Dictionary, 3 | 350 | 360) => Some(SubRecord::DictionaryEntry),
            _ => None,
        }
    }

    fn report(&mut self, imbalance: Imbalance) -> Result<()> {
        self.notifications.notify_at(
            NotificationType::UnbalancedAccumulator,
            self.position,
            imbalance.describe(),
        );
        if self.config.strict {
            return Err(DxfError::UnbalancedAccumulator {
                record: imbalance.list,
                declared: imbalance.declared,
                received: imbalance.received,
            });
        }
        Ok(())
    }

    fn incomplete(&mut self, kind: RecordKind) {
        self.notifications.notify_at(
            NotificationType::IncompleteRecord,
            self.position,
            format!("{} without a name discarded", kind.type_name()),
        );
    }

    /// Deliver the record in progress
    fn flush(&mut self, creation: &mut dyn CreationInterface) -> Result<()> {
        if let Some(name) = self.variable.take() {
            self.flush_variable(&name, creation);
            return Ok(());
        }
        if let Some(type_name) = self.unknown_type.take() {
            if self.config.preserve_unknown_records {
                creation.set_attributes(&self.attributes);
                let pairs = std::mem::take(&mut self.unknown_pairs);
                creation.add_unknown(&type_name, &pairs);
            }
            return Ok(());
        }
        let Some(kind) = self.kind.take() else {
            return Ok(());
        };

        let attributes = if kind == RecordKind::Layer {
            self.layer_attributes()
        } else {
            self.attributes.clone()
        };
        let extrusion = Extrusion {
            direction: self.values.point_or(210, Vector3::UNIT_Z),
            elevation: if self.values.contains(38) {
                self.values.real(38, 0.0)
            } else {
                self.values.real(30, 0.0)
            },
        };
        creation.set_attributes(&attributes);
        creation.set_extrusion(&extrusion);

        let issues = self.emit(kind, creation);
        for imbalance in issues {
            self.report(imbalance)?;
        }
        Ok(())
    }

    fn flush_variable(&mut self, name: &str, creation: &mut dyn CreationInterface) {
        let Some(code) = self.values.first_code() else {
            return;
        };
        let value = match group_code::classify(code, CodeContext::Entity) {
            GroupValueType::CoordinateX => HeaderValue::Point(self.values.point(code)),
            GroupValueType::Real | GroupValueType::CoordinateY | GroupValueType::CoordinateZ => {
                HeaderValue::Real(self.values.real(code, 0.0))
            }
            GroupValueType::ShortInt
            | GroupValueType::Int32
            | GroupValueType::Int64
            | GroupValueType::Boolean => HeaderValue::Int(self.values.int(code, 0)),
            _ => HeaderValue::String(self.values.string(code, "")),
        };
        if name == "$ACADVER" {
            if let HeaderValue::String(text) = &value {
                self.version = DxfVersion::from_version_string(text);
                debug!(version = %text, detected = ?self.version, "format revision");
            }
        }
        creation.set_variable(name, &value);
    }

    fn layer_attributes(&self) -> Attributes {
        let mut attributes = self.attributes.clone();
        attributes.color = match self.values.int(62, 7).abs() {
            0 | 256 => Color::WHITE,
            index => Color::from_index(to_i16(index)),
        };
        if attributes.line_weight.value() < 0 {
            attributes.line_weight = LineWeight::Default;
        }
        let line_type = attributes.line_type();
        if line_type.eq_ignore_ascii_case(BYLAYER) || line_type.eq_ignore_ascii_case(BYBLOCK) {
            attributes.line_type_name = "CONTINUOUS".to_string();
        }
        attributes
    }

    fn emit(&mut self, kind: RecordKind, creation: &mut dyn CreationInterface) -> Vec<Imbalance> {
        let mut issues = Vec::new();
        let values = &self.values;
        match kind {
            RecordKind::Section => {
                let name = values.string(2, "").trim().to_string();
                creation.begin_section(&name);
                self.section = Some(name);
            }
            RecordKind::EndSection => {
                self.section = None;
                creation.end_section();
            }
            RecordKind::Table => creation.begin_table(values.string(2, "").trim()),
            RecordKind::EndTable => creation.end_table(),
            RecordKind::Layer => match values.name() {
                Some(name) => creation.add_layer(&build::layer(values, name)),
                None => self.incomplete(kind),
            },
            RecordKind::LineType => match values.name() {
                Some(name) => {
                    let mut line_type = build::line_type(values, name);
                    if !line_type.is_inheritance_sentinel() {
                        issues.extend(self.dashes.imbalance("LTYPE dashes"));
                        let dashes = self.dashes.take();
                        line_type.dash_count = dashes.len();
                        creation.add_linetype(&line_type);
                        for dash in dashes {
                            creation.add_linetype_dash(dash);
                        }
                    }
                }
                None => self.incomplete(kind),
            },
            RecordKind::TextStyle => match values.name() {
                Some(name) => {
                    let mut style = build::text_style(values, name);
                    if let Some(flags) = self.xdata.find("ACAD", 1071).and_then(|v| v.as_integer()) {
                        style.bold = flags & TextStyle::BOLD_FLAG != 0;
                        style.italic = flags & TextStyle::ITALIC_FLAG != 0;
                    }
                    creation.add_text_style(&style);
                }
                None => self.incomplete(kind),
            },
            RecordKind::Block => match values.name() {
                Some(name) => creation.add_block(&build::block(values, name)),
                None => self.incomplete(kind),
            },
            RecordKind::EndBlock => creation.end_block(),
            RecordKind::Point => {
                creation.add_point(&build::point(values));
                creation.end_entity();
            }
            RecordKind::Line => {
                creation.add_line(&build::line(values));
                creation.end_entity();
            }
            RecordKind::XLine => {
                creation.add_xline(&build::xline(values));
                creation.end_entity();
            }
            RecordKind::Ray => {
                creation.add_ray(&build::ray(values));
                creation.end_entity();
            }
            RecordKind::LwPolyline => {
                issues.extend(self.vertices.imbalance("LWPOLYLINE vertices"));
                let vertices = self.vertices.take();
                creation.add_polyline(&build::lwpolyline(values, vertices.len()));
                for vertex in &vertices {
                    creation.add_vertex(vertex);
                }
                creation.end_entity();
            }
            RecordKind::Polyline => {
                creation.add_polyline(&build::polyline(values));
                self.sequence_open = true;
            }
            RecordKind::Vertex => {
                let flags = values.int(70, 0);
                if !(flags & 128 != 0 && flags & 64 == 0) {
                    creation.add_vertex(&build::vertex(values));
                }
            }
            RecordKind::SeqEnd => {
                creation.end_sequence();
                self.close_sequence(creation);
            }
            RecordKind::Arc => {
                creation.add_arc(&build::arc(values));
                creation.end_entity();
            }
            RecordKind::Circle => {
                creation.add_circle(&build::circle(values));
                creation.end_entity();
            }
            RecordKind::Ellipse => {
                creation.add_ellipse(&build::ellipse(values));
                creation.end_entity();
            }
            RecordKind::Spline => {
                issues.extend(self.knots.imbalance("SPLINE knots"));
                issues.extend(self.control_points.imbalance("SPLINE control points"));
                issues.extend(self.fit_points.imbalance("SPLINE fit points"));
                let knots = self.knots.take();
                let weights = self.weights.take();
                let mut control_points = self.control_points.take();
                for (point, weight) in control_points.iter_mut().zip(weights) {
                    point.weight = weight;
                }
                let fit_points = self.fit_points.take();

                let mut spline = build::spline(values);
                spline.knot_count = knots.len();
                spline.control_point_count = control_points.len();
                spline.fit_point_count = fit_points.len();
                creation.add_spline(&spline);
                for knot in knots {
                    creation.add_knot(knot);
                }
                for point in &control_points {
                    creation.add_control_point(point);
                }
                for point in &fit_points {
                    creation.add_fit_point(point);
                }
                creation.end_entity();
            }
            RecordKind::Insert => match values.name() {
                Some(name) => {
                    creation.add_insert(&build::insert(values, name));
                    creation.end_entity();
                }
                None => self.incomplete(kind),
            },
            RecordKind::Text => {
                creation.add_text(&build::text(values));
                creation.end_entity();
            }
            RecordKind::ArcAlignedText => {
                creation.add_arc_aligned_text(&build::arc_aligned_text(values));
                creation.end_entity();
            }
            RecordKind::MText => {
                creation.add_mtext(&build::mtext(values, &self.mtext_chunks));
                creation.end_entity();
            }
            RecordKind::Attribute => {
                creation.add_attribute(&build::attribute(values));
                creation.end_entity();
            }
            RecordKind::Dimension => {
                let Some(dimension) = build::dimension(values) else {
                    let type_flags = values.int32(70, 0);
                    warn!(type_flags, "dimension type names no known kind");
                    self.notifications.notify_at(
                        NotificationType::MalformedValue,
                        self.position,
                        format!("DIMENSION type {} names no dimension kind, record discarded", type_flags),
                    );
                    return issues;
                };
                let common = &dimension.common;
                match &dimension.kind {
                    DimensionKind::Linear(d) => creation.add_dim_linear(common, d),
                    DimensionKind::Aligned(d) => creation.add_dim_aligned(common, d),
                    DimensionKind::Angular(d) => creation.add_dim_angular(common, d),
                    DimensionKind::Diametric(d) => creation.add_dim_diametric(common, d),
                    DimensionKind::Radial(d) => creation.add_dim_radial(common, d),
                    DimensionKind::Angular3Point(d) => creation.add_dim_angular_3p(common, d),
                    DimensionKind::Ordinate(d) => creation.add_dim_ordinate(common, d),
                }
                creation.end_entity();
            }
            RecordKind::Leader => {
                issues.extend(self.leader_vertices.imbalance("LEADER vertices"));
                let vertices = self.leader_vertices.take();
                creation.add_leader(&build::leader(values, vertices.len()));
                for vertex in &vertices {
                    creation.add_leader_vertex(vertex);
                }
                creation.end_entity();
            }
            RecordKind::Hatch => {
                let (loops, hatch_issues) = self.hatch.finish();
                issues.extend(hatch_issues);
                let origin = Vector3::new(
                    self.xdata.find("ACAD", 1010).and_then(|v| v.as_real()).unwrap_or(0.0),
                    self.xdata.find("ACAD", 1020).and_then(|v| v.as_real()).unwrap_or(0.0),
                    0.0,
                );
                creation.add_hatch(&build::hatch(values, loops.len(), origin));
                for boundary in &loops {
                    creation.add_hatch_loop(&boundary.header());
                    for edge in &boundary.edges {
                        creation.add_hatch_edge(edge);
                    }
                }
                creation.end_entity();
            }
            RecordKind::Image => {
                creation.add_image(&build::image(values));
                creation.end_entity();
            }
            RecordKind::ImageDefinition => creation.link_image(&build::image_definition(values)),
            RecordKind::XRecord => {}
            RecordKind::Dictionary => {
                creation.add_dictionary(&build::dictionary(values));
                for entry in &self.dictionary_entries {
                    creation.add_dictionary_entry(entry);
                }
            }
            RecordKind::Trace => {
                creation.add_trace(&build::solid(values));
                creation.end_entity();
            }
            RecordKind::Solid => {
                creation.add_solid(&build::solid(values));
                creation.end_entity();
            }
            RecordKind::Face3D => {
                creation.add_3d_face(&build::solid(values));
                creation.end_entity();
            }
            RecordKind::Eof => {}
        }
        issues
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

fn is_attribute_code(code: i32) -> bool {
    matches!(
        code,
        group_code::LAYER
            | group_code::COLOR
            | group_code::TRUE_COLOR
            | group_code::LINE_WEIGHT
            | group_code::LINE_TYPE
            | group_code::LINE_TYPE_SCALE
            | group_code::HANDLE
            | group_code::PAPER_SPACE
    )
}

fn to_i16(value: i64) -> i16 {
    value.clamp(i16::MIN as i64, i16::MAX as i64) as i16
}
