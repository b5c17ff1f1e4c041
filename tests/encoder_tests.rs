//! Integration tests for encoding records and files

mod common;

use common::{codes, record_pairs, value_of};
use dxf_codec::entities::{Arc, Circle, Ellipse, Line, Point, RasterImage};
use dxf_codec::objects::{Dictionary, ImageDefinition, XRecordValue};
use dxf_codec::io::dxf::PairBuffer;
use dxf_codec::{
    Attributes, Color, DxfEncoder, DxfVersion, DxfWriter, Handle, HandleSeed, NotificationType, Record, Vector3,
};

fn arc() -> Record {
    Record::Arc(Arc::new(Vector3::new(0.0, 0.0, 0.0), 10.0, 0.0, 90.0))
}

#[test]
fn test_arc_gated_for_r12() {
    let pairs = record_pairs(DxfVersion::AC1009, &arc());
    let written = codes(&pairs);
    assert_eq!(written, vec![0, 8, 10, 20, 30, 40, 50, 51]);
}

#[test]
fn test_arc_carries_handle_and_subclasses_for_r2000() {
    let pairs = record_pairs(DxfVersion::AC1015, &arc());
    let written = codes(&pairs);
    assert_eq!(written[..3], [0, 5, 100]);
    let markers: Vec<&str> = pairs
        .iter()
        .filter(|(code, _)| *code == 100)
        .map(|(_, value)| value.as_str())
        .collect();
    assert_eq!(markers, vec!["AcDbEntity", "AcDbCircle", "AcDbArc"]);
}

#[test]
fn test_integral_real_has_no_fraction() {
    let pairs = record_pairs(DxfVersion::AC1015, &arc());
    assert_eq!(value_of(&pairs, 40), Some("10"));
    assert_eq!(value_of(&pairs, 51), Some("90"));
}

#[test]
fn test_fractional_reals_are_trimmed() {
    let record = Record::Circle(Circle::new(Vector3::new(0.25, -1.5, 0.0), 2.125));
    let pairs = record_pairs(DxfVersion::AC1015, &record);
    assert_eq!(value_of(&pairs, 10), Some("0.25"));
    assert_eq!(value_of(&pairs, 20), Some("-1.5"));
    assert_eq!(value_of(&pairs, 40), Some("2.125"));
}

#[test]
fn test_handles_are_strictly_increasing() {
    let mut encoder = DxfEncoder::new(PairBuffer::new(), DxfVersion::AC1015);
    let attrs = Attributes::default();
    for i in 0..20 {
        let line = Line::new(Vector3::ZERO, Vector3::new(i as f64, 1.0, 0.0));
        encoder.write_record(&Record::Line(line), &attrs).unwrap();
    }
    let handles: Vec<u64> = encoder
        .writer()
        .pairs()
        .iter()
        .filter(|p| p.code == 5)
        .map(|p| u64::from_str_radix(&p.value, 16).unwrap())
        .collect();
    assert_eq!(handles.len(), 20);
    assert!(handles.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(handles[0], 0x30);
}

#[test]
fn test_handle_seed_is_respected() {
    let mut encoder =
        DxfEncoder::new(PairBuffer::new(), DxfVersion::AC1015).with_handle_seed(HandleSeed::starting_at(0x200));
    encoder.write_record(&arc(), &Attributes::default()).unwrap();
    assert_eq!(encoder.writer().find(5), Some("200"));
    assert_eq!(encoder.next_handle(), Handle::new(0x201));
}

#[test]
fn test_true_color_dropped_for_r12_is_reported() {
    let attrs = Attributes::default().with_true_color(dxf_codec::TrueColor::from_rgb(10, 20, 30));
    let mut encoder = DxfEncoder::new(PairBuffer::new(), DxfVersion::AC1009);
    encoder.write_record(&arc(), &attrs).unwrap();
    assert!(encoder.writer().find(420).is_none());
    assert_eq!(encoder.omitted(420), 1);
    let notes = encoder.notifications();
    assert!(notes.has_type(NotificationType::UnsupportedVersionFeature));
}

#[test]
fn test_r13_record_for_r12_is_reported() {
    let mut writer = DxfWriter::new(DxfVersion::AC1009);
    writer.push(Record::Ellipse(Ellipse::new(Vector3::ZERO, Vector3::UNIT_X, 0.5)));
    let (_, notes) = writer.encode(PairBuffer::new()).unwrap();
    assert!(notes.has_type(NotificationType::UnsupportedVersionFeature));
}

#[test]
fn test_file_text_layout() {
    let mut writer = DxfWriter::new(DxfVersion::AC1015);
    writer.push(dxf_codec::RecordEntry::with_attributes(
        Record::Line(Line::new(Vector3::ZERO, Vector3::new(10.0, 0.0, 0.0))),
        Attributes::on_layer("A").with_color(Color::RED),
    ));
    let text = String::from_utf8(writer.write_to_vec().unwrap()).unwrap();
    assert!(text.contains("  9\n$ACADVER\n  1\nAC1015\n"));
    assert!(text.contains("  9\n$HANDSEED\n  5\nffff\n"));
    assert!(text.contains("  0\nLINE\n"));
    assert!(text.contains("  8\nA\n 62\n1\n"));
    assert!(text.ends_with("  0\nEOF\n"));
}

#[test]
fn test_written_file_decodes_cleanly() {
    let mut writer = DxfWriter::new(DxfVersion::AC1015);
    writer.push(arc());
    writer.push(Record::Line(Line::new(Vector3::ZERO, Vector3::UNIT_Y)));
    let bytes = writer.write_to_vec().unwrap();
    let (_, report) = dxf_codec::DxfReader::from_bytes(bytes)
        .unwrap()
        .read_records()
        .unwrap();
    assert!(report.is_complete());
    assert!(
        report.notifications.is_empty(),
        "unexpected notifications: {:?}",
        report.notifications
    );
}

#[test]
fn test_stored_object_handles_never_repeat() {
    let mut writer = DxfWriter::new(DxfVersion::AC1015);
    writer.push(Record::Point(Point::new(0.0, 0.0, 0.0)));
    writer.push(Record::Point(Point::new(1.0, 0.0, 0.0)));
    writer.push(Record::Image(RasterImage::new("30", Vector3::ZERO, 10.0, 10.0)));
    writer.push(Record::ImageDefinition(ImageDefinition::new("30", "a.png")));
    writer.push(Record::Dictionary {
        dictionary: Dictionary::new(""),
        entries: Vec::new(),
    });
    writer.push(Record::XRecord {
        handle: "31".to_string(),
        values: vec![XRecordValue::int(90, 1)],
    });
    writer.push(Record::XRecord {
        handle: "ffffffffffffffff".to_string(),
        values: Vec::new(),
    });
    writer.push(Record::Point(Point::new(2.0, 0.0, 0.0)));
    let (buf, _) = writer.encode(PairBuffer::new()).unwrap();

    let handles: Vec<&str> = buf
        .pairs()
        .iter()
        .filter(|p| p.code == 5)
        .map(|p| p.value.as_str())
        .collect();
    let unique: std::collections::HashSet<&str> = handles.iter().copied().collect();
    assert_eq!(unique.len(), handles.len(), "repeated handle in {:?}", handles);
    assert!(handles.contains(&"ffffffffffffffff"));
}

#[test]
fn test_unused_stored_handle_is_kept() {
    let mut writer = DxfWriter::new(DxfVersion::AC1015);
    writer.push(Record::ImageDefinition(ImageDefinition::new("7f0", "a.png")));
    let (buf, _) = writer.encode(PairBuffer::new()).unwrap();
    let imagedef: Vec<&str> = buf
        .pairs()
        .iter()
        .skip_while(|p| !(p.code == 0 && p.value == "IMAGEDEF"))
        .filter(|p| p.code == 5)
        .map(|p| p.value.as_str())
        .collect();
    assert_eq!(imagedef, vec!["7f0"]);
}
