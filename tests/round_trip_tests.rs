//! Integration tests: records written by `DxfWriter` read back unchanged

mod common;

use common::{content, round_trip};
use dxf_codec::entities::*;
use dxf_codec::objects::{Dictionary, DictionaryEntry, ImageDefinition, XRecordValue};
use dxf_codec::tables::{Layer, LayerFlags, LineType, TextStyle};
use dxf_codec::{DecodeOutcome, DxfVersion, Record, Vector3};

/// Targets every record kind below is written for; AC1009Min also checks
/// the six-digit real precision
const VERSIONS: [DxfVersion; 3] = [DxfVersion::AC1009, DxfVersion::AC1009Min, DxfVersion::AC1015];

fn assert_round_trip(version: DxfVersion, record: Record) {
    assert_round_trip_all(version, vec![record]);
}

fn assert_round_trip_all(version: DxfVersion, records: Vec<Record>) {
    let (decoded, report) = round_trip(version, records.clone());
    assert_eq!(report.outcome, DecodeOutcome::Complete, "{:?}", report.notifications);
    let got: Vec<&Record> = content(&decoded).into_iter().map(|e| &e.record).collect();
    let expected: Vec<&Record> = records.iter().collect();
    assert_eq!(got, expected, "round trip through {}", version);
}

fn dimension(dimension_type: i32, kind: DimensionKind) -> Record {
    let common = DimensionCommon {
        definition_point: Vector3::new(10.0, 5.0, 0.0),
        text_middle_point: Vector3::new(5.0, 6.5, 0.0),
        dimension_type,
        text: "<>".to_string(),
        ..Default::default()
    };
    Record::Dimension(Dimension::new(common, kind))
}

#[test]
fn test_layer_round_trip() {
    let mut layer = Layer::new("WALLS");
    layer.flags = LayerFlags::LOCKED;
    assert_round_trip(DxfVersion::AC1015, Record::Layer(layer));
}

#[test]
fn test_off_layer_round_trip() {
    let mut layer = Layer::new("HIDDEN");
    layer.off = true;
    assert_round_trip(DxfVersion::AC1009, Record::Layer(layer));
}

#[test]
fn test_line_type_round_trip() {
    let dashes = vec![0.5, -0.25, 0.0, -0.25];
    let line_type = LineType::with_pattern("DASHDOT", "__ . __ .", &dashes);
    assert_round_trip(DxfVersion::AC1015, Record::LineType { line_type, dashes });
}

#[test]
fn test_arc_round_trip_all_versions() {
    let arc = Arc::new(Vector3::new(1.0, 2.0, 0.0), 5.0, 30.0, 120.0);
    for version in [DxfVersion::AC1009, DxfVersion::AC1012, DxfVersion::AC1015] {
        assert_round_trip(version, Record::Arc(arc));
    }
}

#[test]
fn test_lwpolyline_round_trip() {
    let vertices = vec![
        Vertex::new(0.0, 0.0, 0.0, 0.0),
        Vertex::new(10.0, 0.0, 0.0, 0.5),
        Vertex::new(10.0, 5.0, 0.0, 0.0),
    ];
    let polyline = Polyline {
        vertex_count: vertices.len(),
        ..Polyline::new(PolylineFlags::CLOSED)
    };
    assert_round_trip(DxfVersion::AC1015, Record::Polyline { polyline, vertices });
}

#[test]
fn test_classic_polyline_round_trip() {
    let vertices = vec![Vertex::new(0.0, 0.0, 1.0, 0.0), Vertex::new(3.0, 4.0, 2.0, 0.0)];
    let polyline = Polyline {
        vertex_count: vertices.len(),
        ..Polyline::new(PolylineFlags::POLYLINE_3D)
    };
    assert_round_trip(DxfVersion::AC1015, Record::Polyline { polyline, vertices });
}

#[test]
fn test_legacy_polyline_keeps_vertices() {
    let vertices = vec![Vertex::new(0.0, 0.0, 0.0, 0.0), Vertex::new(3.0, 4.0, 0.0, 1.0)];
    let polyline = Polyline {
        vertex_count: vertices.len(),
        ..Polyline::new(PolylineFlags::empty())
    };
    assert_round_trip(DxfVersion::AC1009, Record::Polyline { polyline, vertices });
}

#[test]
fn test_spline_round_trip() {
    let knots = vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0];
    let control_points = vec![
        ControlPoint::new(0.0, 0.0, 0.0, 1.0),
        ControlPoint::new(1.0, 2.0, 0.0, 1.0),
        ControlPoint::new(3.0, 2.0, 0.0, 1.0),
        ControlPoint::new(4.0, 0.0, 0.0, 1.0),
    ];
    let spline = Spline {
        knot_count: knots.len(),
        control_point_count: control_points.len(),
        ..Spline::new(3, SplineFlags::PLANAR)
    };
    assert_round_trip(
        DxfVersion::AC1015,
        Record::Spline {
            spline,
            knots,
            control_points,
            fit_points: Vec::new(),
        },
    );
}

#[test]
fn test_text_round_trip() {
    let text = Text::new("Hello", Vector3::new(1.0, 2.0, 0.0), 2.5);
    assert_round_trip(DxfVersion::AC1015, Record::Text(text));
}

#[test]
fn test_text_rotation_survives_degrees() {
    let mut text = Text::new("Up", Vector3::ZERO, 1.0);
    text.rotation = std::f64::consts::FRAC_PI_2;
    let (records, _) = round_trip(DxfVersion::AC1015, vec![Record::Text(text)]);
    match &content(&records)[0].record {
        Record::Text(t) => assert!((t.rotation - std::f64::consts::FRAC_PI_2).abs() < 1e-9),
        other => panic!("unexpected record {:?}", other),
    }
}

#[test]
fn test_solid_hatch_round_trip() {
    let loops = vec![HatchBoundary::polyline(
        true,
        vec![
            BoundaryVertex::new(0.0, 0.0, 0.0),
            BoundaryVertex::new(4.0, 0.0, 0.0),
            BoundaryVertex::new(4.0, 3.0, 0.0),
        ],
    )];
    let hatch = Hatch {
        loop_count: loops.len(),
        ..Hatch::solid()
    };
    assert_round_trip(DxfVersion::AC1015, Record::Hatch { hatch, loops });
}

#[test]
fn test_pattern_hatch_with_edges_round_trip() {
    let loops = vec![HatchBoundary::edges(vec![
        HatchEdge::Line {
            start: Vector3::new(0.0, 0.0, 0.0),
            end: Vector3::new(4.0, 0.0, 0.0),
        },
        HatchEdge::Line {
            start: Vector3::new(4.0, 0.0, 0.0),
            end: Vector3::new(0.0, 0.0, 0.0),
        },
    ])];
    let hatch = Hatch {
        loop_count: loops.len(),
        ..Hatch::pattern("ANSI31", 2.0, 45.0)
    };
    assert_round_trip(DxfVersion::AC1015, Record::Hatch { hatch, loops });
}

#[test]
fn test_aligned_dimension_round_trip() {
    let common = DimensionCommon {
        definition_point: Vector3::new(0.0, 5.0, 0.0),
        text_middle_point: Vector3::new(5.0, 6.0, 0.0),
        dimension_type: 1,
        text: "<> mm".to_string(),
        ..Default::default()
    };
    let kind = DimensionKind::Aligned(AlignedDimension {
        first_point: Vector3::new(0.0, 0.0, 0.0),
        second_point: Vector3::new(10.0, 0.0, 0.0),
    });
    assert_round_trip(DxfVersion::AC1015, Record::Dimension(Dimension::new(common, kind)));
}

#[test]
fn test_xrecord_round_trip() {
    let record = Record::XRecord {
        handle: "2a".to_string(),
        values: vec![
            XRecordValue::string(1, "note"),
            XRecordValue::real(40, 1.5),
            XRecordValue::int(90, 7),
            XRecordValue::boolean(290, true),
        ],
    };
    assert_round_trip(DxfVersion::AC1015, record);
}

#[test]
fn test_mixed_file_keeps_order_within_sections() {
    let records = vec![
        Record::Line(Line::new(Vector3::ZERO, Vector3::UNIT_X)),
        Record::Circle(Circle::new(Vector3::ZERO, 2.0)),
        Record::Point(Point::new(1.0, 1.0, 0.0)),
    ];
    let (decoded, report) = round_trip(DxfVersion::AC1015, records.clone());
    assert!(report.is_complete());
    let got: Vec<&Record> = content(&decoded).into_iter().map(|e| &e.record).collect();
    let expected: Vec<&Record> = records.iter().collect();
    assert_eq!(got, expected);
}

#[test]
fn test_attributes_survive() {
    use dxf_codec::{Attributes, Color, DxfWriter, LineWeight, RecordEntry};

    let attributes = Attributes::on_layer("WALLS")
        .with_color(Color::RED)
        .with_line_weight(LineWeight::Value(50))
        .with_line_type("DASHED");
    let mut writer = DxfWriter::new(DxfVersion::AC1015);
    writer.push(RecordEntry::with_attributes(
        Record::Line(Line::new(Vector3::ZERO, Vector3::UNIT_Y)),
        attributes,
    ));
    let bytes = writer.write_to_vec().unwrap();
    let (records, _) = dxf_codec::DxfReader::from_bytes(bytes).unwrap().read_records().unwrap();
    let entry = content(&records)
        .into_iter()
        .find(|e| matches!(e.record, Record::Line(_)))
        .unwrap();
    assert_eq!(entry.attributes.layer_name(), "WALLS");
    assert_eq!(entry.attributes.color, Color::RED);
    assert_eq!(entry.attributes.line_weight, LineWeight::Value(50));
    assert_eq!(entry.attributes.line_type(), "DASHED");
    assert!(entry.attributes.handle.is_some());
}

#[test]
fn test_ellipse_round_trip() {
    let mut ellipse = Ellipse::new(Vector3::new(1.0, 2.0, 0.0), Vector3::new(4.0, 0.0, 0.0), 0.5);
    ellipse.start_parameter = 0.25;
    ellipse.end_parameter = 3.125;
    for version in VERSIONS {
        assert_round_trip(version, Record::Ellipse(ellipse));
    }
}

#[test]
fn test_insert_round_trip() {
    let mut insert = Insert::new("DOOR", Vector3::new(10.0, 20.0, 0.0));
    insert.scale = Vector3::new(2.0, 2.0, 1.0);
    insert.rotation = 45.0;
    let mut array = Insert::new("WINDOW", Vector3::ZERO);
    array.columns = 3;
    array.rows = 2;
    array.column_spacing = 1.5;
    array.row_spacing = 2.25;
    for version in VERSIONS {
        assert_round_trip(version, Record::Insert(insert.clone()));
        assert_round_trip(version, Record::Insert(array.clone()));
    }
}

#[test]
fn test_insert_with_attribute_round_trip() {
    let insert = Insert::new("DOOR", Vector3::new(1.0, 1.0, 0.0));
    let mut attribute = AttributeEntity::new("WIDTH", Text::new("900", Vector3::new(1.0, 2.0, 0.0), 2.5));
    attribute.flags = 8;
    attribute.text.vertical_justification = 2;
    attribute.text.horizontal_justification = 1;
    attribute.text.alignment_point = Vector3::new(3.0, 2.0, 0.0);
    for version in VERSIONS {
        assert_round_trip_all(
            version,
            vec![Record::Insert(insert.clone()), Record::Attribute(attribute.clone())],
        );
    }
}

#[test]
fn test_long_mtext_round_trip() {
    let text = format!("{}\nsecond line x^2 and ^J{}", "a".repeat(248), "b".repeat(300));
    let mut mtext = MText::new(text, Vector3::new(1.0, 1.0, 0.0), 2.5);
    mtext.width = 40.0;
    mtext.attachment_point = 5;
    for version in VERSIONS {
        assert_round_trip(version, Record::MText(mtext.clone()));
    }
}

#[test]
fn test_text_with_control_characters_round_trip() {
    let text = Text::new("tab\there^caret\r\nnext", Vector3::new(1.0, 2.0, 0.0), 2.5);
    for version in VERSIONS {
        assert_round_trip(version, Record::Text(text.clone()));
    }
}

#[test]
fn test_leader_round_trip() {
    let vertices = vec![
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(5.0, 5.0, 0.0),
        Vector3::new(8.0, 5.0, 0.0),
    ];
    let leader = Leader {
        path_type: 1,
        hookline: 1,
        text_height: 2.5,
        text_width: 12.0,
        vertex_count: vertices.len(),
        ..Leader::default()
    };
    for version in VERSIONS {
        assert_round_trip(
            version,
            Record::Leader {
                leader,
                vertices: vertices.clone(),
            },
        );
    }
}

#[test]
fn test_image_and_definition_round_trip() {
    let mut image = RasterImage::new("40", Vector3::new(1.0, 1.0, 0.0), 640.0, 480.0);
    image.u_vector = Vector3::new(0.5, 0.0, 0.0);
    image.v_vector = Vector3::new(0.0, 0.5, 0.0);
    image.brightness = 60;
    image.fade = 10;
    let definition = ImageDefinition::new("40", "photo.png");
    assert_round_trip_all(
        DxfVersion::AC1015,
        vec![Record::Image(image), Record::ImageDefinition(definition)],
    );
}

#[test]
fn test_dictionary_round_trip() {
    let record = Record::Dictionary {
        dictionary: Dictionary::new("c"),
        entries: vec![
            DictionaryEntry::new("ACAD_GROUP", "d"),
            DictionaryEntry::new("MY_SETTINGS", "2a"),
        ],
    };
    assert_round_trip(DxfVersion::AC1015, record);
}

#[test]
fn test_xline_and_ray_round_trip() {
    let xline = XLine::new(Vector3::new(1.0, 2.0, 0.0), Vector3::new(0.6, 0.8, 0.0));
    let ray = Ray::new(Vector3::ZERO, Vector3::new(0.0, 1.0, 0.0));
    for version in VERSIONS {
        assert_round_trip_all(version, vec![Record::XLine(xline), Record::Ray(ray)]);
    }
}

#[test]
fn test_solid_trace_and_face_round_trip() {
    let mut solid = Solid::new([
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(4.0, 0.0, 0.0),
        Vector3::new(0.0, 3.0, 0.0),
        Vector3::new(4.0, 3.0, 0.0),
    ]);
    solid.thickness = 1.5;
    let trace = Solid::triangle(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
    );
    let face = Solid::new([
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 1.0),
        Vector3::new(1.0, 1.0, 2.0),
        Vector3::new(0.0, 1.0, 1.0),
    ]);
    for version in VERSIONS {
        assert_round_trip_all(
            version,
            vec![Record::Solid(solid), Record::Trace(trace), Record::Face3D(face)],
        );
    }
}

#[test]
fn test_text_style_round_trip() {
    let mut style = TextStyle::new("NOTES");
    style.fixed_height = 3.5;
    style.width_factor = 0.75;
    style.oblique_angle = 15.0;
    style.font_file = "romans.shx".to_string();
    for version in VERSIONS {
        assert_round_trip(version, Record::TextStyle(style.clone()));
    }

    style.bold = true;
    style.italic = true;
    assert_round_trip(DxfVersion::AC1015, Record::TextStyle(style));
}

#[test]
fn test_block_round_trip() {
    let mut block = Block::new("DOOR", Vector3::new(1.0, 2.0, 0.0));
    block.flags = 2;
    for version in VERSIONS {
        assert_round_trip_all(
            version,
            vec![
                Record::Block(block.clone()),
                Record::Circle(Circle::new(Vector3::ZERO, 2.0)),
                Record::EndBlock,
            ],
        );
    }
}

#[test]
fn test_every_dimension_kind_round_trip() {
    let records = vec![
        dimension(
            0,
            DimensionKind::Linear(LinearDimension {
                first_point: Vector3::new(0.0, 0.0, 0.0),
                second_point: Vector3::new(10.0, 0.0, 0.0),
                rotation: 30.0,
                oblique: 15.0,
            }),
        ),
        dimension(
            1 | 32,
            DimensionKind::Aligned(AlignedDimension {
                first_point: Vector3::new(0.0, 0.0, 0.0),
                second_point: Vector3::new(10.0, 4.0, 0.0),
            }),
        ),
        dimension(
            2,
            DimensionKind::Angular(AngularDimension {
                first_line_start: Vector3::new(0.0, 0.0, 0.0),
                first_line_end: Vector3::new(5.0, 0.0, 0.0),
                second_line_start: Vector3::new(0.0, 1.0, 0.0),
                arc_point: Vector3::new(3.0, 3.0, 0.0),
            }),
        ),
        dimension(
            3,
            DimensionKind::Diametric(DiametricDimension {
                definition_point: Vector3::new(-5.0, 0.0, 0.0),
                leader_length: 2.5,
            }),
        ),
        dimension(
            4 | 128,
            DimensionKind::Radial(RadialDimension {
                definition_point: Vector3::new(5.0, 0.0, 0.0),
                leader_length: 1.25,
            }),
        ),
        dimension(
            5,
            DimensionKind::Angular3Point(Angular3PointDimension {
                first_point: Vector3::new(5.0, 0.0, 0.0),
                second_point: Vector3::new(0.0, 5.0, 0.0),
                vertex: Vector3::ZERO,
            }),
        ),
        dimension(
            6,
            DimensionKind::Ordinate(OrdinateDimension {
                feature_point: Vector3::new(3.0, 4.0, 0.0),
                leader_end_point: Vector3::new(3.0, 9.0, 0.0),
                x_type: false,
            }),
        ),
    ];
    for version in VERSIONS {
        assert_round_trip_all(version, records.clone());
    }
}

#[test]
fn test_ordinate_dimension_keeps_axis_and_flags() {
    let record = dimension(
        6 | 32,
        DimensionKind::Ordinate(OrdinateDimension {
            feature_point: Vector3::new(3.0, 4.0, 0.0),
            leader_end_point: Vector3::new(8.0, 4.0, 0.0),
            x_type: true,
        }),
    );
    let pairs = common::record_pairs(DxfVersion::AC1015, &record);
    assert_eq!(common::value_of(&pairs, 70), Some("102"));
    for version in VERSIONS {
        assert_round_trip(version, record.clone());
    }
}

#[test]
fn test_inheritance_sentinels_survive() {
    use dxf_codec::{Attributes, Color, DxfWriter, LineWeight, RecordEntry};

    let by_block = Attributes::on_layer("PARTS")
        .with_color(Color::ByBlock)
        .with_line_weight(LineWeight::ByBlock)
        .with_line_type("BYBLOCK");
    let by_layer = Attributes::on_layer("PARTS")
        .with_color(Color::ByLayer)
        .with_line_weight(LineWeight::Default);
    for version in [DxfVersion::AC1009, DxfVersion::AC1015] {
        let mut writer = DxfWriter::new(version);
        writer.push(RecordEntry::with_attributes(
            Record::Point(Point::new(1.0, 1.0, 0.0)),
            by_block.clone(),
        ));
        writer.push(RecordEntry::with_attributes(
            Record::Point(Point::new(2.0, 2.0, 0.0)),
            by_layer.clone(),
        ));
        let bytes = writer.write_to_vec().unwrap();
        let (records, _) = dxf_codec::DxfReader::from_bytes(bytes).unwrap().read_records().unwrap();
        let points: Vec<&RecordEntry> = content(&records)
            .into_iter()
            .filter(|e| matches!(e.record, Record::Point(_)))
            .collect();
        assert_eq!(points.len(), 2);

        assert_eq!(points[0].attributes.color, Color::ByBlock);
        assert_eq!(points[0].attributes.line_type(), "BYBLOCK");
        assert_eq!(points[1].attributes.color, Color::ByLayer);
        assert_eq!(points[1].attributes.line_type(), "BYLAYER");
        if version == DxfVersion::AC1015 {
            assert_eq!(points[0].attributes.line_weight, LineWeight::ByBlock);
            assert_eq!(points[1].attributes.line_weight, LineWeight::Default);
        } else {
            assert_eq!(points[0].attributes.line_weight, LineWeight::ByLayer);
        }
    }
}

#[test]
fn test_stored_acad_xdata_survives_hatch() {
    use dxf_codec::xdata::XDataValue;
    use dxf_codec::{DxfWriter, RecordEntry};

    let hatch = Hatch {
        origin: Vector3::new(2.0, 3.0, 0.0),
        ..Hatch::solid()
    };
    let mut entry = RecordEntry::new(Record::Hatch {
        hatch: hatch.clone(),
        loops: Vec::new(),
    });
    entry.xdata.push_to("ACAD", 1000, XDataValue::String("kept".into()));
    let mut writer = DxfWriter::new(DxfVersion::AC1015);
    writer.push(entry);
    let bytes = writer.write_to_vec().unwrap();
    let (records, _) = dxf_codec::DxfReader::from_bytes(bytes).unwrap().read_records().unwrap();
    let decoded = content(&records);
    assert_eq!(decoded.len(), 1);
    match &decoded[0].record {
        Record::Hatch { hatch: got, .. } => assert_eq!(got.origin, hatch.origin),
        other => panic!("unexpected record {:?}", other),
    }
    assert_eq!(
        decoded[0].xdata.find("ACAD", 1000),
        Some(&XDataValue::String("kept".into()))
    );
}

#[test]
fn test_arc_aligned_text_round_trip() {
    let mut text = ArcAlignedText::new("ALONG THE ARC", Vector3::new(3.0, 4.0, 0.0), 20.0);
    text.font = "Arial".to_string();
    text.height = 1.5;
    text.start_angle = 0.5;
    text.end_angle = 2.25;
    text.alignment = 4;
    text.side = 2;
    text.underline = true;
    for version in VERSIONS {
        assert_round_trip(version, Record::ArcAlignedText(text.clone()));
    }
    text.arc_handle = "2F".to_string();
    assert_round_trip(DxfVersion::AC1015, Record::ArcAlignedText(text));
}
