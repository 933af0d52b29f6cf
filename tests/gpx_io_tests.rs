mod common;
use common::{gpx_segment, parse};

use gpxfix::errors::AppError;
use gpxfix::gpx::{self, Element, Node};

const RICH: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!-- exported by a watch -->
<gpx version="1.1" creator="Watch &amp; Co" xmlns="http://www.topografix.com/GPX/1/1" xmlns:gpxtpx="http://www.garmin.com/xmlschemas/TrackPointExtension/v1">
  <metadata><name>Morning &lt;run&gt;</name></metadata>
  <wpt lat="1.0" lon="2.0"><name>Start</name></wpt>
  <trk>
    <name>Run</name>
    <desc><![CDATA[raw <text>]]></desc>
    <trkseg>
      <trkpt lat="45.1" lon="7.2">
        <ele>250.5</ele>
        <time>2024-05-01T08:00:00.000Z</time>
        <extensions><gpxtpx:TrackPointExtension><gpxtpx:hr>121</gpxtpx:hr></gpxtpx:TrackPointExtension></extensions>
      </trkpt>
    </trkseg>
  </trk>
</gpx>
"#;

#[test]
fn test_parse_keeps_structure() {
    let doc = parse(RICH);

    let decl = doc.declaration.as_ref().expect("declaration");
    assert_eq!(decl.version, "1.0");
    assert_eq!(decl.encoding.as_deref(), Some("UTF-8"));
    assert_eq!(decl.standalone.as_deref(), Some("no"));
    assert_eq!(doc.prolog, vec![Node::Comment(" exported by a watch ".into())]);

    assert_eq!(doc.root.attribute("creator"), Some("Watch & Co"));
    let meta = doc.root.first_child("metadata").expect("metadata");
    assert_eq!(
        meta.first_child("name").map(Element::text).as_deref(),
        Some("Morning <run>")
    );

    let track = doc.tracks().next().expect("track");
    assert_eq!(track.first_child("desc").map(Element::text).as_deref(), Some("raw <text>"));
    assert_eq!(doc.point_count(), 1);
    assert_eq!(doc.timed_point_count(), 1);
}

#[test]
fn test_write_then_parse_is_stable() {
    let doc = parse(RICH);

    for indent in [0, 2, 4] {
        let text = gpx::to_string(&doc, indent).expect("serialize");
        let again = parse(&text);
        assert_eq!(again, doc, "indent {indent}");
    }
}

#[test]
fn test_writer_escapes_text_and_attributes() {
    let root = Element::new("gpx")
        .with_attribute("creator", "a \"quoted\" & <odd> name")
        .with_child(Element::new("trk").with_child(Element::new("name").with_text("R&D <loop>")));
    let doc = gpx::Document::new(root);

    let text = gpx::to_string(&doc, 2).expect("serialize");

    assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(text.contains("R&amp;D &lt;loop&gt;"));
    assert_eq!(parse(&text), doc);
}

#[test]
fn test_empty_elements_are_self_closed() {
    let doc = parse(r#"<gpx version="1.1"><trk><trkseg></trkseg></trk></gpx>"#);
    let text = gpx::to_string(&doc, 0).expect("serialize");
    assert!(text.contains("<trkseg/>"));
}

#[test]
fn test_write_file_round_trip() {
    let dir = common::temp_dir("io_round_trip");
    let path = dir.join("out.gpx");
    let doc = parse(&gpx_segment(&[0, 1, 2]));

    gpx::write_file(&doc, &path, 2).expect("write");
    let back = gpx::read_file(&path).expect("read");

    assert_eq!(back, doc);
}

#[test]
fn test_rejects_non_gpx_root() {
    let err = gpx::parse_str("<kml><Document/></kml>").expect_err("not gpx");
    assert!(matches!(err, AppError::InvalidDocument(_)));
}

#[test]
fn test_rejects_empty_input() {
    let err = gpx::parse_str("").expect_err("empty");
    assert!(matches!(err, AppError::InvalidDocument(_)));
}

#[test]
fn test_rejects_broken_xml() {
    assert!(gpx::parse_str("<gpx><trk></gpx>").is_err());
    assert!(gpx::parse_str("<gpx><trk>").is_err());
}

#[test]
fn test_missing_file_is_io_error() {
    let err = gpx::read_file("/definitely/not/here.gpx").expect_err("missing");
    assert!(matches!(err, AppError::Io(_)));
}

#[test]
fn test_text_content_keeps_surrounding_spaces() {
    let input = r#"<gpx version="1.1">
  <trk>
    <name> Lap 1 </name>
    <desc>  two  spaces  </desc>
    <trkseg><trkpt lat="1" lon="2"><time>2024-05-01T08:00:00.000Z</time></trkpt></trkseg>
  </trk>
</gpx>"#;
    let doc = parse(input);

    let trk = doc.root.first_child("trk").expect("trk");
    assert_eq!(trk.first_child("desc").map(Element::text).as_deref(), Some("  two  spaces  "));
    // Indentation between elements is not kept as text.
    assert!(trk.children.iter().all(|n| !matches!(n, Node::Text(_))));

    let compact = gpx::to_string(&doc, 0).expect("serialize");
    assert!(compact.contains("<desc>  two  spaces  </desc>"));
    assert!(compact.contains("<name> Lap 1 </name>"));

    let indented = gpx::to_string(&doc, 2).expect("serialize");
    assert_eq!(parse(&indented), doc);
}
