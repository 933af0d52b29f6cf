#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use gpxfix::gpx::track::{point_time, points};
use gpxfix::gpx::{self, Document, POINT, SEGMENT};
use gpxfix::errors::PointLocation;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn gpxfix() -> Command {
    cargo_bin_cmd!("gpxfix")
}

/// Reference instant for generated tracks: 2024-05-01T08:00:00
pub fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .expect("valid base time")
}

pub fn stamp(offset: i64) -> String {
    (base_time() + TimeDelta::seconds(offset))
        .format("%Y-%m-%dT%H:%M:%S.000Z")
        .to_string()
}

/// One `<trkpt>` per offset; `lat` encodes a running point number so the
/// original order can be checked after splitting.
fn write_points(out: &mut String, offsets: &[i64], counter: &mut usize) {
    for off in offsets {
        out.push_str(&format!(
            "      <trkpt lat=\"45.{:04}\" lon=\"7.5\"><ele>100</ele><time>{}</time></trkpt>\n",
            *counter,
            stamp(*off)
        ));
        *counter += 1;
    }
}

/// GPX text with one track per entry, one segment per inner slice.
pub fn gpx_tracks(tracks: &[&[&[i64]]]) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<gpx version=\"1.1\" creator=\"test\" xmlns=\"http://www.topografix.com/GPX/1/1\">\n",
    );
    let mut counter = 0;
    for (t, segments) in tracks.iter().enumerate() {
        out.push_str(&format!("  <trk>\n    <name>Track {}</name>\n", t + 1));
        for seg in segments.iter() {
            out.push_str("    <trkseg>\n");
            write_points(&mut out, seg, &mut counter);
            out.push_str("    </trkseg>\n");
        }
        out.push_str("  </trk>\n");
    }
    out.push_str("</gpx>\n");
    out
}

/// Single track, single segment.
pub fn gpx_segment(offsets: &[i64]) -> String {
    gpx_tracks(&[&[offsets]])
}

/// Same layout as `gpx_tracks` but without any `<time>` tag.
pub fn gpx_untimed(tracks: &[&[usize]]) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<gpx version=\"1.1\" creator=\"test\" xmlns=\"http://www.topografix.com/GPX/1/1\">\n",
    );
    for segments in tracks {
        out.push_str("  <trk>\n");
        for n in segments.iter() {
            out.push_str("    <trkseg>\n");
            for i in 0..*n {
                out.push_str(&format!(
                    "      <trkpt lat=\"45.{i:04}\" lon=\"7.5\"><ele>100</ele></trkpt>\n"
                ));
            }
            out.push_str("    </trkseg>\n");
        }
        out.push_str("  </trk>\n");
    }
    out.push_str("</gpx>\n");
    out
}

pub fn parse(s: &str) -> Document {
    gpx::parse_str(s).expect("test document parses")
}

/// Time offsets (seconds from `base_time`) per track, per segment.
pub fn offsets(doc: &Document) -> Vec<Vec<Vec<i64>>> {
    doc.tracks()
        .map(|t| {
            t.children_named(SEGMENT)
                .map(|s| {
                    points(s)
                        .map(|p| {
                            let loc = PointLocation {
                                track: 0,
                                segment: 0,
                                point: 0,
                            };
                            let time = point_time(p, loc).expect("timed point");
                            (time - base_time()).num_seconds()
                        })
                        .collect()
                })
                .collect()
        })
        .collect()
}

/// `lat` attributes of every point of a track, flattened in segment order.
pub fn lats(doc: &Document, track: usize) -> Vec<String> {
    doc.tracks()
        .nth(track)
        .map(|t| {
            t.children_named(SEGMENT)
                .flat_map(|s| s.children_named(POINT))
                .filter_map(|p| p.attribute("lat").map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Create a unique temp directory for one test.
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("gpxfix_test_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Write `content` as `<dir>/<file>` and return the path as String.
pub fn write_input(dir: &PathBuf, file: &str, content: &str) -> String {
    let p = dir.join(file);
    fs::write(&p, content).expect("write input gpx");
    p.to_string_lossy().to_string()
}

/// Path of a config file that does not exist, so defaults are used.
pub fn no_config(dir: &PathBuf) -> String {
    dir.join("missing.conf").to_string_lossy().to_string()
}
