// src/gpx/mod.rs

pub mod reader;
pub mod track;
pub mod tree;
pub mod writer;

pub use reader::{parse_str, read_file};
pub use tree::{Declaration, Document, Element, Node};
pub use writer::{to_string, write_file};

/// GPX 1.1 namespace, used when building documents from scratch.
pub const GPX_NS: &str = "http://www.topografix.com/GPX/1/1";

pub const ROOT: &str = "gpx";
pub const TRACK: &str = "trk";
pub const SEGMENT: &str = "trkseg";
pub const POINT: &str = "trkpt";
pub const TIME: &str = "time";
pub const NAME: &str = "name";
