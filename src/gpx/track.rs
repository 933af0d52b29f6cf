//! GPX structure helpers: tracks, segments, points and their `time` tags.

use crate::errors::{AppError, AppResult, PointLocation};
use crate::gpx::tree::{Document, Element, Node};
use crate::gpx::{NAME, POINT, SEGMENT, TIME, TRACK};
use crate::utils::time::parse_gpx_time;
use chrono::NaiveDateTime;

impl Document {
    pub fn tracks(&self) -> impl Iterator<Item = &Element> {
        self.root.children_named(TRACK)
    }

    pub fn tracks_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.root.children_named_mut(TRACK)
    }

    /// All track points, in document order.
    pub fn points(&self) -> impl Iterator<Item = &Element> {
        self.tracks()
            .flat_map(|t| t.children_named(SEGMENT))
            .flat_map(|s| s.children_named(POINT))
    }

    pub fn point_count(&self) -> usize {
        self.points().count()
    }

    /// Number of points already carrying at least one `time` tag.
    pub fn timed_point_count(&self) -> usize {
        self.points().filter(|p| p.first_child(TIME).is_some()).count()
    }
}

pub fn track_name(track: &Element) -> Option<String> {
    track
        .first_child(NAME)
        .map(|n| n.text())
        .filter(|n| !n.is_empty())
}

/// Positions of the `trkseg` children inside `track.children`.
pub fn segment_positions(track: &Element) -> Vec<usize> {
    track
        .children
        .iter()
        .enumerate()
        .filter(|(_, n)| n.is_element(SEGMENT))
        .map(|(i, _)| i)
        .collect()
}

pub fn points(segment: &Element) -> impl Iterator<Item = &Element> {
    segment.children_named(POINT)
}

/// The single timestamp of a point. Zero or several `time` tags is a format error.
pub fn point_time(point: &Element, location: PointLocation) -> AppResult<NaiveDateTime> {
    let times: Vec<&Element> = point.children_named(TIME).collect();
    if times.len() != 1 {
        return Err(AppError::TimeFormat {
            location,
            found: times.len(),
        });
    }

    let text = times[0].text();
    parse_gpx_time(&text).ok_or(AppError::TimeParse {
        location,
        value: text,
    })
}

/// An empty segment named like the ones already in `track`.
pub fn new_segment(track: &Element) -> Element {
    Element::new(track.sibling_name(SEGMENT))
}

/// Detach the points of `segment` starting at the `first`-th one (0-based).
/// Non-point children stay where they are.
pub fn take_points_from(segment: &mut Element, first: usize) -> Vec<Node> {
    let mut kept = Vec::with_capacity(segment.children.len());
    let mut moved = Vec::new();
    let mut seen = 0;

    for node in std::mem::take(&mut segment.children) {
        if node.is_element(POINT) {
            seen += 1;
            if seen > first {
                moved.push(node);
                continue;
            }
        }
        kept.push(node);
    }

    segment.children = kept;
    moved
}
