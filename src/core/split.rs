//! Gap removal.
//!
//! A gap is the time elapsed between two consecutive points of a segment
//! when it is strictly greater than the threshold. Every gap ends the
//! current segment: the points after it are moved, in order, into a new
//! segment appended at the end of the track, which is then scanned in
//! turn. Only the segments that existed before the run are scanned from
//! the top level, each new segment is reached through the chain that
//! created it.

use crate::errors::{AppResult, PointLocation};
use crate::gpx::track::{new_segment, point_time, points, segment_positions, take_points_from, track_name};
use crate::gpx::{Document, Element, Node};
use crate::models::{GapReport, SplitReport, TrackReport};
use crate::utils::time::seconds_between;
use chrono::NaiveDateTime;
use tracing::{debug, info};

/// Timestamps of one segment, keyed by the segment's position in `track.children`.
#[derive(Debug)]
struct SegmentTimes {
    position: usize,
    times: Vec<NaiveDateTime>,
}

fn collect_track_times(track: &Element, track_index: usize) -> AppResult<Vec<SegmentTimes>> {
    let mut out = Vec::new();

    for (segment_index, position) in segment_positions(track).into_iter().enumerate() {
        let Some(segment) = track.children[position].as_element() else {
            continue;
        };

        let times = points(segment)
            .enumerate()
            .map(|(point_index, point)| {
                point_time(
                    point,
                    PointLocation {
                        track: track_index,
                        segment: segment_index,
                        point: point_index,
                    },
                )
            })
            .collect::<AppResult<Vec<_>>>()?;

        out.push(SegmentTimes { position, times });
    }

    Ok(out)
}

/// Splits track segments at every gap longer than `threshold` seconds.
#[derive(Debug, Clone, Copy)]
pub struct GapSplitter {
    threshold: u32,
}

impl GapSplitter {
    pub fn new(threshold_seconds: u32) -> Self {
        Self {
            threshold: threshold_seconds,
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Split every track of the document.
    ///
    /// Every point of every track is validated first; on error the document
    /// is left untouched.
    pub fn split_document(&self, doc: &mut Document) -> AppResult<SplitReport> {
        let plans = doc
            .tracks()
            .enumerate()
            .map(|(index, track)| collect_track_times(track, index))
            .collect::<AppResult<Vec<_>>>()?;

        let mut report = SplitReport {
            threshold: self.threshold,
            ..Default::default()
        };

        for (index, (track, plan)) in doc.tracks_mut().zip(plans).enumerate() {
            let segments_before = plan.len();
            let gaps = self.apply(track, plan, index);
            let track_report = TrackReport {
                index,
                name: track_name(track),
                segments_before,
                segments_after: segment_positions(track).len(),
                gaps,
            };

            info!(
                track = index + 1,
                gaps = gaps.gaps,
                seconds = gaps.seconds,
                segments = track_report.segments_after,
                "track processed"
            );

            report.total += gaps;
            report.tracks.push(track_report);
        }

        Ok(report)
    }

    /// Split a single track. Errors are reported with track index 0.
    pub fn split_track(&self, track: &mut Element) -> AppResult<GapReport> {
        let plan = collect_track_times(track, 0)?;
        Ok(self.apply(track, plan, 0))
    }

    fn apply(&self, track: &mut Element, plan: Vec<SegmentTimes>, track_index: usize) -> GapReport {
        let mut total = GapReport::default();
        for segment in plan {
            total += self.split_segment(track, segment, track_index);
        }
        total
    }

    /// Scan one segment, then each tail split off it, until no gap is left.
    fn split_segment(&self, track: &mut Element, segment: SegmentTimes, track_index: usize) -> GapReport {
        let mut report = GapReport::default();
        let SegmentTimes {
            mut position,
            mut times,
        } = segment;

        while let Some((first, gap)) = self.find_gap(&times) {
            let mut tail = new_segment(track);
            if let Some(Node::Element(current)) = track.children.get_mut(position) {
                tail.children = take_points_from(current, first);
            }
            track.push_element(tail);

            position = track.children.len() - 1;
            times = times.split_off(first);
            report += GapReport::new(1, gap);

            debug!(
                track = track_index + 1,
                gap_seconds = gap,
                moved_points = times.len(),
                "gap removed, tail moved to a new segment"
            );
        }

        report
    }

    /// First `(index, gap)` where the time since the previous point exceeds the threshold.
    fn find_gap(&self, times: &[NaiveDateTime]) -> Option<(usize, i64)> {
        let threshold = i64::from(self.threshold);
        times.windows(2).enumerate().find_map(|(i, pair)| {
            let gap = seconds_between(pair[0], pair[1]);
            (gap > threshold).then_some((i + 1, gap))
        })
    }
}

/// Convenience wrapper: split every track of `doc` with the given threshold.
pub fn split_gaps(doc: &mut Document, threshold_seconds: u32) -> AppResult<SplitReport> {
    GapSplitter::new(threshold_seconds).split_document(doc)
}
