use serde::Serialize;
use std::ops::AddAssign;

/// Number of gaps removed and their accumulated duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GapReport {
    pub gaps: usize,
    pub seconds: i64,
}

impl GapReport {
    pub fn new(gaps: usize, seconds: i64) -> Self {
        Self { gaps, seconds }
    }
}

impl AddAssign for GapReport {
    fn add_assign(&mut self, rhs: Self) {
        self.gaps += rhs.gaps;
        self.seconds += rhs.seconds;
    }
}

/// Per-track outcome of a `remove-gaps` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackReport {
    /// 0-based position of the track in the document.
    pub index: usize,
    pub name: Option<String>,
    pub segments_before: usize,
    pub segments_after: usize,
    #[serde(flatten)]
    pub gaps: GapReport,
}

/// Outcome of a `remove-gaps` run over a whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    pub threshold: u32,
    pub tracks: Vec<TrackReport>,
    pub total: GapReport,
}

/// Outcome of an `add-timestamps` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StampReport {
    pub interval: u32,
    pub start: String,
    pub points: usize,
}
