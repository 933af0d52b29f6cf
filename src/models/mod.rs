pub mod report;

pub use report::{GapReport, SplitReport, StampReport, TrackReport};
