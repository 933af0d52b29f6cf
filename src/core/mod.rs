pub mod split;
pub mod stamp;

pub use split::{GapSplitter, split_gaps};
pub use stamp::{TimestampSynthesizer, assign_timestamps, assign_timestamps_from};
