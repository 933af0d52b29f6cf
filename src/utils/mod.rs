pub mod formatting;
pub mod path;
pub mod time;

pub use formatting::plural;
pub use time::secs2readable;
