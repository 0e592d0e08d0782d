pub mod stats_file;

pub use stats_file::{JsonStatsFile, StatsFileError};
