pub mod frames;
pub mod result;
pub mod window;

pub use frames::FrameStatsTracker;
pub use result::ChapterResult;
pub use window::{WindowAggregator, WindowPeak, WindowSet, WINDOW_10S, WINDOW_1S, WINDOW_5S};

#[cfg(test)]
pub mod unit_test;
