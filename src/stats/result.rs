use super::frames::FrameStatsTracker;
use super::window::WindowSet;
use crate::timeline::ChapterSpan;
use serde::{Deserialize, Serialize};

/// Finished statistics for one chapter.
///
/// Bitrates are bits per second, sizes are bytes, times are playlist seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterResult {
    /// 1-based
    pub chapter_number: usize,
    pub start: f64,
    pub length: f64,
    pub avg_bitrate: f64,
    pub peak_1s: f64,
    pub peak_1s_at: f64,
    pub peak_5s: f64,
    pub peak_5s_at: f64,
    pub peak_10s: f64,
    pub peak_10s_at: f64,
    pub avg_frame_size: f64,
    pub max_frame_size: u64,
    pub max_frame_size_at: f64,
    pub total_bits: u64,
    pub total_seconds: f64,
    pub frame_count: u64,
}

impl ChapterResult {
    /// Snapshot the chapter state gathered while walking `span`
    pub fn finalize(span: &ChapterSpan, windows: &WindowSet, frames: &FrameStatsTracker) -> Self {
        let [peak_1s, peak_5s, peak_10s] = windows.peaks();
        let length = span.length();

        Self {
            chapter_number: span.index + 1,
            start: span.start,
            length,
            avg_bitrate: frames.average_bitrate(length),
            peak_1s: peak_1s.bitrate,
            peak_1s_at: peak_1s.location,
            peak_5s: peak_5s.bitrate,
            peak_5s_at: peak_5s.location,
            peak_10s: peak_10s.bitrate,
            peak_10s_at: peak_10s.location,
            avg_frame_size: frames.average_frame_size(),
            max_frame_size: frames.max_frame_size(),
            max_frame_size_at: frames.max_frame_size_at(),
            total_bits: frames.total_bits(),
            total_seconds: frames.total_seconds(),
            frame_count: frames.frame_count(),
        }
    }

    pub fn end(&self) -> f64 {
        self.start + self.length
    }

    /// True when no sample was credited to the chapter
    pub fn is_empty(&self) -> bool {
        self.total_bits == 0 && self.frame_count == 0
    }
}
