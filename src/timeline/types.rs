use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Elementary stream identifier
pub type Pid = u16;

/// One diagnostic record captured for an elementary stream.
///
/// `marker` and `interval` are clip-local seconds. A sample may describe only
/// part of a frame; `is_frame_boundary` marks the samples that close a whole one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub marker: f64,
    pub interval: f64,
    pub bytes: u64,
    #[serde(default)]
    pub is_frame_boundary: bool,
}

impl Sample {
    pub fn new(marker: f64, interval: f64, bytes: u64, is_frame_boundary: bool) -> Self {
        Self {
            marker,
            interval,
            bytes,
            is_frame_boundary,
        }
    }

    /// Size of the sample in bits, saturating at `u64::MAX`
    pub fn bits(&self) -> u64 {
        self.bytes.saturating_mul(8)
    }
}

/// A slice of one media file placed on the playlist timeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    pub display_name: String,
    #[serde(default)]
    pub angle_index: u32,
    /// Clip-local start; samples before it are lead-in
    pub time_in: f64,
    /// Offset of the clip within the concatenated playlist
    pub relative_time_in: f64,
    pub length: f64,
    #[serde(default)]
    pub diagnostics: BTreeMap<Pid, Vec<Sample>>,
}

impl Clip {
    /// Samples captured for `pid`, or an empty slice when the clip has none.
    pub fn samples(&self, pid: Pid) -> &[Sample] {
        self.diagnostics
            .get(&pid)
            .map(|samples| samples.as_slice())
            .unwrap_or(&[])
    }

    /// Map a clip-local timestamp onto the playlist timeline
    pub fn to_playlist_time(&self, marker: f64) -> f64 {
        marker - self.time_in + self.relative_time_in
    }
}

/// Kind of elementary stream declared by a playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamKind {
    Video,
    Audio,
    Graphics,
    Text,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    pub pid: Pid,
    pub kind: StreamKind,
}

/// Pick the stream whose samples drive the chapter timeline: the first video stream.
pub fn select_reference_pid(streams: &[StreamDescriptor]) -> Option<Pid> {
    streams
        .iter()
        .find(|stream| stream.kind == StreamKind::Video)
        .map(|stream| stream.pid)
}

/// Everything the analysis needs about one playlist
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistTimeline {
    /// Ascending chapter start times in playlist seconds
    pub chapters: Vec<f64>,
    pub clips: Vec<Clip>,
    pub reference_pid: Option<Pid>,
    /// Playlist length, the end of the last chapter
    pub total_length: f64,
}
