/*
# Timeline Walker

 Walks chapters, clips and the reference stream's samples in a single pass. Each call to
 `step()` performs one transition and reports it as a `WalkEvent`, so the walk can be driven
 sample by sample or consumed as an iterator of finished chapters.

 Clip and sample cursors survive chapter boundaries: a clip usually spans several chapters.
 The window and frame state does not; it is reset every time a chapter is emitted.
*/

use super::chapters::{chapter_span, ChapterSpan};
use super::types::{Pid, PlaylistTimeline};
use crate::stats::{ChapterResult, FrameStatsTracker, WindowSet};
use log::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    AdvancingWithinClip,
    AdvancingToNextClip,
    ChapterComplete,
    Exhausted,
}

/// What a single `step()` did
#[derive(Debug, Clone, PartialEq)]
pub enum WalkEvent {
    SampleConsumed { position: f64 },
    /// Sample before the clip's `time_in`
    LeadInDiscarded,
    ClipExhausted { clip_index: usize },
    /// Clip belongs to another angle
    ClipSkipped { clip_index: usize },
    ClipAdvanced { clip_index: usize },
    /// Ran out of clips before the chapter end; the chapter is closed as is
    CaptureTruncated,
    ChapterFinished(ChapterResult),
    Finished,
}

pub struct TimelineWalker<'a> {
    timeline: &'a PlaylistTimeline,
    reference_pid: Option<Pid>,
    primary_angle: u32,
    state: WalkState,
    span: Option<ChapterSpan>,
    clip_index: usize,
    sample_index: usize,
    position: f64,
    lead_in_discarded: usize,
    windows: WindowSet,
    frames: FrameStatsTracker,
}

impl<'a> TimelineWalker<'a> {
    /// Walker over `timeline` using its own reference PID.
    pub fn new(timeline: &'a PlaylistTimeline, primary_angle: u32) -> Self {
        Self::for_stream(timeline, timeline.reference_pid, primary_angle)
    }

    /// Walker driven by the samples of `reference_pid`.
    ///
    /// Without a reference stream the walker starts exhausted and yields no chapters.
    pub fn for_stream(
        timeline: &'a PlaylistTimeline,
        reference_pid: Option<Pid>,
        primary_angle: u32,
    ) -> Self {
        let mut walker = Self {
            timeline,
            reference_pid,
            primary_angle,
            state: WalkState::Exhausted,
            span: None,
            clip_index: 0,
            sample_index: 0,
            position: 0.0,
            lead_in_discarded: 0,
            windows: WindowSet::new(),
            frames: FrameStatsTracker::new(),
        };
        walker.rewind();
        walker
    }

    /// Restart the walk from the first chapter
    pub fn rewind(&mut self) {
        self.clip_index = 0;
        self.sample_index = 0;
        self.position = 0.0;
        self.lead_in_discarded = 0;
        self.windows.reset();
        self.frames.reset();

        if self.reference_pid.is_none() {
            warn!("No reference video stream, nothing to analyze");
            self.span = None;
            self.state = WalkState::Exhausted;
            return;
        }

        self.enter_chapter(0);
    }

    fn enter_chapter(&mut self, index: usize) {
        self.span = chapter_span(&self.timeline.chapters, index, self.timeline.total_length);

        self.state = match self.span {
            Some(span) if self.position >= span.end => WalkState::ChapterComplete,
            Some(_) => WalkState::AdvancingWithinClip,
            None => WalkState::Exhausted,
        };
    }

    pub fn state(&self) -> WalkState {
        self.state
    }

    /// Last playlist position reached
    pub fn position(&self) -> f64 {
        self.position
    }

    /// 0-based index of the chapter being walked, `None` once exhausted
    pub fn chapter_index(&self) -> Option<usize> {
        self.span.map(|span| span.index)
    }

    pub fn clip_index(&self) -> usize {
        self.clip_index
    }

    /// Perform one transition of the walk.
    pub fn step(&mut self) -> WalkEvent {
        let Some(span) = self.span else {
            self.state = WalkState::Exhausted;
            return WalkEvent::Finished;
        };

        match self.state {
            WalkState::Exhausted => WalkEvent::Finished,
            WalkState::ChapterComplete => self.finish_chapter(span),
            WalkState::AdvancingToNextClip => {
                self.clip_index += 1;
                self.sample_index = 0;
                self.lead_in_discarded = 0;
                self.state = WalkState::AdvancingWithinClip;
                WalkEvent::ClipAdvanced {
                    clip_index: self.clip_index,
                }
            }
            WalkState::AdvancingWithinClip => self.advance_within_clip(span),
        }
    }

    fn advance_within_clip(&mut self, span: ChapterSpan) -> WalkEvent {
        let timeline = self.timeline;
        let Some(clip) = timeline.clips.get(self.clip_index) else {
            warn!(
                "Diagnostics end at {:.3}s before chapter {} ends at {:.3}s",
                self.position,
                span.index + 1,
                span.end
            );
            self.position = span.end;
            self.state = WalkState::ChapterComplete;
            return WalkEvent::CaptureTruncated;
        };

        if clip.angle_index != self.primary_angle {
            debug!(
                "Skipping clip {} ({}): angle {}",
                self.clip_index, clip.display_name, clip.angle_index
            );
            self.state = WalkState::AdvancingToNextClip;
            return WalkEvent::ClipSkipped {
                clip_index: self.clip_index,
            };
        }

        let Some(pid) = self.reference_pid else {
            self.span = None;
            self.state = WalkState::Exhausted;
            return WalkEvent::Finished;
        };
        if self.sample_index == 0 && !clip.diagnostics.contains_key(&pid) {
            warn!(
                "Clip {} ({}) has no diagnostics for PID 0x{:04X}",
                self.clip_index, clip.display_name, pid
            );
        }

        let Some(sample) = clip.samples(pid).get(self.sample_index) else {
            debug!(
                "Clip {} ({}) exhausted at {:.3}s, {} lead-in samples discarded",
                self.clip_index, clip.display_name, self.position, self.lead_in_discarded
            );
            self.state = WalkState::AdvancingToNextClip;
            return WalkEvent::ClipExhausted {
                clip_index: self.clip_index,
            };
        };
        self.sample_index += 1;

        if sample.marker < clip.time_in {
            self.lead_in_discarded += 1;
            return WalkEvent::LeadInDiscarded;
        }

        let position = clip.to_playlist_time(sample.marker);
        let bits = sample.bits();
        self.position = position;
        self.windows.push(bits as f64, sample.interval, position);
        self.frames.accept(bits, sample.interval, sample.is_frame_boundary, position);

        if position >= span.end {
            self.state = WalkState::ChapterComplete;
        }

        WalkEvent::SampleConsumed { position }
    }

    fn finish_chapter(&mut self, span: ChapterSpan) -> WalkEvent {
        let result = ChapterResult::finalize(&span, &self.windows, &self.frames);
        debug!(
            "Chapter {} [{:.3}s, {:.3}s): {} frames, avg {:.0} bps, 1s peak {:.0} bps",
            result.chapter_number,
            span.start,
            span.end,
            result.frame_count,
            result.avg_bitrate,
            result.peak_1s
        );

        self.windows.reset();
        self.frames.reset();
        self.enter_chapter(span.index + 1);

        WalkEvent::ChapterFinished(result)
    }
}

impl Iterator for TimelineWalker<'_> {
    type Item = ChapterResult;

    fn next(&mut self) -> Option<ChapterResult> {
        loop {
            match self.step() {
                WalkEvent::ChapterFinished(result) => return Some(result),
                WalkEvent::Finished => return None,
                _ => continue,
            }
        }
    }
}
