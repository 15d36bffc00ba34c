pub mod timeline;
pub use timeline::{
    select_reference_pid, ChapterSpan, Clip, Pid, PlaylistTimeline, Sample, StreamDescriptor,
    StreamKind, TimelineWalker, WalkEvent, WalkState,
};

pub mod stats;
pub use stats::{ChapterResult, FrameStatsTracker, WindowAggregator, WindowPeak, WindowSet};

pub mod report;
pub use report::ChapterSink;

pub mod config;
pub use config::AnalysisConfig;

pub mod errors;
pub use errors::{ChapterRateError, ChapterRateResult, ConfigError, SinkError, TimelineError};

use crate::timeline::validate_chapters;
use log::{info, warn};

/// Analyze every chapter of `timeline` with the default configuration.
pub fn analyze_chapters(timeline: &PlaylistTimeline) -> Vec<ChapterResult> {
    let mut results = Vec::with_capacity(timeline.chapters.len());
    // lenient default config and an infallible sink cannot fail
    if let Err(err) = emit_chapters(timeline, &AnalysisConfig::default(), &mut results) {
        warn!("Chapter analysis stopped early: {}", err);
    }
    results
}

pub fn analyze_chapters_with(
    timeline: &PlaylistTimeline,
    config: &AnalysisConfig,
) -> ChapterRateResult<Vec<ChapterResult>> {
    let mut results = Vec::with_capacity(timeline.chapters.len());
    emit_chapters(timeline, config, &mut results)?;
    Ok(results)
}

/// Walk `timeline` and hand each finished chapter to `sink`, returning how many were emitted.
pub fn emit_chapters<S>(
    timeline: &PlaylistTimeline,
    config: &AnalysisConfig,
    sink: &mut S,
) -> ChapterRateResult<usize>
where
    S: ChapterSink + ?Sized,
{
    config.validate()?;

    if let Err(err) = validate_chapters(&timeline.chapters, timeline.total_length) {
        if config.strict {
            return Err(err.into());
        }
        warn!("Analyzing malformed chapter list: {}", err);
    }

    let reference_pid = config.reference_pid.or(timeline.reference_pid);
    info!(
        "Analyzing {} chapters over {} clips (reference PID {:?}, angle {})",
        timeline.chapters.len(),
        timeline.clips.len(),
        reference_pid,
        config.primary_angle
    );

    let walker = TimelineWalker::for_stream(timeline, reference_pid, config.primary_angle);
    let mut emitted = 0;
    for result in walker {
        sink.emit(&result)?;
        emitted += 1;
    }

    info!("Emitted {} chapters", emitted);
    Ok(emitted)
}
