mod chapters;
mod types;
mod walker;

pub use chapters::{chapter_span, chapter_spans, validate_chapters, ChapterSpan};
pub use types::{
    select_reference_pid, Clip, Pid, PlaylistTimeline, Sample, StreamDescriptor, StreamKind,
};
pub use walker::{TimelineWalker, WalkEvent, WalkState};
