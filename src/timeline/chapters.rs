use crate::errors::TimelineError;
use serde::{Deserialize, Serialize};

/// A chapter's bounds on the playlist timeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChapterSpan {
    pub index: usize,
    pub start: f64,
    pub end: f64,
}

impl ChapterSpan {
    pub fn length(&self) -> f64 {
        self.end - self.start
    }
}

/// Bounds of chapter `index`: it ends where the next one starts, the last one at `total_length`.
///
/// The end is never allowed to fall before the start.
pub fn chapter_span(chapters: &[f64], index: usize, total_length: f64) -> Option<ChapterSpan> {
    let start = *chapters.get(index)?;
    let end = chapters.get(index + 1).copied().unwrap_or(total_length);

    Some(ChapterSpan {
        index,
        start,
        end: end.max(start),
    })
}

/// Build every chapter span of a playlist
pub fn chapter_spans(chapters: &[f64], total_length: f64) -> Vec<ChapterSpan> {
    (0..chapters.len())
        .filter_map(|index| chapter_span(chapters, index, total_length))
        .collect()
}

/// Check that chapter starts are finite, strictly increasing and within the playlist.
pub fn validate_chapters(chapters: &[f64], total_length: f64) -> Result<(), TimelineError> {
    if !total_length.is_finite() || total_length < 0.0 {
        return Err(TimelineError::new(format!(
            "invalid playlist length: {}",
            total_length
        )));
    }

    for (index, start) in chapters.iter().enumerate() {
        if !start.is_finite() {
            return Err(TimelineError::new(format!(
                "chapter {} has a non-finite start",
                index + 1
            )));
        }
    }

    for (index, pair) in chapters.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(TimelineError::new(format!(
                "chapter {} starts at {} which is not after chapter {} at {}",
                index + 2,
                pair[1],
                index + 1,
                pair[0]
            )));
        }
    }

    if let Some(last) = chapters.last() {
        if *last > total_length {
            return Err(TimelineError::new(format!(
                "last chapter starts at {} beyond playlist length {}",
                last, total_length
            )));
        }
    }

    Ok(())
}
