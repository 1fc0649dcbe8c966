//! Episode boundary inference.
//!
//! The scan is order-sensitive and deliberately simple: a boundary is
//! a main-content chapter immediately followed by a non-main chapter.
//! Each boundary closes an episode whose range extends a configurable
//! number of trailing chapters past the boundary position.

use thiserror::Error;

use crate::chapters::ChapterDocument;
use crate::timecode::{Timecode, TimecodeError};

/// Errors from boundary inference.
#[derive(Error, Debug)]
pub enum EpisodeError {
    /// A computed range extends past the end of the chapter sequence.
    /// Not clamped: a silently truncated episode is worse than an
    /// error asking for a smaller trailing-chapter count.
    #[error(
        "Episode range ends at chapter index {end_index} but the last chapter index is {last_index}; \
         reduce the additional-chapters count"
    )]
    RangeOutOfBounds { end_index: usize, last_index: usize },

    /// A chapter timecode could not be interpreted as seconds.
    #[error(transparent)]
    Timecode(#[from] TimecodeError),
}

/// One derived episode: an inclusive chapter-index range plus the raw
/// timecodes delimiting it in the source timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeRange {
    /// Index of the first chapter of the episode.
    pub start_index: usize,
    /// Index of the last chapter of the episode (inclusive).
    pub end_index: usize,
    /// Start timecode of the chapter at `start_index`.
    pub start_time: Timecode,
    /// End timecode of the chapter at `end_index`.
    pub end_time: Timecode,
}

/// Classify every chapter as main content or filler.
///
/// A chapter is main content when its duration meets the threshold
/// (inclusive). The result is positional, aligned with the document's
/// chapter order.
pub fn classify_main_content(
    doc: &ChapterDocument,
    threshold_secs: f64,
) -> Result<Vec<bool>, TimecodeError> {
    doc.iter()
        .map(|chapter| Ok(chapter.duration_seconds()? >= threshold_secs))
        .collect()
}

/// Compute the episode ranges for a chapter sequence.
///
/// Scans positions `i` with companion `j = i + 1`. A boundary fires at
/// `i` when chapter `i` is main content and chapter `j` exists and is
/// not. The final chapter can never produce a boundary: a trailing
/// main-content chapter closes no episode.
///
/// Each boundary at `i` closes the range `[start, i + extra_chapters]`
/// (inclusive); the next range starts right after. Every position is
/// examined, including positions inside a just-closed range.
///
/// Pure function of its inputs; no I/O.
pub fn find_episode_ranges(
    doc: &ChapterDocument,
    threshold_secs: f64,
    extra_chapters: usize,
) -> Result<Vec<EpisodeRange>, EpisodeError> {
    let is_main = classify_main_content(doc, threshold_secs)?;
    let count = doc.len();

    let mut ranges = Vec::new();
    let mut start_index = 0usize;

    for i in 0..count {
        let j = i + 1;
        if is_main[i] && j < count && !is_main[j] {
            let end_index = i + extra_chapters;
            if end_index >= count {
                return Err(EpisodeError::RangeOutOfBounds {
                    end_index,
                    last_index: count - 1,
                });
            }

            ranges.push(EpisodeRange {
                start_index,
                end_index,
                start_time: doc.chapters[start_index].start.clone(),
                end_time: doc.chapters[end_index].end.clone(),
            });
            start_index = end_index + 1;
        }
    }

    Ok(ranges)
}
