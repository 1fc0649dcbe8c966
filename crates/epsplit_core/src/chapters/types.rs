//! Chapter types and error definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::timecode::{Timecode, TimecodeError};
use crate::tools::ToolError;

/// Display metadata for a chapter: label plus IETF language tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterDisplay {
    /// Display label (e.g. "Chapter 3").
    pub string: String,
    /// IETF BCP 47 language tag (e.g. "en").
    pub language: String,
}

impl ChapterDisplay {
    pub fn new(string: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            string: string.into(),
            language: language.into(),
        }
    }
}

/// One named point-range in the source timeline.
///
/// Start and end are [`Timecode`] values, so they are canonicalized on
/// every write site by construction. The end is expected to be at or
/// after the start, but that is not validated: a malformed pair simply
/// yields a negative duration, which classifies as filler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Identifier from the source container. Assumed unique, treated
    /// as opaque payload.
    pub uid: u64,
    pub start: Timecode,
    pub end: Timecode,
    pub display: ChapterDisplay,
}

impl Chapter {
    pub fn new(
        uid: u64,
        start: impl Into<Timecode>,
        end: impl Into<Timecode>,
        display: ChapterDisplay,
    ) -> Self {
        Self {
            uid,
            start: start.into(),
            end: end.into(),
            display,
        }
    }

    /// Chapter duration in seconds (`end - start`).
    pub fn duration_seconds(&self) -> Result<f64, TimecodeError> {
        Ok(self.end.seconds()? - self.start.seconds()?)
    }
}

/// An ordered chapter sequence under a single edition.
///
/// Built once by decoding mkvextract output, consumed read-only. Each
/// derived episode gets a fresh document; nothing is mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChapterDocument {
    pub chapters: Vec<Chapter>,
}

impl ChapterDocument {
    pub fn from_chapters(chapters: Vec<Chapter>) -> Self {
        Self { chapters }
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chapter> {
        self.chapters.iter()
    }
}

/// Errors from chapter extraction and (de)serialization.
#[derive(Debug, thiserror::Error)]
pub enum ChapterError {
    /// The chapter XML lacks the expected structure.
    #[error("Malformed chapter document: {0}")]
    MalformedDocument(String),

    /// The source file has no chapters to extract.
    #[error("No chapters found in source")]
    NoChapters,

    /// The input file does not exist.
    #[error("Input file not found: {0}")]
    FileNotFound(PathBuf),

    /// A timecode in the document could not be interpreted.
    #[error(transparent)]
    Timecode(#[from] TimecodeError),

    /// The extraction tool failed.
    #[error(transparent)]
    Tool(#[from] ToolError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chapter_normalizes_timecodes_on_construction() {
        let chapter = Chapter::new(
            7,
            "00:06:00.000000000",
            "00:12:40.500000000",
            ChapterDisplay::new("Part 2", "en"),
        );
        assert_eq!(chapter.start.as_str(), "00:06:00");
        assert_eq!(chapter.end.as_str(), "00:12:40.5");
    }

    #[test]
    fn duration_is_end_minus_start() {
        let chapter = Chapter::new(
            1,
            "00:00:30",
            "00:07:10",
            ChapterDisplay::new("Body", "en"),
        );
        assert_eq!(chapter.duration_seconds().unwrap(), 400.0);
    }

    #[test]
    fn inverted_times_yield_negative_duration() {
        let chapter = Chapter::new(
            1,
            "00:07:10",
            "00:00:30",
            ChapterDisplay::new("Broken", "en"),
        );
        assert_eq!(chapter.duration_seconds().unwrap(), -400.0);
    }
}
