//! Per-episode chapter projection.

use crate::chapters::{ChapterDisplay, ChapterDocument};

use super::boundary::{EpisodeError, EpisodeRange};

/// Language tag written on every projected chapter display.
const EPISODE_CHAPTER_LANGUAGE: &str = "en";

/// Project one episode's chapters into a fresh document.
///
/// Extracts the inclusive chapter sub-sequence for `range` and
/// relabels each chapter `Chapter 1`, `Chapter 2`, ... in sub-sequence
/// order, with the language tag forced to `en`. UIDs and timecodes are
/// carried through unchanged.
///
/// The source document is never mutated; every output chapter is a
/// fresh value. Ranges that extend past the chapter sequence are
/// rejected rather than truncated.
pub fn project_episode(
    doc: &ChapterDocument,
    range: &EpisodeRange,
) -> Result<ChapterDocument, EpisodeError> {
    if range.end_index >= doc.len() {
        return Err(EpisodeError::RangeOutOfBounds {
            end_index: range.end_index,
            last_index: doc.len().saturating_sub(1),
        });
    }

    let chapters = doc.chapters[range.start_index..=range.end_index]
        .iter()
        .enumerate()
        .map(|(k, chapter)| {
            let mut projected = chapter.clone();
            projected.display = ChapterDisplay::new(
                format!("Chapter {}", k + 1),
                EPISODE_CHAPTER_LANGUAGE,
            );
            projected
        })
        .collect();

    Ok(ChapterDocument::from_chapters(chapters))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapters::Chapter;
    use crate::timecode::Timecode;

    fn sample_doc() -> ChapterDocument {
        ChapterDocument::from_chapters(vec![
            Chapter::new(11, "00:00:00", "00:06:40", ChapterDisplay::new("Body", "eng")),
            Chapter::new(12, "00:06:40", "00:07:10", ChapterDisplay::new("Preview", "eng")),
            Chapter::new(13, "00:07:10", "00:07:30", ChapterDisplay::new("Recap", "eng")),
            Chapter::new(14, "00:07:30", "00:14:20", ChapterDisplay::new("Body", "eng")),
        ])
    }

    fn range(start_index: usize, end_index: usize) -> EpisodeRange {
        EpisodeRange {
            start_index,
            end_index,
            start_time: Timecode::new("00:00:00"),
            end_time: Timecode::new("00:00:00"),
        }
    }

    #[test]
    fn relabels_in_subsequence_order() {
        let doc = sample_doc();
        let episode = project_episode(&doc, &range(1, 3)).unwrap();

        assert_eq!(episode.len(), 3);
        assert_eq!(episode.chapters[0].display.string, "Chapter 1");
        assert_eq!(episode.chapters[1].display.string, "Chapter 2");
        assert_eq!(episode.chapters[2].display.string, "Chapter 3");
        for chapter in episode.iter() {
            assert_eq!(chapter.display.language, "en");
        }
    }

    #[test]
    fn uids_and_times_are_carried_through() {
        let doc = sample_doc();
        let episode = project_episode(&doc, &range(1, 2)).unwrap();

        assert_eq!(episode.chapters[0].uid, 12);
        assert_eq!(episode.chapters[0].start.as_str(), "00:06:40");
        assert_eq!(episode.chapters[1].uid, 13);
        assert_eq!(episode.chapters[1].end.as_str(), "00:07:30");
    }

    #[test]
    fn source_document_is_untouched() {
        let doc = sample_doc();
        let before = doc.clone();
        let _ = project_episode(&doc, &range(0, 3)).unwrap();
        assert_eq!(doc, before);
    }

    #[test]
    fn out_of_range_projection_is_rejected() {
        let doc = sample_doc();
        let err = project_episode(&doc, &range(2, 4)).unwrap_err();
        assert!(matches!(err, EpisodeError::RangeOutOfBounds { .. }));
    }
}
