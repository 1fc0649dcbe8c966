//! End-to-end pipeline tests: decode -> inference -> projection ->
//! encode, on a realistic two-episode chapter document.

use epsplit_core::chapters::{decode, encode};
use epsplit_core::episodes::{find_episode_ranges, project_episode, EpisodeError};

/// A two-episode container: each episode is a long body chapter
/// followed by a short preview; the second body is followed by a
/// short credits chapter.
const TWO_EPISODE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE Chapters SYSTEM "matroskachapters.dtd">
<Chapters>
  <EditionEntry>
    <ChapterAtom>
      <ChapterUID>1001</ChapterUID>
      <ChapterTimeStart>00:00:00.000000000</ChapterTimeStart>
      <ChapterTimeEnd>00:06:40.000000000</ChapterTimeEnd>
      <ChapterDisplay>
        <ChapterString>Episode 1</ChapterString>
        <ChapterLanguage>jpn</ChapterLanguage>
      </ChapterDisplay>
    </ChapterAtom>
    <ChapterAtom>
      <ChapterUID>1002</ChapterUID>
      <ChapterTimeStart>00:06:40.000000000</ChapterTimeStart>
      <ChapterTimeEnd>00:07:10.000000000</ChapterTimeEnd>
      <ChapterDisplay>
        <ChapterString>Preview</ChapterString>
        <ChapterLanguage>jpn</ChapterLanguage>
      </ChapterDisplay>
    </ChapterAtom>
    <ChapterAtom>
      <ChapterUID>1003</ChapterUID>
      <ChapterTimeStart>00:07:10.000000000</ChapterTimeStart>
      <ChapterTimeEnd>00:14:00.000000000</ChapterTimeEnd>
      <ChapterDisplay>
        <ChapterString>Episode 2</ChapterString>
        <ChapterLanguage>jpn</ChapterLanguage>
      </ChapterDisplay>
    </ChapterAtom>
    <ChapterAtom>
      <ChapterUID>1004</ChapterUID>
      <ChapterTimeStart>00:14:00.000000000</ChapterTimeStart>
      <ChapterTimeEnd>00:14:25.500000000</ChapterTimeEnd>
      <ChapterDisplay>
        <ChapterString>Credits</ChapterString>
        <ChapterLanguage>jpn</ChapterLanguage>
      </ChapterDisplay>
    </ChapterAtom>
  </EditionEntry>
</Chapters>"#;

#[test]
fn full_pipeline_derives_two_relabeled_episodes() {
    let doc = decode(TWO_EPISODE_XML).unwrap();
    assert_eq!(doc.len(), 4);

    let ranges = find_episode_ranges(&doc, 360.0, 1).unwrap();
    assert_eq!(ranges.len(), 2);

    assert_eq!((ranges[0].start_index, ranges[0].end_index), (0, 1));
    assert_eq!(ranges[0].start_time.as_str(), "00:00:00");
    assert_eq!(ranges[0].end_time.as_str(), "00:07:10");

    assert_eq!((ranges[1].start_index, ranges[1].end_index), (2, 3));
    assert_eq!(ranges[1].start_time.as_str(), "00:07:10");
    assert_eq!(ranges[1].end_time.as_str(), "00:14:25.5");

    let episode1 = project_episode(&doc, &ranges[0]).unwrap();
    let episode2 = project_episode(&doc, &ranges[1]).unwrap();

    // Relabeled per episode, language forced, UIDs preserved
    assert_eq!(episode1.chapters[0].display.string, "Chapter 1");
    assert_eq!(episode1.chapters[1].display.string, "Chapter 2");
    assert_eq!(episode2.chapters[0].display.string, "Chapter 1");
    assert_eq!(episode2.chapters[1].display.string, "Chapter 2");
    assert_eq!(episode1.chapters[0].uid, 1001);
    assert_eq!(episode2.chapters[0].uid, 1003);
    for chapter in episode1.iter().chain(episode2.iter()) {
        assert_eq!(chapter.display.language, "en");
    }

    // Encoded episode documents round-trip through the decoder
    let reparsed = decode(&encode(&episode2)).unwrap();
    assert_eq!(reparsed.len(), 2);
    assert_eq!(reparsed.chapters[1].end.as_str(), "00:14:25.5");
    assert_eq!(reparsed.chapters[0].display.string, "Chapter 1");
}

#[test]
fn every_chapter_lands_in_exactly_one_episode() {
    let doc = decode(TWO_EPISODE_XML).unwrap();
    let ranges = find_episode_ranges(&doc, 360.0, 1).unwrap();

    let mut covered = vec![0usize; doc.len()];
    for range in &ranges {
        for index in range.start_index..=range.end_index {
            covered[index] += 1;
        }
    }
    assert_eq!(covered, vec![1, 1, 1, 1]);
}

#[test]
fn oversized_trailing_count_fails_the_run() {
    let doc = decode(TWO_EPISODE_XML).unwrap();
    let err = find_episode_ranges(&doc, 360.0, 2).unwrap_err();
    assert!(matches!(err, EpisodeError::RangeOutOfBounds { .. }));
}
