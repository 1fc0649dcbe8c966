//! Chapter XML decoding and encoding.
//!
//! Handles the Matroska chapter XML format as produced by mkvextract
//! and consumed by mkvmerge. Exactly one `EditionEntry` is read; the
//! encoder writes the DOCTYPE declaration mkvmerge's chapter DTD
//! expects and never adds namespace attributes to the root element.

use super::types::{Chapter, ChapterDisplay, ChapterDocument, ChapterError};
use crate::timecode::Timecode;

/// Decode chapter XML into a [`ChapterDocument`].
///
/// Requires the `Chapters` root, one `EditionEntry`, and for every
/// `ChapterAtom` a UID, start, end, and display block with string and
/// language. Anything less is [`ChapterError::MalformedDocument`].
pub fn decode(xml: &str) -> Result<ChapterDocument, ChapterError> {
    let doc = roxmltree::Document::parse_with_options(
        xml,
        roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        },
    )
    .map_err(|e| ChapterError::MalformedDocument(format!("XML parse error: {}", e)))?;

    let root = doc.root_element();
    if root.tag_name().name() != "Chapters" {
        return Err(ChapterError::MalformedDocument(
            "root element must be <Chapters>".to_string(),
        ));
    }

    let edition = root
        .children()
        .find(|n| n.is_element() && n.tag_name().name() == "EditionEntry")
        .ok_or_else(|| {
            ChapterError::MalformedDocument("missing <EditionEntry> element".to_string())
        })?;

    let mut chapters = Vec::new();
    for atom in edition
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "ChapterAtom")
    {
        chapters.push(decode_chapter_atom(&atom)?);
    }

    Ok(ChapterDocument::from_chapters(chapters))
}

fn decode_chapter_atom(atom: &roxmltree::Node) -> Result<Chapter, ChapterError> {
    let mut uid: Option<u64> = None;
    let mut start: Option<Timecode> = None;
    let mut end: Option<Timecode> = None;
    let mut display: Option<ChapterDisplay> = None;

    for child in atom.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "ChapterUID" => {
                let text = element_text(&child, "ChapterUID")?;
                uid = Some(text.parse().map_err(|_| {
                    ChapterError::MalformedDocument(format!(
                        "ChapterUID '{}' is not an integer",
                        text
                    ))
                })?);
            }
            "ChapterTimeStart" => {
                start = Some(Timecode::new(element_text(&child, "ChapterTimeStart")?));
            }
            "ChapterTimeEnd" => {
                end = Some(Timecode::new(element_text(&child, "ChapterTimeEnd")?));
            }
            "ChapterDisplay" => {
                display = Some(decode_chapter_display(&child)?);
            }
            _ => {}
        }
    }

    let missing =
        |field: &str| ChapterError::MalformedDocument(format!("chapter atom missing {}", field));

    Ok(Chapter {
        uid: uid.ok_or_else(|| missing("ChapterUID"))?,
        start: start.ok_or_else(|| missing("ChapterTimeStart"))?,
        end: end.ok_or_else(|| missing("ChapterTimeEnd"))?,
        display: display.ok_or_else(|| missing("ChapterDisplay"))?,
    })
}

fn decode_chapter_display(display: &roxmltree::Node) -> Result<ChapterDisplay, ChapterError> {
    let mut string: Option<String> = None;
    let mut language: Option<String> = None;

    for child in display.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "ChapterString" => string = Some(element_text(&child, "ChapterString")?),
            "ChapterLanguage" => language = Some(element_text(&child, "ChapterLanguage")?),
            _ => {}
        }
    }

    let missing =
        |field: &str| ChapterError::MalformedDocument(format!("chapter display missing {}", field));

    Ok(ChapterDisplay {
        string: string.ok_or_else(|| missing("ChapterString"))?,
        language: language.ok_or_else(|| missing("ChapterLanguage"))?,
    })
}

fn element_text(node: &roxmltree::Node, name: &str) -> Result<String, ChapterError> {
    node.text()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ChapterError::MalformedDocument(format!("empty <{}> element", name)))
}

/// Encode a [`ChapterDocument`] as chapter XML for mkvmerge.
///
/// Output is indented, starts with the XML declaration and the
/// `matroskachapters.dtd` DOCTYPE, and carries no namespace
/// attributes.
pub fn encode(doc: &ChapterDocument) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<!DOCTYPE Chapters SYSTEM \"matroskachapters.dtd\">\n");
    xml.push_str("<Chapters>\n");
    xml.push_str("  <EditionEntry>\n");

    for chapter in &doc.chapters {
        xml.push_str("    <ChapterAtom>\n");
        xml.push_str(&format!(
            "      <ChapterUID>{}</ChapterUID>\n",
            chapter.uid
        ));
        xml.push_str(&format!(
            "      <ChapterTimeStart>{}</ChapterTimeStart>\n",
            chapter.start
        ));
        xml.push_str(&format!(
            "      <ChapterTimeEnd>{}</ChapterTimeEnd>\n",
            chapter.end
        ));
        xml.push_str("      <ChapterDisplay>\n");
        xml.push_str(&format!(
            "        <ChapterString>{}</ChapterString>\n",
            escape_xml(&chapter.display.string)
        ));
        xml.push_str(&format!(
            "        <ChapterLanguage>{}</ChapterLanguage>\n",
            escape_xml(&chapter.display.language)
        ));
        xml.push_str("      </ChapterDisplay>\n");
        xml.push_str("    </ChapterAtom>\n");
    }

    xml.push_str("  </EditionEntry>\n");
    xml.push_str("</Chapters>\n");

    xml
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
