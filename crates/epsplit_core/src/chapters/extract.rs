//! Chapter extraction from MKV files.
//!
//! Uses mkvextract to pull chapter XML out of a Matroska container.

use std::path::Path;

use super::codec;
use super::types::{ChapterDocument, ChapterError};
use crate::tools::run_tool;

/// Extract raw chapter XML from an MKV file.
///
/// Runs `mkvextract <input> chapters -` and returns the XML printed on
/// stdout. An empty result means the file has no chapter metadata.
pub fn extract_chapter_xml(input_path: &Path) -> Result<String, ChapterError> {
    if !input_path.exists() {
        return Err(ChapterError::FileNotFound(input_path.to_path_buf()));
    }

    let args = vec![
        input_path.to_string_lossy().to_string(),
        "chapters".to_string(),
        "-".to_string(),
    ];
    let output = run_tool("mkvextract", &args)?;

    let xml = output.stdout.trim();
    // mkvextract may emit a UTF-8 BOM ahead of the declaration
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);

    if xml.is_empty() {
        return Err(ChapterError::NoChapters);
    }

    Ok(xml.to_string())
}

/// Extract and decode chapters from an MKV file in one step.
pub fn extract_chapters(input_path: &Path) -> Result<ChapterDocument, ChapterError> {
    let xml = extract_chapter_xml(input_path)?;
    codec::decode(&xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonexistent_input_is_reported_before_running_the_tool() {
        let err = extract_chapter_xml(Path::new("/nonexistent/input.mkv")).unwrap_err();
        assert!(matches!(err, ChapterError::FileNotFound(_)));
    }
}
