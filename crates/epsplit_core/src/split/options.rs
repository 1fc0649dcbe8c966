//! mkvmerge command options builder.
//!
//! Builds the command-line tokens for splitting one episode out of the
//! source container with a `parts:` time-range directive.

use std::path::Path;

use crate::episodes::EpisodeRange;

/// Builder for the mkvmerge split command line.
///
/// Generates a list of string tokens ready to pass to mkvmerge. The
/// source container's own chapters are dropped (`--no-chapters`) and
/// replaced with the per-episode chapters file.
pub struct MkvmergeSplitBuilder<'a> {
    input_path: &'a Path,
    output_path: &'a Path,
    range: &'a EpisodeRange,
    chapters_path: &'a Path,
}

impl<'a> MkvmergeSplitBuilder<'a> {
    pub fn new(
        input_path: &'a Path,
        output_path: &'a Path,
        range: &'a EpisodeRange,
        chapters_path: &'a Path,
    ) -> Self {
        Self {
            input_path,
            output_path,
            range,
            chapters_path,
        }
    }

    /// Build the complete mkvmerge token list.
    pub fn build(&self) -> Vec<String> {
        vec![
            "--output".to_string(),
            self.output_path.to_string_lossy().to_string(),
            "--split".to_string(),
            format!("parts:{}-{}", self.range.start_time, self.range.end_time),
            "--chapters".to_string(),
            self.chapters_path.to_string_lossy().to_string(),
            "--no-chapters".to_string(),
            self.input_path.to_string_lossy().to_string(),
        ]
    }
}
