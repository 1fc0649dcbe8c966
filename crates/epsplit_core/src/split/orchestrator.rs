//! The split orchestrator.
//!
//! Drives the whole pipeline for one input file: extract chapters,
//! infer episode ranges, then for each episode project its chapters,
//! write them to a transient file and invoke mkvmerge. Strictly
//! sequential in ascending episode order; a failure splitting episode
//! K aborts before episode K+1, leaving earlier outputs in place.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::chapters::{self, ChapterDocument, ChapterError};
use crate::config::SplitConfig;
use crate::episodes::{find_episode_ranges, project_episode, EpisodeError, EpisodeRange};
use crate::tools::{run_tool, ToolError};

use super::options::MkvmergeSplitBuilder;

/// Callback invoked with the tool name and its arguments before every
/// external invocation.
pub type CommandHook = Box<dyn Fn(&str, &[String])>;

/// Errors from a split run.
#[derive(Error, Debug)]
pub enum SplitError {
    #[error(transparent)]
    Chapter(#[from] ChapterError),

    #[error(transparent)]
    Episode(#[from] EpisodeError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error("Failed to write transient chapters file: {0}")]
    ChaptersFile(#[from] io::Error),
}

/// Build an episode output file name.
///
/// Format: `<series> - SNN ENN.mkv` with zero-padded two-digit season
/// and episode numbers.
pub fn output_file_name(series_name: &str, season_num: u32, episode_num: u32) -> String {
    format!(
        "{} - S{:02} E{:02}.mkv",
        series_name, season_num, episode_num
    )
}

/// Per-input-file split driver.
pub struct SplitOrchestrator {
    config: SplitConfig,
    command_hook: Option<CommandHook>,
}

impl SplitOrchestrator {
    pub fn new(config: SplitConfig) -> Self {
        Self {
            config,
            command_hook: None,
        }
    }

    /// Install a hook observing every external tool invocation.
    pub fn with_command_hook(mut self, hook: CommandHook) -> Self {
        self.command_hook = Some(hook);
        self
    }

    /// Split the input file into per-episode output files.
    ///
    /// Returns the paths of the produced files, in episode order.
    pub fn run(&self, input_path: &Path) -> Result<Vec<PathBuf>, SplitError> {
        let doc = chapters::extract_chapters(input_path)?;
        tracing::info!("Decoded {} chapters from {}", doc.len(), input_path.display());

        let ranges = find_episode_ranges(
            &doc,
            self.config.episode_chapter_threshold,
            self.config.additional_chapters,
        )?;
        tracing::info!("Derived {} episodes", ranges.len());

        let mut outputs = Vec::with_capacity(ranges.len());
        for (offset, range) in ranges.iter().enumerate() {
            let episode_num = self.config.start_episode_num + offset as u32;
            let output_path = self.output_path(input_path, episode_num);

            let episode_doc = project_episode(&doc, range)?;
            self.split_episode(input_path, &output_path, range, &episode_doc)?;

            tracing::info!(
                "Episode {} written to {}",
                episode_num,
                output_path.display()
            );
            outputs.push(output_path);
        }

        Ok(outputs)
    }

    /// Output path for one episode, next to the input file.
    fn output_path(&self, input_path: &Path, episode_num: u32) -> PathBuf {
        let file_name = output_file_name(
            &self.config.series_name,
            self.config.season_num,
            episode_num,
        );
        input_path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(file_name)
    }

    /// Run mkvmerge for one episode.
    fn split_episode(
        &self,
        input_path: &Path,
        output_path: &Path,
        range: &EpisodeRange,
        episode_doc: &ChapterDocument,
    ) -> Result<(), SplitError> {
        with_chapters_file(episode_doc, |chapters_path| {
            let tokens =
                MkvmergeSplitBuilder::new(input_path, output_path, range, chapters_path).build();

            if let Some(ref hook) = self.command_hook {
                hook("mkvmerge", &tokens);
            }

            run_tool("mkvmerge", &tokens)?;
            Ok(())
        })
    }
}

/// Encode a chapter document to a transient file and run `f` with its
/// path. The file is removed when this returns, on success and on
/// failure alike.
fn with_chapters_file<T>(
    doc: &ChapterDocument,
    f: impl FnOnce(&Path) -> Result<T, SplitError>,
) -> Result<T, SplitError> {
    let mut file = tempfile::Builder::new()
        .prefix("epsplit-chapters-")
        .suffix(".xml")
        .tempfile()?;
    file.write_all(chapters::encode(doc).as_bytes())?;
    file.flush()?;

    // NamedTempFile removes the file on drop
    f(file.path())
}
