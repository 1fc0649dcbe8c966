//! Episode splitting via mkvmerge.
//!
//! Thin orchestration over the external tools: builds the per-episode
//! mkvmerge command lines and drives one invocation per derived
//! episode, in order, stopping at the first failure.

mod options;
mod orchestrator;

pub use options::MkvmergeSplitBuilder;
pub use orchestrator::{output_file_name, CommandHook, SplitError, SplitOrchestrator};
