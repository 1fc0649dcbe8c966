//! Episode derivation from chapter structure.
//!
//! A multi-episode container typically alternates long "main content"
//! chapters (episode bodies) with short filler chapters (recaps,
//! previews, intros). This module re-derives episode boundaries from
//! that duration pattern:
//!
//! - [`boundary`] classifies chapters by duration threshold and scans
//!   for fall-off transitions that close an episode
//! - [`project`] lifts one chapter range into a fresh, relabeled
//!   per-episode document

mod boundary;
mod project;

pub use boundary::{classify_main_content, find_episode_ranges, EpisodeError, EpisodeRange};
pub use project::project_episode;
