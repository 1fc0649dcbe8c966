//! epsplit core - chapter-driven episode splitting.
//!
//! This crate contains all business logic with no CLI dependencies:
//! chapter extraction and (de)serialization, episode boundary
//! inference, per-episode chapter projection, and the mkvmerge split
//! orchestration.

pub mod chapters;
pub mod config;
pub mod episodes;
pub mod split;
pub mod timecode;
pub mod tools;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
