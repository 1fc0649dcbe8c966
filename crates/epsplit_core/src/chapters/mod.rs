//! Chapter document handling.
//!
//! This module covers the chapter side of the splitter:
//!
//! - **Model**: [`ChapterDocument`] with ordered [`Chapter`] entries
//! - **Extraction**: read chapter XML from an MKV file via mkvextract
//! - **Codec**: decode/encode the Matroska chapter XML format that
//!   mkvextract produces and mkvmerge consumes
//!
//! Chapter order is the source timeline order. All downstream episode
//! logic is positional; chapter UIDs are carried as opaque payload.

mod codec;
mod extract;
mod types;

pub use codec::{decode, encode};
pub use extract::{extract_chapter_xml, extract_chapters};
pub use types::{Chapter, ChapterDisplay, ChapterDocument, ChapterError};
