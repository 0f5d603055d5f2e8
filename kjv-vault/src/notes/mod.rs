//! Verse notes: Obsidian-compatible markdown files with YAML frontmatter
//!
//! One note per verse, laid out as book folder / chapter folder / verse file.

pub mod file_ops;
pub mod frontmatter;

pub use file_ops::{note_path, write_note};
pub use frontmatter::render_note;
