//! File operations for verse notes
//!
//! Derives note paths, sanitizes path components, and writes notes so that a
//! note file is either complete or absent.

use crate::canon;
use crate::error::WriteError;
use kjv_vault_types::VerseRecord;
use regex::Regex;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static UNSAFE_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9 .\-]").unwrap());

/// Drop everything outside `[A-Za-z0-9 .-]` and trim
pub fn sanitize_filename(name: &str) -> String {
    UNSAFE_FILENAME_CHARS.replace_all(name, "").trim().to_string()
}

/// `<root>/<NN> - <Book>/<Book> <chapter>/<Book> <chapter>-<verse>.md`
pub fn note_path(root: &Path, record: &VerseRecord, pad: usize) -> PathBuf {
    let book_dir = sanitize_filename(&canon::folder_name(record.book_index, &record.book, pad));
    let chapter_dir = sanitize_filename(&format!("{} {}", record.book, record.chapter));
    let file_name = sanitize_filename(&format!(
        "{} {}-{}.md",
        record.book, record.chapter, record.verse
    ));
    root.join(book_dir).join(chapter_dir).join(file_name)
}

/// Write a note file (creates parent directories as needed).
///
/// Content goes to a hidden sibling first and is renamed into place; on
/// failure the sibling is removed and nothing is left at `path`.
pub fn write_note(path: &Path, content: &str) -> Result<(), WriteError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let tmp = temp_path(path);
    write_then_rename(&tmp, path, content).map_err(|source| {
        let _ = fs::remove_file(&tmp);
        WriteError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn write_then_rename(tmp: &Path, path: &Path, content: &str) -> io::Result<()> {
    let mut file = fs::File::create(tmp)?;
    file.write_all(content.as_bytes())?;
    drop(file);
    fs::rename(tmp, path)
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(book: &str, book_index: u8, chapter: u32, verse: u32) -> VerseRecord {
        VerseRecord {
            book: book.to_string(),
            book_index,
            chapter,
            verse,
            ordinal_verse: 1,
            text: "text".to_string(),
            translation: "KJV".to_string(),
        }
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("Song of Solomon 2-1.md"), "Song of Solomon 2-1.md");
        assert_eq!(sanitize_filename("01 - Genesis"), "01 - Genesis");
        assert_eq!(sanitize_filename(" Gen/esis:1?*.md "), "Genesis1.md");
    }

    #[test]
    fn test_note_path_layout() {
        let root = Path::new("/vault/Bible");
        assert_eq!(
            note_path(root, &record("Genesis", 1, 1, 2), 2),
            PathBuf::from("/vault/Bible/01 - Genesis/Genesis 1/Genesis 1-2.md")
        );
        assert_eq!(
            note_path(root, &record("1 Corinthians", 46, 13, 13), 2),
            PathBuf::from(
                "/vault/Bible/46 - 1 Corinthians/1 Corinthians 13/1 Corinthians 13-13.md"
            )
        );
        assert_eq!(
            note_path(root, &record("Revelation", 66, 22, 21), 3),
            PathBuf::from("/vault/Bible/066 - Revelation/Revelation 22/Revelation 22-21.md")
        );
    }

    #[test]
    fn test_write_note_creates_dirs_and_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("01 - Genesis/Genesis 1/Genesis 1-1.md");

        write_note(&path, "first").unwrap();
        write_note(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");

        // No temporary sibling left behind
        let siblings: Vec<_> = fs::read_dir(path.parent().unwrap()).unwrap().collect();
        assert_eq!(siblings.len(), 1);
    }

    #[test]
    fn test_write_note_reports_blocked_directory() {
        let dir = tempdir().unwrap();
        // A regular file where the book folder should be
        fs::write(dir.path().join("02 - Exodus"), "not a dir").unwrap();
        let path = dir.path().join("02 - Exodus/Exodus 1/Exodus 1-1.md");

        let err = write_note(&path, "content").unwrap_err();
        assert!(matches!(err, WriteError::CreateDir { .. }));
        assert!(!path.exists());
    }
}
