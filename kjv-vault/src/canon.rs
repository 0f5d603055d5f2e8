//! Canonical book order: the fixed 66-book Protestant canon.
//!
//! Book lookup is exact-string against `BOOKS_IN_ORDER`. The only normalization
//! applied is trimming and the fixed `BOOK_ALIASES` table (compact spellings
//! found in common KJV dumps). No case folding, no fuzzy matching.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Number of books in the canon
pub const BOOK_COUNT: usize = 66;

/// Minimum folder prefix width that keeps folder names sorting canonically
pub const MIN_PAD: usize = 2;

#[rustfmt::skip]
pub static BOOKS_IN_ORDER: [&str; BOOK_COUNT] = [
    "Genesis", "Exodus", "Leviticus", "Numbers", "Deuteronomy",
    "Joshua", "Judges", "Ruth", "1 Samuel", "2 Samuel", "1 Kings", "2 Kings",
    "1 Chronicles", "2 Chronicles", "Ezra", "Nehemiah", "Esther",
    "Job", "Psalms", "Proverbs", "Ecclesiastes", "Song of Solomon",
    "Isaiah", "Jeremiah", "Lamentations", "Ezekiel", "Daniel",
    "Hosea", "Joel", "Amos", "Obadiah", "Jonah", "Micah", "Nahum", "Habakkuk",
    "Zephaniah", "Haggai", "Zechariah", "Malachi",
    "Matthew", "Mark", "Luke", "John", "Acts", "Romans", "1 Corinthians", "2 Corinthians",
    "Galatians", "Ephesians", "Philippians", "Colossians", "1 Thessalonians", "2 Thessalonians",
    "1 Timothy", "2 Timothy", "Titus", "Philemon", "Hebrews", "James", "1 Peter", "2 Peter",
    "1 John", "2 John", "3 John", "Jude", "Revelation",
];

/// Compact spellings mapped to their canonical names
pub static BOOK_ALIASES: &[(&str, &str)] = &[
    ("1Samuel", "1 Samuel"),
    ("2Samuel", "2 Samuel"),
    ("1Kings", "1 Kings"),
    ("2Kings", "2 Kings"),
    ("1Chronicles", "1 Chronicles"),
    ("2Chronicles", "2 Chronicles"),
    ("1Corinthians", "1 Corinthians"),
    ("2Corinthians", "2 Corinthians"),
    ("1Thessalonians", "1 Thessalonians"),
    ("2Thessalonians", "2 Thessalonians"),
    ("1Timothy", "1 Timothy"),
    ("2Timothy", "2 Timothy"),
    ("1Peter", "1 Peter"),
    ("2Peter", "2 Peter"),
    ("1John", "1 John"),
    ("2John", "2 John"),
    ("3John", "3 John"),
    ("SongofSolomon", "Song of Solomon"),
    ("SongofSongs", "Song of Solomon"),
    ("Canticles", "Song of Solomon"),
];

static BOOK_INDEX: LazyLock<HashMap<&'static str, u8>> = LazyLock::new(|| {
    BOOKS_IN_ORDER
        .iter()
        .enumerate()
        .map(|(i, name)| (*name, (i + 1) as u8))
        .collect()
});

static ALIAS_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| BOOK_ALIASES.iter().copied().collect());

/// Resolve a raw book name to its canonical name and 1-based index.
///
/// Returns `None` for anything not in the canon or the alias table.
pub fn resolve_book(raw: &str) -> Option<(&'static str, u8)> {
    let trimmed = raw.trim();
    let canonical = ALIAS_INDEX.get(trimmed).copied().unwrap_or(trimmed);
    BOOK_INDEX
        .get_key_value(canonical)
        .map(|(name, index)| (*name, *index))
}

/// 1-based canonical index of an exact canonical name
pub fn book_index(canonical: &str) -> Option<u8> {
    BOOK_INDEX.get(canonical).copied()
}

/// Top-level folder name: "<NN> - <Book>"
pub fn folder_name(book_index: u8, book: &str, pad: usize) -> String {
    format!("{:0width$} - {}", book_index, book, width = pad.max(MIN_PAD))
}
