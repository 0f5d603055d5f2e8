//! Shared types for the kjv-vault converter and tools that consume its output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

// =====================================================
// Record Types
// =====================================================

/// One accepted verse, ready to be emitted as a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    /// Canonical book name (e.g. "Song of Solomon")
    pub book: String,
    /// 1-based position in canonical order (1..=66)
    pub book_index: u8,
    pub chapter: u32,
    pub verse: u32,
    /// Running position of the verse within its book, across chapters
    pub ordinal_verse: u32,
    /// Verse body, already trimmed
    pub text: String,
    pub translation: String,
}

impl VerseRecord {
    /// "{book} {chapter}:{verse}"
    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book, self.chapter, self.verse)
    }

    /// Number of whitespace-separated tokens in the verse text
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

// =====================================================
// Run Statistics
// =====================================================

/// Counters for one conversion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Notes successfully written
    pub written: usize,
    /// Records rejected during extraction
    pub skipped: usize,
    /// Records that passed validation but could not be written
    pub errors: usize,
}

impl RunStats {
    pub fn one_written() -> Self {
        Self {
            written: 1,
            ..Default::default()
        }
    }

    pub fn one_error() -> Self {
        Self {
            errors: 1,
            ..Default::default()
        }
    }

    pub fn total(&self) -> usize {
        self.written + self.skipped + self.errors
    }
}

impl Add for RunStats {
    type Output = RunStats;

    fn add(self, rhs: RunStats) -> RunStats {
        RunStats {
            written: self.written + rhs.written,
            skipped: self.skipped + rhs.skipped,
            errors: self.errors + rhs.errors,
        }
    }
}

impl AddAssign for RunStats {
    fn add_assign(&mut self, rhs: RunStats) {
        *self = *self + rhs;
    }
}

/// Final report of a completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    #[serde(flatten)]
    pub stats: RunStats,
    /// Absolute path of the output root
    pub output: PathBuf,
}

impl RunSummary {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[done] Written: {} | Skipped: {} | Errors: {} | Output: {}",
            self.stats.written,
            self.stats.skipped,
            self.stats.errors,
            self.output.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str) -> VerseRecord {
        VerseRecord {
            book: "1 John".to_string(),
            book_index: 62,
            chapter: 4,
            verse: 8,
            ordinal_verse: 72,
            text: text.to_string(),
            translation: "KJV".to_string(),
        }
    }

    #[test]
    fn test_reference_format() {
        assert_eq!(record("God is love.").reference(), "1 John 4:8");
    }

    #[test]
    fn test_word_count_splits_on_any_whitespace() {
        assert_eq!(record("He that loveth not\tknoweth\n not God").word_count(), 7);
        assert_eq!(record("Jesus wept.").word_count(), 2);
    }

    #[test]
    fn test_stats_merge() {
        let mut stats = RunStats::default();
        stats += RunStats::one_written();
        stats += RunStats::one_written();
        stats += RunStats::one_error();
        stats += RunStats {
            skipped: 4,
            ..Default::default()
        };
        assert_eq!(
            stats,
            RunStats {
                written: 2,
                skipped: 4,
                errors: 1
            }
        );
        assert_eq!(stats.total(), 7);
    }

    #[test]
    fn test_summary_display_and_json() {
        let summary = RunSummary {
            stats: RunStats {
                written: 3,
                skipped: 1,
                errors: 0,
            },
            output: PathBuf::from("/vault/Bible"),
        };
        assert_eq!(
            summary.to_string(),
            "[done] Written: 3 | Skipped: 1 | Errors: 0 | Output: /vault/Bible"
        );

        let json: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
        assert_eq!(json["written"], 3);
        assert_eq!(json["skipped"], 1);
        assert_eq!(json["errors"], 0);
        assert_eq!(json["output"], "/vault/Bible");
    }
}
