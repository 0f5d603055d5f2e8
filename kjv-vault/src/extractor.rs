//! Record extraction: JSON document -> ordered `VerseRecord`s.
//!
//! Accepted document shapes:
//! - `[ {book, chapter, verse, text}, ... ]`
//! - `{ "verses": [ {book, chapter, verse, text}, ... ] }`
//! - `{ "books": [ { name, chapters: [ { chapter, verses: [ {verse, text} ] } ] } ] }`
//! - `{ "<Book>": { "<chapter>": { "<verse>": "<text>" } } }`
//!
//! Every shape is first flattened into flat entries, then each entry is
//! validated on its own. Rejected entries are counted, not fatal, unless no
//! entry survives at all.

use crate::canon;
use crate::error::{FatalError, ValidationError};
use kjv_vault_types::VerseRecord;
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A record the extractor refused, with its position among the flat entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub index: usize,
    pub reason: ValidationError,
}

/// Outcome of extraction: accepted records in encounter order plus rejections
#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<VerseRecord>,
    pub rejected: Vec<Rejection>,
}

impl Extraction {
    /// Number of flat entries seen in the document
    pub fn entries(&self) -> usize {
        self.records.len() + self.rejected.len()
    }

    pub fn skipped(&self) -> usize {
        self.rejected.len()
    }
}

/// Parse raw input bytes and extract verse records
pub fn extract(bytes: &[u8], translation: &str) -> Result<Extraction, FatalError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let document: Value = serde_json::from_slice(bytes)?;
    extract_document(document, translation)
}

/// Extract verse records from an already parsed document
pub fn extract_document(document: Value, translation: &str) -> Result<Extraction, FatalError> {
    let entries = flatten(document)?;
    if entries.is_empty() {
        return Err(FatalError::NoRecords);
    }

    let mut extraction = Extraction::default();
    // Running verse count per book_index, in encounter order
    let mut ordinals: HashMap<u8, u32> = HashMap::new();
    // Coordinates already claimed; each one owns exactly one note path
    let mut seen: HashSet<(u8, u32, u32)> = HashSet::new();

    for (index, entry) in entries.iter().enumerate() {
        let checked = validate(entry).and_then(|valid| {
            if seen.insert((valid.book_index, valid.chapter, valid.verse)) {
                Ok(valid)
            } else {
                Err(ValidationError::Duplicate(format!(
                    "{} {}:{}",
                    valid.book, valid.chapter, valid.verse
                )))
            }
        });
        match checked {
            Ok(valid) => {
                let ordinal = ordinals.entry(valid.book_index).or_insert(0);
                *ordinal += 1;
                extraction.records.push(VerseRecord {
                    book: valid.book.to_string(),
                    book_index: valid.book_index,
                    chapter: valid.chapter,
                    verse: valid.verse,
                    ordinal_verse: *ordinal,
                    text: valid.text,
                    translation: translation.to_string(),
                });
            }
            Err(reason) => {
                log::debug!("[EXTRACT] [skip] entry {}: {}", index, reason);
                extraction.rejected.push(Rejection { index, reason });
            }
        }
    }

    log::info!(
        "[EXTRACT] {} entries: {} accepted, {} rejected",
        extraction.entries(),
        extraction.records.len(),
        extraction.skipped()
    );

    if extraction.records.is_empty() {
        return Err(FatalError::NoUsableRecords {
            rejected: extraction.skipped(),
        });
    }

    Ok(extraction)
}

// =====================================================
// Flattening
// =====================================================

fn flatten(document: Value) -> Result<Vec<Value>, FatalError> {
    match document {
        Value::Array(entries) => Ok(entries),
        Value::Object(mut map) => {
            if let Some(verses) = map.remove("verses") {
                match verses {
                    Value::Array(entries) => Ok(entries),
                    other => Err(FatalError::UnsupportedShape(format!(
                        "`verses` must be an array, found {}",
                        kind(&other)
                    ))),
                }
            } else if let Some(books) = map.remove("books") {
                flatten_books(books)
            } else {
                flatten_nested(map)
            }
        }
        other => Err(FatalError::UnsupportedShape(format!(
            "expected an array or object at the top level, found {}",
            kind(&other)
        ))),
    }
}

/// `{ "books": [ { name, chapters: [ { chapter, verses: [...] } ] } ] }`
fn flatten_books(books: Value) -> Result<Vec<Value>, FatalError> {
    let books = match books {
        Value::Array(books) => books,
        other => {
            return Err(FatalError::UnsupportedShape(format!(
                "`books` must be an array, found {}",
                kind(&other)
            )));
        }
    };

    let mut entries = Vec::new();
    for book in books {
        let Value::Object(mut book) = book else {
            return Err(FatalError::UnsupportedShape(
                "every `books` item must be an object".to_string(),
            ));
        };
        let name = book
            .remove("name")
            .or_else(|| book.remove("book"))
            .unwrap_or(Value::Null);
        let chapters = match book.remove("chapters") {
            Some(Value::Array(chapters)) => chapters,
            _ => {
                return Err(FatalError::UnsupportedShape(format!(
                    "book {} has no `chapters` array",
                    name
                )));
            }
        };

        for chapter in chapters {
            let Value::Object(mut chapter) = chapter else {
                return Err(FatalError::UnsupportedShape(format!(
                    "chapters of book {} must be objects",
                    name
                )));
            };
            let number = chapter.remove("chapter").unwrap_or(Value::Null);
            let verses = match chapter.remove("verses") {
                Some(Value::Array(verses)) => verses,
                _ => {
                    return Err(FatalError::UnsupportedShape(format!(
                        "chapter {} of book {} has no `verses` array",
                        number, name
                    )));
                }
            };

            for verse in verses {
                entries.push(match verse {
                    Value::Object(mut fields) => {
                        fields.entry("book").or_insert_with(|| name.clone());
                        fields.entry("chapter").or_insert_with(|| number.clone());
                        Value::Object(fields)
                    }
                    // Left as-is so it is rejected (and counted) like any bad entry
                    other => other,
                });
            }
        }
    }
    Ok(entries)
}

/// `{ "<Book>": { "<chapter>": { "<verse>": "<text>" } } }`
fn flatten_nested(books: Map<String, Value>) -> Result<Vec<Value>, FatalError> {
    let mut entries = Vec::new();
    for (book, chapters) in books {
        let Value::Object(chapters) = chapters else {
            return Err(FatalError::UnsupportedShape(format!(
                "book `{}` must map chapters to verses",
                book
            )));
        };
        for (chapter, verses) in chapters {
            let Value::Object(verses) = verses else {
                return Err(FatalError::UnsupportedShape(format!(
                    "chapter `{} {}` must map verse numbers to text",
                    book, chapter
                )));
            };
            for (verse, text) in verses {
                let mut fields = Map::new();
                fields.insert("book".to_string(), Value::String(book.clone()));
                fields.insert("chapter".to_string(), Value::String(chapter.clone()));
                fields.insert("verse".to_string(), Value::String(verse));
                fields.insert("text".to_string(), text);
                entries.push(Value::Object(fields));
            }
        }
    }
    Ok(entries)
}

// =====================================================
// Validation
// =====================================================

struct ValidEntry {
    book: &'static str,
    book_index: u8,
    chapter: u32,
    verse: u32,
    text: String,
}

fn validate(entry: &Value) -> Result<ValidEntry, ValidationError> {
    let fields = entry.as_object().ok_or(ValidationError::NotAnObject)?;

    let book = book_field(fields)?;
    let chapter = required(fields, "chapter")?;
    let verse = required(fields, "verse")?;
    let text = required(fields, "text")?;

    let book = match book {
        Value::String(name) => name.trim(),
        other => return Err(ValidationError::UnknownBook(other.to_string())),
    };
    if book.is_empty() {
        return Err(ValidationError::EmptyBook);
    }

    let chapter = positive_int("chapter", chapter)?;
    let verse = positive_int("verse", verse)?;

    let text = match text {
        Value::String(text) => text.trim(),
        other => return Err(ValidationError::InvalidText(other.to_string())),
    };
    if text.is_empty() {
        return Err(ValidationError::EmptyText);
    }

    let (book, book_index) =
        canon::resolve_book(book).ok_or_else(|| ValidationError::UnknownBook(book.to_string()))?;

    Ok(ValidEntry {
        book,
        book_index,
        chapter,
        verse,
        text: text.to_string(),
    })
}

/// `book_name` wins over `book` when it holds a string (some dumps use a numeric `book`)
fn book_field(fields: &Map<String, Value>) -> Result<&Value, ValidationError> {
    match fields.get("book_name") {
        Some(name @ Value::String(_)) => Ok(name),
        _ => required(fields, "book"),
    }
}

fn required<'a>(
    fields: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, ValidationError> {
    fields
        .get(field)
        .filter(|v| !v.is_null())
        .ok_or(ValidationError::MissingField(field))
}

fn positive_int(field: &'static str, value: &Value) -> Result<u32, ValidationError> {
    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => {
            let s = s.trim();
            if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
                s.parse::<u64>().ok()
            } else {
                None
            }
        }
        _ => None,
    };

    parsed
        .filter(|n| *n > 0)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| ValidationError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
