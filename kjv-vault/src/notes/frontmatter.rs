//! Generate YAML frontmatter and note bodies for verse notes.
//!
//! Hand-rolled YAML (no serde_yaml): the key set and order are fixed, so a
//! line-per-key writer keeps the output byte-stable across runs.

use kjv_vault_types::VerseRecord;

/// Frontmatter keys, in the order they are written
pub const FRONTMATTER_KEYS: [&str; 12] = [
    "book",
    "chapter",
    "verse",
    "ordinal_verse",
    "ref",
    "translation",
    "genre",
    "word_count",
    "topics",
    "cross_references",
    "grammar_tags",
    "thematic_tags",
];

/// Generate the frontmatter block (including both `---` fences) for a verse
pub fn generate_frontmatter(record: &VerseRecord) -> String {
    let mut lines = Vec::with_capacity(FRONTMATTER_KEYS.len() + 2);
    lines.push("---".to_string());
    lines.push(format!("book: {}", quote(&record.book)));
    lines.push(format!("chapter: {}", record.chapter));
    lines.push(format!("verse: {}", record.verse));
    lines.push(format!("ordinal_verse: {}", record.ordinal_verse));
    lines.push(format!("ref: {}", quote(&record.reference())));
    lines.push(format!("translation: {}", quote(&record.translation)));
    // Placeholders, filled in later by hand or by other tools
    lines.push("genre: \"\"".to_string());
    lines.push(format!("word_count: {}", record.word_count()));
    lines.push("topics: []".to_string());
    lines.push("cross_references: []".to_string());
    lines.push("grammar_tags: []".to_string());
    lines.push("thematic_tags: []".to_string());
    lines.push("---".to_string());

    lines.join("\n")
}

/// Full note content: frontmatter, a blank line, the verse text
pub fn render_note(record: &VerseRecord) -> String {
    format!("{}\n\n{}\n", generate_frontmatter(record), record.text)
}

/// Double-quoted YAML scalar
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(book: &str, chapter: u32, verse: u32, ordinal: u32, text: &str) -> VerseRecord {
        VerseRecord {
            book: book.to_string(),
            book_index: crate::canon::book_index(book).unwrap_or(0),
            chapter,
            verse,
            ordinal_verse: ordinal,
            text: text.to_string(),
            translation: "KJV".to_string(),
        }
    }

    /// Split content into (frontmatter_yaml, body)
    fn split_frontmatter(content: &str) -> (String, String) {
        let after_open = content.strip_prefix("---\n").unwrap();
        let close_idx = after_open.find("\n---\n").unwrap();
        let yaml = after_open[..close_idx].to_string();
        let body = after_open[close_idx + 5..].to_string();
        (yaml, body)
    }

    #[test]
    fn test_render_note_exact() {
        let text = "In the beginning God created the heaven and the earth.";
        let note = render_note(&record("Genesis", 1, 1, 1, text));
        let expected = "---
book: \"Genesis\"
chapter: 1
verse: 1
ordinal_verse: 1
ref: \"Genesis 1:1\"
translation: \"KJV\"
genre: \"\"
word_count: 10
topics: []
cross_references: []
grammar_tags: []
thematic_tags: []
---

In the beginning God created the heaven and the earth.
";
        assert_eq!(note, expected);
    }

    #[test]
    fn test_keys_in_fixed_order() {
        let note = render_note(&record("Song of Solomon", 2, 1, 18, "I am the rose of Sharon"));
        let (yaml, body) = split_frontmatter(&note);
        let keys: Vec<&str> = yaml
            .lines()
            .map(|line| line.split_once(':').unwrap().0)
            .collect();
        assert_eq!(keys, FRONTMATTER_KEYS);
        assert_eq!(body, "\nI am the rose of Sharon\n");
        assert!(yaml.contains("ref: \"Song of Solomon 2:1\""));
        assert!(yaml.contains("word_count: 6"));
    }

    #[test]
    fn test_text_with_colons_and_quotes_stays_in_body() {
        let text = "And he said: \"Let there be light\"";
        let note = render_note(&record("Genesis", 1, 3, 3, text));
        let (yaml, body) = split_frontmatter(&note);
        assert_eq!(yaml.lines().count(), 12);
        assert_eq!(body.trim(), text);
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("Genesis"), "\"Genesis\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote("a\\b"), "\"a\\\\b\"");
        assert_eq!(quote("line\nbreak"), "\"line\\nbreak\"");
        assert_eq!(quote("bell\u{7}"), "\"bell\\u0007\"");
        assert_eq!(quote("Genesis 1:1"), "\"Genesis 1:1\"");
    }

    #[test]
    fn test_translation_is_quoted() {
        let mut verse = record("Jude", 1, 25, 25, "Amen.");
        verse.translation = "KJV: \"1769\"".to_string();
        let fm = generate_frontmatter(&verse);
        assert!(fm.contains("translation: \"KJV: \\\"1769\\\"\""));
    }
}
