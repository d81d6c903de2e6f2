//! # Record Format
//!
//! Every note occupies exactly one physical line of the store file:
//!
//! ```text
//! id|||title|||category|||content|||timestamp
//! ```
//!
//! Line feeds inside `content` are written as the two characters `\n`, and
//! the whole line is then passed through [`xor`] before it hits the disk.
//! Reading reverses both steps.
//!
//! Neither the separator nor a pre-existing literal `\n` in the text is
//! escaped. A field containing `|||` shifts the fields of its record on the
//! next read, and a literal `\n` in content comes back as a line break.
//!
//! With key 13, U+0007 (BEL) becomes a line feed and U+0000 a carriage
//! return after the XOR pass. A note holding either would split its line,
//! so [`to_store_line`] refuses it instead of writing it.
//!
//! The XOR pass only keeps the file from being readable at a glance. It is
//! not encryption.

use crate::model::Note;
use thiserror::Error;

pub const SEPARATOR: &str = "|||";
pub const NEWLINE_ESCAPE: &str = "\\n";
pub const XOR_KEY: u16 = 13;

const FIELD_COUNT: usize = 5;

/// Why a store line could not become a [`Note`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected 5 fields, found {found}")]
    MissingFields { found: usize },

    #[error("text contains a control character that would split the stored line")]
    SplitsLine,
}

/// A store line dropped while reading, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line_number: usize,
    pub reason: RecordError,
}

/// XORs every UTF-16 code unit of `text` with `key`.
///
/// Applying it twice with the same key returns the input. Keys below
/// `0x400` never move a unit across the surrogate boundaries, so the lossy
/// decode never substitutes anything.
pub fn xor(text: &str, key: u16) -> String {
    let units: Vec<u16> = text.encode_utf16().map(|unit| unit ^ key).collect();
    String::from_utf16_lossy(&units)
}

pub fn escape_newlines(text: &str) -> String {
    text.replace('\n', NEWLINE_ESCAPE)
}

pub fn unescape_newlines(text: &str) -> String {
    text.replace(NEWLINE_ESCAPE, "\n")
}

/// Serializes a note to its plain (not yet obfuscated) line.
pub fn encode_record(note: &Note) -> String {
    [
        note.id.as_str(),
        note.title.as_str(),
        note.category.as_str(),
        escape_newlines(&note.content).as_str(),
        note.timestamp.as_str(),
    ]
    .join(SEPARATOR)
}

/// Parses a plain line. Fields past the fifth are ignored.
pub fn decode_record(line: &str) -> Result<Note, RecordError> {
    let fields: Vec<&str> = line.split(SEPARATOR).collect();
    if fields.len() < FIELD_COUNT {
        return Err(RecordError::MissingFields {
            found: fields.len(),
        });
    }

    Ok(Note {
        id: fields[0].to_string(),
        title: fields[1].to_string(),
        category: fields[2].to_string(),
        content: unescape_newlines(fields[3]),
        timestamp: fields[4].to_string(),
    })
}

/// The exact text written to the store for `note`, minus the line terminator.
///
/// Fails when the obfuscated line would contain a line terminator.
pub fn to_store_line(note: &Note, key: u16) -> Result<String, RecordError> {
    let line = xor(&encode_record(note), key);
    if line.contains(|c: char| c == '\n' || c == '\r') {
        return Err(RecordError::SplitsLine);
    }
    Ok(line)
}

/// Reverses [`to_store_line`].
pub fn parse_record(store_line: &str, key: u16) -> Result<Note, RecordError> {
    decode_record(&xor(store_line, key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(title: &str, category: &str, content: &str) -> Note {
        Note {
            id: "id-1".into(),
            title: title.into(),
            category: category.into(),
            content: content.into(),
            timestamp: "2024-03-01 09:15:00".into(),
        }
    }

    #[test]
    fn xor_is_self_inverse() {
        for text in ["", "plain ascii", "üñíçødé", "tab\tand\rcr", "emoji 🦀 pair", "|||"] {
            assert_eq!(xor(&xor(text, XOR_KEY), XOR_KEY), text);
        }
    }

    #[test]
    fn xor_hides_the_separator() {
        let line = to_store_line(&note("a", "b", "c"), XOR_KEY).unwrap();
        assert!(!line.contains(SEPARATOR));
        assert!(!line.contains("a|||b"));
    }

    #[test]
    fn xor_matches_known_values() {
        // '|' is 0x7C, 0x7C ^ 0x0D = 0x71
        assert_eq!(xor("|||", XOR_KEY), "qqq");
        assert_eq!(xor("A", XOR_KEY), "L");
    }

    #[test]
    fn escape_roundtrip() {
        for text in ["", "one line", "milk\nbread", "\n\nleading", "trailing\n"] {
            assert_eq!(unescape_newlines(&escape_newlines(text)), text);
        }
    }

    #[test]
    fn escaped_content_has_no_line_feeds() {
        let line = encode_record(&note("t", "c", "line 1\nline 2\nline 3"));
        assert!(!line.contains('\n'));
        assert!(line.contains("line 1\\nline 2\\nline 3"));
    }

    #[test]
    fn literal_escape_token_reads_back_as_line_break() {
        let stored = encode_record(&note("t", "c", "C:\\new"));
        assert_eq!(decode_record(&stored).unwrap().content, "C:\new");
    }

    #[test]
    fn encode_uses_fixed_field_order() {
        let line = encode_record(&note("Title", "cat", "body"));
        assert_eq!(line, "id-1|||Title|||cat|||body|||2024-03-01 09:15:00");
    }

    #[test]
    fn parse_roundtrip() {
        let original = note("Groceries", "personal", "milk\nbread");
        let line = to_store_line(&original, XOR_KEY).unwrap();
        assert_eq!(parse_record(&line, XOR_KEY).unwrap(), original);
    }

    #[test]
    fn empty_fields_survive() {
        let original = note("", "", "");
        let line = to_store_line(&original, XOR_KEY).unwrap();
        assert_eq!(parse_record(&line, XOR_KEY).unwrap(), original);
    }

    #[test]
    fn short_lines_are_rejected() {
        assert_eq!(
            decode_record("id|||title|||cat"),
            Err(RecordError::MissingFields { found: 3 })
        );
        assert_eq!(
            decode_record("garbage"),
            Err(RecordError::MissingFields { found: 1 })
        );
    }

    #[test]
    fn extra_fields_are_ignored() {
        let parsed = decode_record("id|||a|||b|||c|||ts|||extra").unwrap();
        assert_eq!(parsed.title, "a");
        assert_eq!(parsed.timestamp, "ts");
    }

    #[test]
    fn characters_that_xor_to_line_terminators_are_refused() {
        for text in ["ding\u{7}dong", "nul\u{0}byte"] {
            assert_eq!(
                to_store_line(&note("t", "c", text), XOR_KEY),
                Err(RecordError::SplitsLine)
            );
            assert_eq!(
                to_store_line(&note(text, "c", ""), XOR_KEY),
                Err(RecordError::SplitsLine)
            );
        }
        // Other control characters stay on one line.
        let line = to_store_line(&note("tab\tbell", "c", "esc\u{1b}"), XOR_KEY).unwrap();
        assert!(!line.contains(['\n', '\r']));
    }

    #[test]
    fn separator_in_title_shifts_fields() {
        let stored = encode_record(&note("a|||b", "cat", "body"));
        let parsed = decode_record(&stored).unwrap();
        assert_eq!(parsed.title, "a");
        assert_eq!(parsed.category, "b");
        assert_eq!(parsed.content, "cat");
    }
}
