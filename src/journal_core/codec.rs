//! CSV line codec for journal rows.
//!
//! The dialect is deliberately small: fields containing a comma, a double
//! quote or a newline are quoted, inner quotes are doubled, and the decoder is
//! lenient about text that follows a closing quote. Records never span lines;
//! a quoted newline is written but will not be reassembled on read.

use super::JournalEntry;
use crate::constants::FIELD_COUNT;
use std::borrow::Cow;

/// Quotes a field if it contains `,`, `"` or `\n`, doubling any inner quotes.
///
/// # Examples
///
/// ```
/// use gentleday::journal_core::codec::escape;
///
/// assert_eq!(escape("plain"), "plain");
/// assert_eq!(escape("tea, toast"), "\"tea, toast\"");
/// assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
/// ```
pub fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Encodes an entry as a single CSV line, without the line terminator.
pub fn encode(entry: &JournalEntry) -> String {
    let mood = entry.mood.map(|m| m.to_string()).unwrap_or_default();
    format!(
        "{},{},{},{}",
        escape(&entry.timestamp),
        escape(&entry.intention),
        mood,
        escape(&entry.gratitude)
    )
}

/// Splits a line into its raw fields, unescaping quoted sections.
///
/// Returns every field found, which may be more or fewer than four.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::with_capacity(FIELD_COUNT);
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
    }

    fields.push(current);
    fields
}

/// Decodes a line into exactly four fields.
///
/// Short rows are padded with empty strings; fields past the fourth are dropped.
///
/// # Examples
///
/// ```
/// use gentleday::journal_core::codec::decode;
///
/// let fields = decode("2024-06-10 08:00,\"Rest, then run\"");
/// assert_eq!(fields[1], "Rest, then run");
/// assert_eq!(fields[2], "");
/// assert_eq!(fields[3], "");
/// ```
pub fn decode(line: &str) -> [String; 4] {
    let mut fields = split_fields(line).into_iter();
    std::array::from_fn(|_| fields.next().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal_core::Mood;

    fn entry(ts: &str, intention: &str, mood: Option<u8>, gratitude: &str) -> JournalEntry {
        JournalEntry {
            timestamp: ts.to_string(),
            intention: intention.to_string(),
            mood: mood.and_then(Mood::new),
            gratitude: gratitude.to_string(),
        }
    }

    #[test]
    fn test_escape_leaves_simple_fields_unquoted() {
        assert!(matches!(escape("Be kind"), Cow::Borrowed("Be kind")));
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_escape_quotes_special_characters() {
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("line\nbreak"), "\"line\nbreak\"");
        assert_eq!(escape("\""), "\"\"\"\"");
    }

    #[test]
    fn test_encode_layout() {
        let e = entry("2024-06-10 08:00", "Slow down", Some(4), "Sunshine");
        assert_eq!(encode(&e), "2024-06-10 08:00,Slow down,4,Sunshine");
    }

    #[test]
    fn test_encode_absent_mood_is_empty_field() {
        let e = entry("2024-06-10 08:00", "Slow down", None, "");
        assert_eq!(encode(&e), "2024-06-10 08:00,Slow down,,");
    }

    #[test]
    fn test_encode_escapes_free_text() {
        let e = entry("2024-06-10 08:00", "Say \"no\", kindly", Some(2), "Friends, family");
        assert_eq!(
            encode(&e),
            "2024-06-10 08:00,\"Say \"\"no\"\", kindly\",2,\"Friends, family\""
        );
    }

    #[test]
    fn test_round_trip_plain_and_escaped() {
        let cases = vec![
            entry("2024-06-10 08:00", "Breathe", Some(3), "Rain"),
            entry("2024-06-10 08:00", "", None, ""),
            entry("2024-06-10 08:00", "a,b,c", Some(1), "\"quoted\""),
            entry("2024-06-10 08:00", "it's \"fine\", really", Some(5), ",,,"),
        ];
        for e in cases {
            let line = encode(&e);
            assert_eq!(JournalEntry::decode(&line), e, "round trip of {:?}", line);
        }
    }

    #[test]
    fn test_split_fields_counts() {
        assert_eq!(split_fields(""), vec![""]);
        assert_eq!(split_fields("a"), vec!["a"]);
        assert_eq!(split_fields("a,,b,"), vec!["a", "", "b", ""]);
        assert_eq!(split_fields("1,2,3,4,5").len(), 5);
    }

    #[test]
    fn test_split_fields_doubled_quote_inside_quotes() {
        assert_eq!(split_fields("\"a\"\"b\",c"), vec!["a\"b", "c"]);
    }

    #[test]
    fn test_split_fields_text_after_closing_quote_is_kept() {
        assert_eq!(split_fields("\"ab\"cd,e"), vec!["abcd", "e"]);
    }

    #[test]
    fn test_split_fields_quote_mid_field_enters_quoted_mode() {
        assert_eq!(split_fields("ab\"c,d\"e,f"), vec!["abc,de", "f"]);
    }

    #[test]
    fn test_split_fields_unterminated_quote_runs_to_end() {
        assert_eq!(split_fields("x,\"open, never closed"), vec!["x", "open, never closed"]);
    }

    #[test]
    fn test_decode_pads_short_rows() {
        let fields = decode("2024-06-10 08:00");
        assert_eq!(fields, ["2024-06-10 08:00".to_string(), String::new(), String::new(), String::new()]);
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let fields = decode("2024-06-10 08:00,Rest,3,Tea,extra,more");
        assert_eq!(fields[3], "Tea");
    }

    #[test]
    fn test_decode_unicode_text() {
        let fields = decode("2024-06-10 08:00,Soyez doux ✨,4,\"café, croissant\"");
        assert_eq!(fields[1], "Soyez doux ✨");
        assert_eq!(fields[3], "café, croissant");
    }
}
