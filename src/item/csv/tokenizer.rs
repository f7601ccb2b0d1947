//! Field tokenizer for the read direction.
//!
//! A line is consumed left to right in a single pass. Each field starts in
//! one of two states, picked by its first character:
//!
//! | State    | Entry                | Exit                                                 | Emits                          |
//! |----------|----------------------|------------------------------------------------------|--------------------------------|
//! | UNQUOTED | first char is not `"` | comma or end of line                                | the raw substring              |
//! | QUOTED   | first char is `"`     | a `"` not followed by `"`, or end of line           | the substring, `""` collapsed  |
//!
//! After a field, everything up to and including the next comma is skipped.
//! A consumed comma always opens another field, so `a,` yields `["a", ""]`.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{MalformedKind, QuotingError};

pub(crate) const SEPARATOR: u8 = b',';
pub(crate) const QUOTE: u8 = b'"';

/// How the decoder treats quoting that the encoder would never produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuotingMode {
    /// Unterminated quotes run to the end of the line, stray characters after
    /// a closing quote are dropped and bare quotes are kept verbatim.
    #[default]
    Lenient,
    /// Any of the above is reported as a [`QuotingError`].
    Strict,
}

/// Decodes `line` into `fields`, reusing the slots already in the vector.
///
/// Existing strings are overwritten in order, new ones are appended once the
/// old slots run out, and the vector is finally truncated to the number of
/// fields found on this line. Returns that number.
///
/// An empty line yields no fields and leaves `fields` empty. On error the
/// contents of `fields` are unspecified; callers that need the old contents
/// should decode into a scratch buffer.
///
/// # Examples
///
/// ```
/// use csv_line_codec::item::csv::tokenizer::{decode_line, QuotingMode};
///
/// let mut fields = vec![String::from("stale"); 8];
/// let count = decode_line(
///     r#"Column0,Column1,"Column2, with comma",Column3"#,
///     &mut fields,
///     QuotingMode::Lenient,
/// )
/// .unwrap();
///
/// assert_eq!(count, 4);
/// assert_eq!(fields, ["Column0", "Column1", "Column2, with comma", "Column3"]);
/// ```
pub fn decode_line(
    line: &str,
    fields: &mut Vec<String>,
    mode: QuotingMode,
) -> Result<usize, QuotingError> {
    let bytes = line.as_bytes();
    let mut pos = 0;
    let mut count = 0;

    if bytes.is_empty() {
        fields.clear();
        return Ok(0);
    }

    loop {
        let slot = next_slot(fields, count);

        // pos == len after a trailing separator: an empty unquoted field
        if pos < bytes.len() && bytes[pos] == QUOTE {
            pos = scan_quoted(line, pos, slot, mode)?;
        } else {
            pos = scan_unquoted(line, pos, slot, mode)?;
        }
        count += 1;

        // Eat up to and including the next separator
        let stray = pos;
        while pos < bytes.len() && bytes[pos] != SEPARATOR {
            pos += 1;
        }
        if pos > stray {
            if mode == QuotingMode::Strict {
                return Err(QuotingError {
                    column: stray,
                    kind: MalformedKind::TrailingCharacters,
                });
            }
            warn!(
                "Dropping {} character(s) after closing quote at column {}",
                pos - stray,
                stray
            );
        }
        if pos >= bytes.len() {
            break;
        }
        pos += 1;
    }

    fields.truncate(count);
    Ok(count)
}

/// Returns the cleared slot at `index`, appending a fresh one if needed.
fn next_slot(fields: &mut Vec<String>, index: usize) -> &mut String {
    if index < fields.len() {
        fields[index].clear();
    } else {
        fields.push(String::new());
    }
    &mut fields[index]
}

/// Scans a quoted field starting at the opening quote at `start`.
///
/// Returns the position just past the closing quote, or the end of the line
/// for an unterminated field.
fn scan_quoted(
    line: &str,
    start: usize,
    out: &mut String,
    mode: QuotingMode,
) -> Result<usize, QuotingError> {
    let bytes = line.as_bytes();
    let mut pos = start + 1;
    let mut chunk = pos;

    while pos < bytes.len() {
        if bytes[pos] == QUOTE {
            out.push_str(&line[chunk..pos]);
            if pos + 1 < bytes.len() && bytes[pos + 1] == QUOTE {
                // Doubled quote, keep one
                out.push('"');
                pos += 2;
                chunk = pos;
                continue;
            }
            return Ok(pos + 1);
        }
        pos += 1;
    }

    if mode == QuotingMode::Strict {
        return Err(QuotingError {
            column: start,
            kind: MalformedKind::UnterminatedQuote,
        });
    }
    warn!("Unterminated quoted field starting at column {}", start);
    out.push_str(&line[chunk..]);
    Ok(pos)
}

/// Scans an unquoted field up to the next separator or the end of the line.
fn scan_unquoted(
    line: &str,
    start: usize,
    out: &mut String,
    mode: QuotingMode,
) -> Result<usize, QuotingError> {
    let bytes = line.as_bytes();
    let mut pos = start;

    while pos < bytes.len() && bytes[pos] != SEPARATOR {
        if bytes[pos] == QUOTE && mode == QuotingMode::Strict {
            return Err(QuotingError {
                column: pos,
                kind: MalformedKind::BareQuote,
            });
        }
        pos += 1;
    }

    out.push_str(&line[start..pos]);
    Ok(pos)
}
