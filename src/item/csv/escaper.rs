//! Field escaper for the write direction.

use super::tokenizer::{QUOTE, SEPARATOR};

/// Returns `true` if `field` must be enclosed in quotes.
///
/// A field is quoted if and only if it contains a comma or a double quote.
pub fn needs_quoting(field: &str) -> bool {
    field.bytes().any(|b| b == SEPARATOR || b == QUOTE)
}

/// Appends `field` to `out`, quoting and doubling inner quotes when needed.
pub fn escape_field(field: &str, out: &mut String) {
    if !needs_quoting(field) {
        out.push_str(field);
        return;
    }

    out.reserve(field.len() + 2);
    out.push('"');
    for (i, part) in field.split('"').enumerate() {
        if i > 0 {
            out.push_str("\"\"");
        }
        out.push_str(part);
    }
    out.push('"');
}

/// Encodes a row of fields into `out` as one CSV line, without terminator.
///
/// `out` is cleared first so a single buffer can be reused across rows.
///
/// # Examples
///
/// ```
/// use csv_line_codec::item::csv::escaper::encode_fields;
///
/// let mut line = String::new();
/// encode_fields(["a", "b,c", r#"He said "hi""#, ""], &mut line);
///
/// assert_eq!(line, r#"a,"b,c","He said ""hi""","#);
/// ```
pub fn encode_fields<I, S>(fields: I, out: &mut String)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    out.clear();
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        escape_field(field.as_ref(), out);
    }
}
