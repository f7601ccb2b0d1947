use std::{ops::Index, slice};

use serde::{Deserialize, Serialize};

/// One CSV record: an ordered list of text fields plus the line it came from.
///
/// A `Row` is meant to be owned by the caller and reused across decode calls.
/// Decoding overwrites the existing field slots in place, appends when the new
/// line is wider, then truncates to the new width, so a buffer that has grown
/// once does not reallocate its field strings on every line.
///
/// # Examples
///
/// ```
/// use csv_line_codec::core::row::Row;
///
/// let mut row = Row::from_fields(["id", "name"]);
/// row.push("extra");
///
/// assert_eq!(row.len(), 3);
/// assert_eq!(&row[1], "name");
/// assert_eq!(row.line_text(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    fields: Vec<String>,
    line_text: String,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a row from any sequence of string-like fields.
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Row {
            fields: fields.into_iter().map(Into::into).collect(),
            line_text: String::new(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut Vec<String> {
        &mut self.fields
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn push<S: Into<String>>(&mut self, field: S) {
        self.fields.push(field.into());
    }

    /// Removes every field and forgets the line text.
    pub fn clear(&mut self) {
        self.fields.clear();
        self.line_text.clear();
    }

    /// The raw text of the line this row was last decoded from or encoded to.
    pub fn line_text(&self) -> &str {
        &self.line_text
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.fields.iter()
    }

    pub(crate) fn set_line_text(&mut self, text: &str) {
        self.line_text.clear();
        self.line_text.push_str(text);
    }
}

impl Index<usize> for Row {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.fields[index]
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl IntoIterator for Row {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl From<Vec<String>> for Row {
    fn from(fields: Vec<String>) -> Self {
        Row {
            fields,
            line_text: String::new(),
        }
    }
}

impl PartialEq<[&str]> for Row {
    fn eq(&self, other: &[&str]) -> bool {
        self.fields.len() == other.len() && self.fields.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for Row {
    fn eq(&self, other: &[&str; N]) -> bool {
        self == &other[..]
    }
}
