use std::{
    cell::{Cell, RefCell},
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    core::{
        item::{ItemWriter, ItemWriterResult},
        row::Row,
    },
    error::CodecError,
};

use super::escaper::encode_fields;

/// Line terminator appended after every encoded row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terminator {
    /// `\n`
    #[default]
    LF,
    /// `\r\n`
    CRLF,
}

impl Terminator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Terminator::LF => "\n",
            Terminator::CRLF => "\r\n",
        }
    }
}

/// A CSV row writer that encodes one row per line.
///
/// Every row is encoded into an internal line buffer, then written to the
/// sink together with the configured terminator in a single `write_all`.
/// The writer holds no buffer of its own between rows, so a failing sink is
/// reported by the call that wrote to it. Wrap the sink in a `BufWriter` for
/// throughput; [`CsvRowWriterBuilder::from_path`] does so.
///
/// An empty row and a row holding a single empty field both encode to an
/// empty line, which [`CsvRowReader::read_row`](super::csv_reader::CsvRowReader::read_row)
/// reports as "no row"; a `while read_row(..)` loop stops there and never
/// sees the rows written after it.
///
/// # Examples
///
/// ```
/// use csv_line_codec::core::row::Row;
/// use csv_line_codec::item::csv::csv_writer::CsvRowWriterBuilder;
///
/// let writer = CsvRowWriterBuilder::new().from_writer(vec![]);
///
/// let mut row = Row::from_fields(["1", "Smith, John", r#"5'10""#]);
/// writer.write_row(&mut row).unwrap();
/// assert_eq!(row.line_text(), r#"1,"Smith, John","5'10""""#);
///
/// writer.write_fields(&["2", "Doe"]).unwrap();
///
/// let data = String::from_utf8(writer.into_inner()).unwrap();
/// assert_eq!(data, "1,\"Smith, John\",\"5'10\"\"\"\n2,Doe\n");
/// ```
pub struct CsvRowWriter<W: Write> {
    sink: RefCell<W>,
    /// Encoded line buffer, reused between rows
    line: RefCell<String>,
    terminator: Terminator,
    rows_written: Cell<usize>,
}

impl<W: Write> CsvRowWriter<W> {
    /// Encodes `row`, stores the text on the row, and writes it as one line.
    ///
    /// # Errors
    /// Returns `CodecError::Io` if the sink fails. The row's line text is
    /// updated before the write is attempted.
    pub fn write_row(&self, row: &mut Row) -> ItemWriterResult {
        let mut line = self.line.borrow_mut();
        encode_fields(row.fields(), &mut line);
        row.set_line_text(&line);
        self.emit(&mut line)
    }

    /// Encodes and writes a row given as a plain field slice.
    pub fn write_fields<S: AsRef<str>>(&self, fields: &[S]) -> ItemWriterResult {
        let mut line = self.line.borrow_mut();
        encode_fields(fields, &mut line);
        self.emit(&mut line)
    }

    /// Number of rows successfully handed to the sink.
    pub fn rows_written(&self) -> usize {
        self.rows_written.get()
    }

    pub fn terminator(&self) -> Terminator {
        self.terminator
    }

    /// Unwraps the writer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }

    fn emit(&self, line: &mut String) -> ItemWriterResult {
        trace!("Writing line {}: {}", self.rows_written.get() + 1, line);
        line.push_str(self.terminator.as_str());
        self.sink.borrow_mut().write_all(line.as_bytes())?;
        self.rows_written.set(self.rows_written.get() + 1);
        Ok(())
    }
}

impl<W: Write> ItemWriter<Row> for CsvRowWriter<W> {
    /// Writes a borrowed row. Unlike [`write_row`](CsvRowWriter::write_row),
    /// the row's line text is left as it is.
    fn write(&self, item: &Row) -> ItemWriterResult {
        self.write_fields(item.fields())
    }

    /// Flush the underlying sink.
    ///
    /// If there was a problem writing to the underlying sink, then an error
    /// is returned.
    fn flush(&self) -> ItemWriterResult {
        self.sink.borrow_mut().flush()?;
        Ok(())
    }
}

/// A builder for configuring CSV row writing.
///
/// # Default Configuration
///
/// - Terminator: [`Terminator::LF`]
#[derive(Default)]
pub struct CsvRowWriterBuilder {
    terminator: Terminator,
}

impl CsvRowWriterBuilder {
    pub fn new() -> CsvRowWriterBuilder {
        CsvRowWriterBuilder {
            terminator: Terminator::LF,
        }
    }

    /// Sets the line terminator written after each row.
    ///
    /// ```
    /// use csv_line_codec::item::csv::csv_writer::{CsvRowWriterBuilder, Terminator};
    ///
    /// let writer = CsvRowWriterBuilder::new()
    ///     .terminator(Terminator::CRLF)
    ///     .from_writer(vec![]);
    /// writer.write_fields(&["a", "b"]).unwrap();
    /// assert_eq!(writer.into_inner(), b"a,b\r\n");
    /// ```
    pub fn terminator(mut self, terminator: Terminator) -> CsvRowWriterBuilder {
        self.terminator = terminator;
        self
    }

    pub fn from_writer<W: Write>(self, wtr: W) -> CsvRowWriter<W> {
        CsvRowWriter {
            sink: RefCell::new(wtr),
            line: RefCell::new(String::new()),
            terminator: self.terminator,
            rows_written: Cell::new(0),
        }
    }

    /// Creates (or truncates) the file at `path` and writes rows to it
    /// through a `BufWriter`. Call `flush` before dropping to observe errors.
    ///
    /// # Errors
    /// Returns `CodecError::Io` if the file cannot be created.
    pub fn from_path<P: AsRef<Path>>(
        self,
        path: P,
    ) -> Result<CsvRowWriter<BufWriter<File>>, CodecError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        debug!("Writing CSV rows to {}", path.display());
        Ok(self.from_writer(BufWriter::new(file)))
    }
}
