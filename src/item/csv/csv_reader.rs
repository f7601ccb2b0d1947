use std::{
    cell::{Cell, RefCell},
    fs::File,
    io::{self, BufRead, BufReader, ErrorKind, Read},
    mem,
    path::Path,
    str,
};

use log::{debug, trace};

use crate::{
    core::{
        item::{ItemReader, ItemReaderResult},
        row::Row,
    },
    error::CodecError,
};

use super::tokenizer::{QuotingMode, decode_line};

/// A CSV row reader that decodes one physical line per call.
///
/// The reader pulls lines from any source implementing `Read` and parses
/// each of them into a caller-owned [`Row`]. The same row can be passed to
/// [`read_row`](CsvRowReader::read_row) over and over; its field slots are
/// overwritten in place and trimmed to the width of the new line.
///
/// # Implementation Details
///
/// - Uses `RefCell` so that reading only needs `&self`, which keeps the
///   `ItemReader` signature
/// - Strips a trailing `\n` or `\r\n` from each line before decoding
/// - Quoted fields cannot span lines
///
/// # Examples
///
/// ```
/// use csv_line_codec::core::row::Row;
/// use csv_line_codec::item::csv::csv_reader::CsvRowReaderBuilder;
///
/// let data = "id,name\n1,\"Smith, John\"\n";
/// let reader = CsvRowReaderBuilder::new().from_reader(data.as_bytes());
///
/// let mut row = Row::new();
/// assert!(reader.read_row(&mut row).unwrap());
/// assert_eq!(row, ["id", "name"]);
///
/// assert!(reader.read_row(&mut row).unwrap());
/// assert_eq!(row, ["1", "Smith, John"]);
/// assert_eq!(row.line_text(), "1,\"Smith, John\"");
///
/// // Source exhausted, row left as it was
/// assert!(!reader.read_row(&mut row).unwrap());
/// assert_eq!(row, ["1", "Smith, John"]);
/// ```
pub struct CsvRowReader<R> {
    source: RefCell<BufReader<R>>,
    /// Raw line bytes, reused between calls
    line: RefCell<Vec<u8>>,
    /// Scratch fields for strict decoding, so a rejected line leaves the row alone
    scratch: RefCell<Vec<String>>,
    line_number: Cell<usize>,
    quoting: QuotingMode,
}

impl<R: Read> CsvRowReader<R> {
    /// Reads the next line into `row`.
    ///
    /// # Returns
    /// - `Ok(true)` if the line produced at least one field
    /// - `Ok(false)` if the source is exhausted or the line is empty; `row`
    ///   is not modified
    /// - `Err(CodecError::Io)` if the source fails or is not valid UTF-8
    /// - `Err(CodecError::MalformedQuoting)` in strict mode only; `row` is not
    ///   modified
    pub fn read_row(&self, row: &mut Row) -> Result<bool, CodecError> {
        let mut buffer = self.line.borrow_mut();
        if !self.next_line(&mut buffer)? {
            return Ok(false);
        }
        let line = str::from_utf8(&buffer).map_err(|error| {
            io::Error::new(
                ErrorKind::InvalidData,
                format!("line {}: {}", self.line_number.get(), error),
            )
        })?;

        let count = match self.quoting {
            QuotingMode::Lenient => decode_line(line, row.fields_mut(), self.quoting)
                .map_err(|error| CodecError::from_quoting(self.line_number.get(), error))?,
            QuotingMode::Strict => {
                let mut scratch = self.scratch.borrow_mut();
                let count = decode_line(line, &mut scratch, self.quoting)
                    .map_err(|error| CodecError::from_quoting(self.line_number.get(), error))?;
                mem::swap(row.fields_mut(), &mut *scratch);
                count
            }
        };
        row.set_line_text(line);

        trace!("Line {}: decoded {} field(s)", self.line_number.get(), count);
        Ok(count > 0)
    }

    /// Number of physical lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line_number.get()
    }

    pub fn quoting(&self) -> QuotingMode {
        self.quoting
    }

    /// Reads one physical line into `line` without its terminator.
    ///
    /// The line is counted before any UTF-8 check so that line numbers stay
    /// in step with the source. Returns `false` at end of input or on an
    /// empty line.
    fn next_line(&self, line: &mut Vec<u8>) -> Result<bool, CodecError> {
        line.clear();
        let read = self.source.borrow_mut().read_until(b'\n', line)?;
        if read == 0 {
            return Ok(false);
        }
        self.line_number.set(self.line_number.get() + 1);

        if line.ends_with(b"\n") {
            line.pop();
            if line.ends_with(b"\r") {
                line.pop();
            }
        }
        Ok(!line.is_empty())
    }
}

impl<R: Read> ItemReader<Row> for CsvRowReader<R> {
    /// Reads the next row as a freshly allocated [`Row`].
    ///
    /// Stops (`Ok(None)`) at end of input or at the first empty line, the same
    /// condition under which [`read_row`](CsvRowReader::read_row) returns `false`.
    fn read(&self) -> ItemReaderResult<Row> {
        let mut row = Row::new();
        if self.read_row(&mut row)? {
            Ok(Some(row))
        } else {
            Ok(None)
        }
    }
}

/// A builder for configuring CSV row reading.
///
/// # Default Configuration
///
/// - Quoting: [`QuotingMode::Lenient`]
///
/// # Examples
///
/// ```
/// use csv_line_codec::item::csv::csv_reader::CsvRowReaderBuilder;
/// use csv_line_codec::item::csv::tokenizer::QuotingMode;
///
/// let reader = CsvRowReaderBuilder::new()
///     .quoting(QuotingMode::Strict)
///     .from_reader("a,b\n".as_bytes());
/// ```
#[derive(Default)]
pub struct CsvRowReaderBuilder {
    quoting: QuotingMode,
}

impl CsvRowReaderBuilder {
    pub fn new() -> Self {
        Self {
            quoting: QuotingMode::Lenient,
        }
    }

    /// Sets how malformed quoting is handled.
    ///
    /// The lenient default never fails on quoting. `Strict` turns unterminated
    /// quotes, characters after a closing quote and quotes inside unquoted
    /// fields into [`CodecError::MalformedQuoting`].
    pub fn quoting(mut self, quoting: QuotingMode) -> Self {
        self.quoting = quoting;
        self
    }

    /// Creates a `CsvRowReader` over any `Read` source, such as a byte slice,
    /// a `Cursor`, a file or a socket.
    pub fn from_reader<R: Read>(self, rdr: R) -> CsvRowReader<R> {
        CsvRowReader {
            source: RefCell::new(BufReader::new(rdr)),
            line: RefCell::new(Vec::new()),
            scratch: RefCell::new(Vec::new()),
            line_number: Cell::new(0),
            quoting: self.quoting,
        }
    }

    /// Opens `path` and creates a `CsvRowReader` over it.
    ///
    /// # Errors
    /// Returns `CodecError::Io` if the file cannot be opened.
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<CsvRowReader<File>, CodecError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!("Reading CSV rows from {}", path.display());
        Ok(self.from_reader(file))
    }
}
