//! Line-oriented CSV encoding and decoding.
//!
//! Every call handles exactly one physical line: the reader parses one line
//! into a [`Row`](crate::core::row::Row), the writer turns one row into one
//! line. Quoted fields cannot span lines.
//!
//! # Module Architecture
//!
//! 1. **tokenizer**: the read-direction state machine. Pure, no I/O.
//! 2. **escaper**: the write-direction quoting rules. Pure, no I/O.
//! 3. **CsvRowReader**: pulls lines from any `Read` source and decodes them
//!    into a caller-owned row buffer.
//! 4. **CsvRowWriter**: encodes rows and writes them, one line each, to any
//!    `Write` sink.
//!
//! Both I/O components follow the builder pattern and implement the core
//! `ItemReader` / `ItemWriter` traits.
//!
//! # Format
//!
//! - Separator `,`, quote `"`, nothing else is configurable
//! - A field is quoted if and only if it contains `,` or `"`
//! - Inside quotes, `"` is written `""`
//! - The line terminator belongs to the sink (`\n` or `\r\n`); the reader
//!   accepts both
//! - `[]` and `[""]` encode to an empty line, which reads back as "no row"
//!   and ends a `while read_row(..)` loop
//!
//! # Examples
//!
//! ```
//! use csv_line_codec::core::row::Row;
//! use csv_line_codec::item::csv::csv_reader::CsvRowReaderBuilder;
//! use csv_line_codec::item::csv::csv_writer::CsvRowWriterBuilder;
//!
//! let writer = CsvRowWriterBuilder::new().from_writer(vec![]);
//! let mut row = Row::from_fields(["", "x", ""]);
//! writer.write_row(&mut row).unwrap();
//!
//! let mut row = Row::from_fields([r#"He said "hi""#, "a,b"]);
//! writer.write_row(&mut row).unwrap();
//!
//! let buffer = writer.into_inner();
//! let reader = CsvRowReaderBuilder::new().from_reader(buffer.as_slice());
//!
//! let mut row = Row::new();
//! while reader.read_row(&mut row).unwrap() {
//!     println!("{:?}", row.fields());
//! }
//! assert_eq!(row, [r#"He said "hi""#, "a,b"]);
//! ```

/// A module providing facilities for reading CSV rows.
pub mod csv_reader;

/// A module providing facilities for writing CSV rows.
pub mod csv_writer;

pub mod escaper;

pub mod tokenizer;
