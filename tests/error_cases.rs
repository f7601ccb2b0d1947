mod common;

use std::io::{self, ErrorKind};

use common::{MockFile, init_logger};
use csv_line_codec::{
    core::{
        item::{ItemReader, ItemWriter},
        row::Row,
    },
    error::{CodecError, MalformedKind},
    item::csv::{
        csv_reader::CsvRowReaderBuilder, csv_writer::CsvRowWriterBuilder,
        tokenizer::QuotingMode,
    },
};
use tempfile::tempdir;

#[test]
fn failing_sink_should_surface_on_the_failing_write() {
    let mut file = MockFile::default();
    file.expect_write()
        .times(1)
        .returning(|_| Err(io::Error::other("disk full")));

    let writer = CsvRowWriterBuilder::new().from_writer(file);
    let mut row = Row::from_fields(["a", "b"]);

    let result = writer.write_row(&mut row);

    match result {
        Err(CodecError::Io(error)) => assert_eq!(error.to_string(), "disk full"),
        other => panic!("expected an I/O error, got {other:?}"),
    }
    assert_eq!(row.line_text(), "a,b");
    assert_eq!(writer.rows_written(), 0);
}

#[test]
fn failing_flush_should_surface() {
    let mut file = MockFile::default();
    file.expect_write().returning(|buf| Ok(buf.len()));
    file.expect_flush()
        .returning(|| Err(io::Error::new(ErrorKind::BrokenPipe, "closed")));

    let writer = CsvRowWriterBuilder::new().from_writer(file);
    writer.write_fields(&["x"]).unwrap();

    let result = ItemWriter::<Row>::flush(&writer);

    assert!(matches!(result, Err(CodecError::Io(_))));
    assert_eq!(writer.rows_written(), 1);
}

#[test]
fn failing_source_should_surface_and_leave_row_untouched() {
    let mut file = MockFile::default();
    file.expect_read()
        .returning(|_| Err(io::Error::other("bad sector")));

    let reader = CsvRowReaderBuilder::new().from_reader(file);
    let mut row = Row::from_fields(["keep"]);

    let result = reader.read_row(&mut row);

    assert!(matches!(result, Err(CodecError::Io(_))));
    assert_eq!(row, ["keep"]);
    assert!(ItemReader::<Row>::read(&reader).is_err());
}

#[test]
fn missing_input_file_should_be_an_error() {
    let dir = tempdir().unwrap();

    let result = CsvRowReaderBuilder::new().from_path(dir.path().join("missing.csv"));

    assert!(matches!(result, Err(CodecError::Io(ref e)) if e.kind() == ErrorKind::NotFound));
}

#[test]
fn output_in_missing_directory_should_be_an_error() {
    let dir = tempdir().unwrap();

    let result = CsvRowWriterBuilder::new().from_path(dir.path().join("nope").join("out.csv"));

    assert!(matches!(result, Err(CodecError::Io(_))));
}

#[test]
fn lenient_reader_should_accept_malformed_quoting() {
    init_logger();
    let data = "\"abc\n\"a\"x,b\na\"b,c\n";
    let reader = CsvRowReaderBuilder::new().from_reader(data.as_bytes());
    let mut row = Row::new();

    assert!(reader.read_row(&mut row).unwrap());
    assert_eq!(row, ["abc"]);

    assert!(reader.read_row(&mut row).unwrap());
    assert_eq!(row, ["a", "b"]);

    assert!(reader.read_row(&mut row).unwrap());
    assert_eq!(row, ["a\"b", "c"]);
}

#[test]
fn strict_reader_should_reject_each_malformed_line() {
    let cases = [
        ("x,\"abc", 2, MalformedKind::UnterminatedQuote),
        ("\"a\"x,b", 3, MalformedKind::TrailingCharacters),
        ("a\"b,c", 1, MalformedKind::BareQuote),
    ];

    for (input, expected_column, expected_kind) in cases {
        let data = format!("ok\n{input}\n");
        let reader = CsvRowReaderBuilder::new()
            .quoting(QuotingMode::Strict)
            .from_reader(data.as_bytes());
        let mut row = Row::new();
        assert!(reader.read_row(&mut row).unwrap());

        match reader.read_row(&mut row) {
            Err(CodecError::MalformedQuoting { line, column, kind }) => {
                assert_eq!(line, 2);
                assert_eq!(column, expected_column);
                assert_eq!(kind, expected_kind);
            }
            other => panic!("expected malformed quoting for {input:?}, got {other:?}"),
        }
        assert_eq!(row, ["ok"]);
    }
}

#[test]
fn strict_reader_should_continue_after_a_rejected_line() {
    let reader = CsvRowReaderBuilder::new()
        .quoting(QuotingMode::Strict)
        .from_reader("\"open\nfine,\"quoted\"\n".as_bytes());
    let mut row = Row::new();

    assert!(reader.read_row(&mut row).is_err());
    assert!(reader.read_row(&mut row).unwrap());
    assert_eq!(row, ["fine", "quoted"]);
}
