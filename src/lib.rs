#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # csv-line-codec

 A line-oriented CSV codec. It converts rows (ordered sequences of text
 fields) to and from RFC-4180-style CSV lines: comma-separated fields,
 double-quote enclosure, embedded commas and doubled quotes.

 ## Core Concepts

- **Row:** a caller-owned buffer holding the fields of one record and the
  text of the line it was decoded from or encoded to. It is meant to be
  reused across reads.
- **CsvRowReader:** pulls one line at a time from any `Read` source and
  decodes it into a `Row`.
- **CsvRowWriter:** encodes a `Row` and writes it as one line to any `Write`
  sink.
- **ItemReader / ItemWriter:** the traits both components implement, for
  callers that want owned rows one by one.

 ## Features

| **Feature** | **Description**                                           |
|-------------|-----------------------------------------------------------|
| logger      | Enables a logger `ItemWriter`, useful for debugging purposes |
| full        | Enables all available features                            |

 ## Getting Started

```rust
use csv_line_codec::{
    core::row::Row,
    error::CodecError,
    item::csv::{csv_reader::CsvRowReaderBuilder, csv_writer::CsvRowWriterBuilder},
};

fn main() -> Result<(), CodecError> {
    let csv = "Column0,Column1,\"Column2, with comma\",Column3\n";

    let reader = CsvRowReaderBuilder::new().from_reader(csv.as_bytes());
    let writer = CsvRowWriterBuilder::new().from_writer(Vec::new());

    let mut row = Row::new();
    while reader.read_row(&mut row)? {
        assert_eq!(row, ["Column0", "Column1", "Column2, with comma", "Column3"]);
        writer.write_row(&mut row)?;
    }

    assert_eq!(writer.into_inner(), csv.as_bytes());
    Ok(())
}
```

 ## Leniency

 By default the reader never rejects a line because of its quoting: an
 unterminated quoted field runs to the end of the line and characters between
 a closing quote and the next comma are dropped. Use
 `CsvRowReaderBuilder::quoting(QuotingMode::Strict)` to turn those cases into
 `CodecError::MalformedQuoting`.

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.
 */

/// Core types: the row buffer and the item traits
pub mod core;

/// Error types for codec operations
pub mod error;

#[doc(inline)]
pub use error::*;

/// Set of items readers / writers (the CSV codec and a logger)
pub mod item;
