use crate::error::CodecError;

/// Result of a single item read: `Ok(None)` means the source is exhausted.
pub type ItemReaderResult<R> = Result<Option<R>, CodecError>;

pub type ItemWriterResult = Result<(), CodecError>;

/// Pulls items one at a time from an underlying source.
pub trait ItemReader<R> {
    fn read(&self) -> ItemReaderResult<R>;
}

/// Pushes items one at a time to an underlying sink.
pub trait ItemWriter<W> {
    fn write(&self, item: &W) -> ItemWriterResult;

    /// Flush any data held between the writer and its sink.
    fn flush(&self) -> ItemWriterResult {
        Ok(())
    }
}
