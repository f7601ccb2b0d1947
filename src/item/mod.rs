#[cfg(feature = "logger")]
/// This module provides a logger item writer, useful for debugging purposes.
pub mod logger;

/// This module provides the CSV row reader and writer.
pub mod csv;
