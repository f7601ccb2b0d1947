use std::{fmt, io};

use thiserror::Error;

/// Kind of quoting defect found by the strict decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// A quoted field runs to the end of the line without a closing quote.
    UnterminatedQuote,
    /// Characters between a closing quote and the next separator.
    TrailingCharacters,
    /// A quote character inside an unquoted field.
    BareQuote,
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedKind::UnterminatedQuote => write!(f, "unterminated quoted field"),
            MalformedKind::TrailingCharacters => {
                write!(f, "unexpected characters after closing quote")
            }
            MalformedKind::BareQuote => write!(f, "quote inside unquoted field"),
        }
    }
}

/// Quoting defect reported by the tokenizer, positioned within a single line.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at column {column}")]
pub struct QuotingError {
    /// 0-based byte offset of the offending character.
    pub column: usize,
    pub kind: MalformedKind,
}

#[derive(Error, Debug)]
/// Codec error
pub enum CodecError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed quoting on line {line}: {kind} at column {column}")]
    MalformedQuoting {
        line: usize,
        column: usize,
        kind: MalformedKind,
    },
}

impl CodecError {
    pub(crate) fn from_quoting(line: usize, error: QuotingError) -> Self {
        CodecError::MalformedQuoting {
            line,
            column: error.column,
            kind: error.kind,
        }
    }
}
