//! Error types for arithmetic coding.

use thiserror::Error;

/// Error variants for arithmetic coding operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Provided probability is invalid (e.g., negative or non-finite).
    #[error("invalid probability: {0}")]
    InvalidProbability(f64),

    /// Requested bit width cannot be represented by the finite-precision model.
    #[error("invalid precision: {0} bits (expected 2..=62)")]
    InvalidPrecision(u32),

    /// Boundary table does not partition `[0, scale)`.
    #[error("invalid boundary table: {0}")]
    InvalidTable(String),

    /// Histogram has no mass to build a table from.
    #[error("histogram is empty")]
    EmptyHistogram,

    /// A symbol does not index into the boundary table.
    #[error("symbol {symbol} out of range for table of {len} symbols")]
    SymbolOutOfRange {
        /// The offending symbol.
        symbol: usize,
        /// Number of symbols in the table.
        len: usize,
    },

    /// Narrowing produced an empty interval (`a >= b`).
    #[error("interval collapsed at symbol position {position}")]
    MalformedInterval {
        /// Index into the input sequence where the interval collapsed.
        position: usize,
    },

    /// No symbol interval contains the decoder's target value.
    #[error("no symbol matches the input after {} decoded symbols", decoded.len())]
    DecodeMismatch {
        /// Symbols decoded before the mismatch.
        decoded: Vec<usize>,
    },

    /// A decoder guard tripped before the terminator was seen.
    #[error("decode incomplete after {} symbols", decoded.len())]
    IncompleteDecode {
        /// Symbols decoded before the guard tripped.
        decoded: Vec<usize>,
    },

    /// A character other than `'0'` or `'1'` in a bit string.
    #[error("invalid bit {found:?} at index {index}")]
    InvalidBit {
        /// Character position in the string.
        index: usize,
        /// The character found.
        found: char,
    },
}

impl Error {
    /// Symbols recovered before a decode failure, if any were.
    pub fn partial(&self) -> Option<&[usize]> {
        match self {
            Error::DecodeMismatch { decoded } | Error::IncompleteDecode { decoded } => {
                Some(decoded)
            }
            _ => None,
        }
    }
}

/// A specialized Result type for arithmetic coding operations.
pub type Result<T> = std::result::Result<T, Error>;
