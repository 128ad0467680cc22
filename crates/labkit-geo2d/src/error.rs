//! Error types for figure input and document output.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors arising while reading figures from text or saving a document.
#[derive(Debug)]
pub enum GeoError {
    /// The input ran out before a required value was read.
    UnexpectedEnd {
        /// What was being read.
        expected: &'static str,
    },
    /// A token could not be parsed as a number.
    InvalidNumber {
        /// The offending token.
        token: String,
        /// What was being read.
        expected: &'static str,
    },
    /// Writing the document failed.
    Io(io::Error),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of input, expected {expected}")
            }
            Self::InvalidNumber { token, expected } => {
                write!(f, "invalid number '{token}' for {expected}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl Error for GeoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GeoError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
