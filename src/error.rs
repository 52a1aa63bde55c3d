//! Error types for the logic CAD tools
//!
//! [`CadError`] collects the errors of every pipeline so that the binaries
//! and callers composing several stages can use a single `Result` type.

use std::fmt;
use std::io;

use crate::kiss::{KissError, KissReadError};
use crate::pla::{PLAError, PLAReadError, PLAWriteError};

/// The main error type of the crate
#[derive(Debug)]
pub enum CadError {
    /// Malformed or inconsistent state table
    Kiss(KissError),

    /// Malformed or inconsistent truth table
    PLA(PLAError),

    /// The table has more inputs than the exhaustive algorithms accept
    ///
    /// Minterm expansion and ROBDD construction enumerate `2^n` assignments,
    /// so the number of inputs is bounded by a configurable limit.
    TooManyInputs {
        /// Number of inputs in the table
        inputs: usize,
        /// Configured limit
        max: usize,
    },

    /// IO error wrapper
    Io(io::Error),
}

impl fmt::Display for CadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CadError::Kiss(err) => write!(f, "KISS format error: {}", err),
            CadError::PLA(err) => write!(f, "PLA format error: {}", err),
            CadError::TooManyInputs { inputs, max } => write!(
                f,
                "Table has {} inputs, exceeding the limit of {}",
                inputs, max
            ),
            CadError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CadError::Kiss(err) => Some(err),
            CadError::PLA(err) => Some(err),
            CadError::Io(err) => Some(err),
            CadError::TooManyInputs { .. } => None,
        }
    }
}

impl From<io::Error> for CadError {
    fn from(err: io::Error) -> Self {
        CadError::Io(err)
    }
}

impl From<KissError> for CadError {
    fn from(err: KissError) -> Self {
        CadError::Kiss(err)
    }
}

impl From<KissReadError> for CadError {
    fn from(err: KissReadError) -> Self {
        match err {
            KissReadError::Kiss(e) => CadError::Kiss(e),
            KissReadError::Io(e) => CadError::Io(e),
        }
    }
}

impl From<PLAError> for CadError {
    fn from(err: PLAError) -> Self {
        CadError::PLA(err)
    }
}

impl From<PLAReadError> for CadError {
    fn from(err: PLAReadError) -> Self {
        match err {
            PLAReadError::PLA(e) => CadError::PLA(e),
            PLAReadError::Io(e) => CadError::Io(e),
        }
    }
}

impl From<PLAWriteError> for CadError {
    fn from(err: PLAWriteError) -> Self {
        match err {
            PLAWriteError::Io(e) => CadError::Io(e),
        }
    }
}

impl From<CadError> for io::Error {
    fn from(err: CadError) -> Self {
        match err {
            CadError::Io(io_err) => io_err,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
