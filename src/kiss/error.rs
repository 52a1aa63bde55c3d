//! Error types for KISS state table parsing and validation

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors related to KISS state table format and consistency
///
/// These errors occur when reading a state transition table whose rows are
/// malformed or whose transitions do not describe a complete machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KissError {
    /// A data row does not have the `input current next output` shape
    MalformedRow {
        /// 1-based line number
        line: usize,
        /// Number of whitespace-separated fields found
        fields: usize,
    },
    /// The input column is not a binary string
    InvalidInputSymbol {
        /// 1-based line number
        line: usize,
        /// The offending token
        symbol: Arc<str>,
    },
    /// The input column width differs from the first data row
    InputWidthMismatch {
        /// 1-based line number
        line: usize,
        /// Width of the first row's input symbol
        expected: usize,
        /// Width found on this line
        actual: usize,
    },
    /// The input column is wider than the supported alphabet
    InputTooWide {
        /// 1-based line number
        line: usize,
        /// Width found on this line
        width: usize,
    },
    /// The same state/input pair is listed twice
    DuplicateTransition {
        /// 1-based line number of the second occurrence
        line: usize,
        /// Current state of the row
        state: Arc<str>,
        /// Input symbol of the row
        input: Arc<str>,
    },
    /// A state lacks a transition for some input symbol
    MissingTransition {
        /// The incomplete state
        state: Arc<str>,
        /// The missing input symbol, in binary
        input: Arc<str>,
    },
    /// A transition targets a state that never appears as a current state
    UnknownState {
        /// 1-based line number of the transition
        line: usize,
        /// The undeclared next state
        state: Arc<str>,
    },
    /// The reset state is not one of the table's states
    UnknownResetState {
        /// The requested reset state
        state: Arc<str>,
    },
    /// The input contains no transitions at all
    NoStates,
}

impl fmt::Display for KissError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KissError::MalformedRow { line, fields } => write!(
                f,
                "Line {}: expected 4 fields (input current next output), found {}",
                line, fields
            ),
            KissError::InvalidInputSymbol { line, symbol } => {
                write!(f, "Line {}: invalid input symbol '{}'", line, symbol)
            }
            KissError::InputWidthMismatch {
                line,
                expected,
                actual,
            } => write!(
                f,
                "Line {}: input symbol has width {} but earlier rows use width {}",
                line, actual, expected
            ),
            KissError::InputTooWide { line, width } => {
                write!(f, "Line {}: input symbol width {} is too wide", line, width)
            }
            KissError::DuplicateTransition { line, state, input } => write!(
                f,
                "Line {}: duplicate transition for state '{}' on input {}",
                line, state, input
            ),
            KissError::MissingTransition { state, input } => {
                write!(f, "State '{}' has no transition on input {}", state, input)
            }
            KissError::UnknownState { line, state } => write!(
                f,
                "Line {}: next state '{}' is never listed as a current state",
                line, state
            ),
            KissError::UnknownResetState { state } => {
                write!(f, "Reset state '{}' is not a state of the table", state)
            }
            KissError::NoStates => write!(f, "State table contains no transitions"),
        }
    }
}

impl std::error::Error for KissError {}

impl From<KissError> for io::Error {
    fn from(err: KissError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors that can occur when reading a KISS state table
#[derive(Debug)]
pub enum KissReadError {
    /// Format or consistency error
    Kiss(KissError),
    /// IO error during reading
    Io(io::Error),
}

impl fmt::Display for KissReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KissReadError::Kiss(e) => write!(f, "KISS format error: {}", e),
            KissReadError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for KissReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KissReadError::Kiss(e) => Some(e),
            KissReadError::Io(e) => Some(e),
        }
    }
}

impl From<KissError> for KissReadError {
    fn from(err: KissError) -> Self {
        KissReadError::Kiss(err)
    }
}

impl From<io::Error> for KissReadError {
    fn from(err: io::Error) -> Self {
        KissReadError::Io(err)
    }
}

impl From<KissReadError> for io::Error {
    fn from(err: KissReadError) -> Self {
        match err {
            KissReadError::Io(e) => e,
            KissReadError::Kiss(e) => io::Error::new(io::ErrorKind::InvalidData, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_row_display() {
        let err = KissError::MalformedRow { line: 7, fields: 3 };
        let msg = err.to_string();
        assert!(msg.contains("Line 7"));
        assert!(msg.contains("found 3"));
    }

    #[test]
    fn test_unknown_state_display() {
        let err = KissError::UnknownState {
            line: 2,
            state: Arc::from("s9"),
        };
        assert!(err.to_string().contains("'s9'"));
    }

    #[test]
    fn test_read_error_from_kiss_error() {
        let read_err: KissReadError = KissError::NoStates.into();
        assert!(matches!(read_err, KissReadError::Kiss(KissError::NoStates)));
    }

    #[test]
    fn test_read_error_to_io_error_preserves_io_error() {
        let original = io::Error::new(io::ErrorKind::NotFound, "missing.kiss");
        let io_err: io::Error = KissReadError::Io(original).into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
        assert_eq!(io_err.to_string(), "missing.kiss");
    }

    #[test]
    fn test_kiss_error_to_io_error() {
        let io_err: io::Error = KissError::NoStates.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
