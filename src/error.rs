//! Error types for the editor.

use std::fmt;
use std::io;

/// Result type alias for editor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for editor operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from terminal operations.
    Io(io::Error),
    /// The edit has no effect at the requested position (e.g. backspace at
    /// the start of the document).
    NoOp,
    /// Row index past the end of the document.
    OutOfRange { row: usize, len: usize },
    /// Input bytes that map to no editor action.
    UnhandledInput(Vec<u8>),
    /// The terminal is smaller than the layout requires.
    TerminalTooSmall {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },
    /// A configuration value that does not parse.
    InvalidConfig { key: String, value: String },
}

impl Error {
    /// Check if this is the benign no-op marker.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::NoOp => write!(f, "edit has no effect at this position"),
            Self::OutOfRange { row, len } => {
                write!(f, "row {row} out of range for document of {len} lines")
            }
            Self::UnhandledInput(bytes) => write!(f, "unhandled input: {bytes:?}"),
            Self::TerminalTooSmall {
                width,
                height,
                min_width,
                min_height,
            } => {
                write!(
                    f,
                    "terminal is {width}x{height}, needs at least {min_width}x{min_height}"
                )
            }
            Self::InvalidConfig { key, value } => {
                write!(f, "invalid value for {key}: {value:?}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::OutOfRange { row: 7, len: 3 };
        assert!(err.to_string().contains("row 7"));

        let err = Error::TerminalTooSmall {
            width: 40,
            height: 3,
            min_width: 50,
            min_height: 4,
        };
        assert!(err.to_string().contains("40x3"));
        assert!(err.to_string().contains("50x4"));

        let err = Error::UnhandledInput(vec![0x1b, b'[', b'Z']);
        assert!(err.to_string().contains("27"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_noop_marker() {
        assert!(Error::NoOp.is_noop());
        assert!(!Error::OutOfRange { row: 0, len: 0 }.is_noop());
    }
}
