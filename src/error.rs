//! Error types for URI decomposition.

use std::fmt;

use crate::log::debug;

/// Error returned when an input cannot be decomposed into a URI.
///
/// Parsing is all-or-nothing: no partially filled [`Uri`](crate::Uri) is ever
/// returned alongside an error. A component that is simply missing (no port,
/// no query, ...) is reported as `None` on the `Uri`, never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseError {
    /// The specific error that occurred
    pub kind: ParseErrorKind,
    /// Byte offset into the input where the fault was detected
    pub position: usize,
    /// Human-readable cause
    pub reason: &'static str,
}

/// Specific parsing error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The input does not follow the generic URI syntax.
    ///
    /// Raised for a missing or malformed scheme, an empty authority after
    /// `//`, an unclosed IP-literal host, and (in strict port mode only) a
    /// port that is not a decimal number in `0..=65535`.
    BadFormat,
}

impl ParseError {
    pub(crate) fn bad_format(position: usize, reason: &'static str) -> Self {
        debug!("rejected URI at byte {position}: {reason}");
        Self {
            kind: ParseErrorKind::BadFormat,
            position,
            reason,
        }
    }

    /// Returns true if this is a [`ParseErrorKind::BadFormat`] error.
    #[must_use]
    pub const fn is_bad_format(&self) -> bool {
        matches!(self.kind, ParseErrorKind::BadFormat)
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadFormat => write!(f, "bad format"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to parse URI: {} at byte {}: {}",
            self.kind, self.position, self.reason
        )
    }
}

impl std::error::Error for ParseError {}
