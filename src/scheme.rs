//! Scheme scanner.
//!
//! ```abnf
//! scheme = 1*( ALPHA / DIGIT / "+" / "-" / "." ) ":"
//! ```
//!
//! The first character is not required to be a letter.

use crate::constants::SCHEME_TERMINATOR;
use crate::cursor::Cursor;
use crate::error::ParseError;

/// Returns true if the byte may appear in a scheme.
pub(crate) const fn is_scheme_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

/// Consumes `scheme ":"` and returns the scheme without its terminator.
pub(crate) fn scan<'a>(cursor: &mut Cursor<'a>) -> Result<&'a [u8], ParseError> {
    let scheme = cursor.take_while(is_scheme_char);
    if scheme.is_empty() {
        return Err(ParseError::bad_format(cursor.position(), "scheme is empty"));
    }

    match cursor.peek() {
        Some(SCHEME_TERMINATOR) => {
            cursor.next_byte();
            Ok(scheme)
        }
        Some(_) => Err(ParseError::bad_format(
            cursor.position(),
            "scheme contains an invalid character",
        )),
        None => Err(ParseError::bad_format(
            cursor.position(),
            "scheme is not terminated by ':'",
        )),
    }
}
