//! Path, query, and fragment scanner.

use crate::constants::{FRAGMENT_DELIMITER, QUERY_DELIMITER};
use crate::cursor::Cursor;

/// The tail of a URI after the authority, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tail<'a> {
    pub(crate) path: &'a [u8],
    pub(crate) query: Option<&'a [u8]>,
    pub(crate) fragment: Option<&'a [u8]>,
}

/// Consumes the rest of the cursor. Never fails: the path may be empty and
/// the query and fragment are optional.
pub(crate) fn scan<'a>(cursor: &mut Cursor<'a>) -> Tail<'a> {
    let path = cursor.take_until(|b| b == QUERY_DELIMITER || b == FRAGMENT_DELIMITER);

    let query = (cursor.peek() == Some(QUERY_DELIMITER)).then(|| {
        cursor.next_byte();
        cursor.take_until(|b| b == FRAGMENT_DELIMITER)
    });

    let fragment = (cursor.peek() == Some(FRAGMENT_DELIMITER)).then(|| {
        cursor.next_byte();
        cursor.take_rest()
    });

    Tail {
        path,
        query,
        fragment,
    }
}
