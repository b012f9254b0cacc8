//! Authority scanner.
//!
//! ```abnf
//! authority = [ userinfo "@" ] host [ ":" port ]
//! userinfo  = user [ ":" password ]
//! host      = IP-literal / reg-name
//! ```
//!
//! Only boundaries are located here. Host syntax (IPv4, IPv6, DNS names) is
//! not validated, and nothing is percent-decoded.

use crate::constants::{
    AUTHORITY_PREFIX, FRAGMENT_DELIMITER, IP_LITERAL_CLOSE, IP_LITERAL_OPEN, PATH_DELIMITER,
    PORT_SEPARATOR, QUERY_DELIMITER, USERINFO_TERMINATOR,
};
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::options::{ParseOptions, PortMode};

/// Components of a scanned authority block, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Authority<'a> {
    /// Everything between `//` and the path.
    pub(crate) raw: &'a [u8],
    pub(crate) userinfo: Option<&'a [u8]>,
    pub(crate) user: Option<&'a [u8]>,
    pub(crate) password: Option<&'a [u8]>,
    pub(crate) host: &'a [u8],
    pub(crate) port: Option<u16>,
    /// Unconverted text after the port separator.
    pub(crate) port_text: Option<&'a [u8]>,
}

const fn is_authority_end(b: u8) -> bool {
    matches!(b, PATH_DELIMITER | QUERY_DELIMITER | FRAGMENT_DELIMITER)
}

fn first_index_of(haystack: &[u8], needle: u8) -> Option<usize> {
    haystack.iter().position(|&b| b == needle)
}

fn last_index_of(haystack: &[u8], needle: u8) -> Option<usize> {
    haystack.iter().rposition(|&b| b == needle)
}

/// Consumes `"//" authority` and splits it into its parts.
///
/// The caller must have checked that the cursor is at `//`.
pub(crate) fn scan<'a>(
    cursor: &mut Cursor<'a>,
    options: ParseOptions,
) -> Result<Authority<'a>, ParseError> {
    debug_assert!(cursor.has_prefix(AUTHORITY_PREFIX));
    cursor.next_byte();
    cursor.next_byte();

    let offset = cursor.position();
    let raw = cursor.take_until(is_authority_end);
    if raw.is_empty() {
        return Err(ParseError::bad_format(offset, "authority is empty"));
    }

    let (userinfo, start_of_host) = match first_index_of(raw, USERINFO_TERMINATOR) {
        Some(at) => (Some(&raw[..at]), at + 1),
        None => (None, 0),
    };
    let (user, password) = userinfo.map_or((None, None), split_userinfo);

    let (end_of_host, port_separator) = if raw.get(start_of_host) == Some(&IP_LITERAL_OPEN) {
        let close = last_index_of(&raw[start_of_host..], IP_LITERAL_CLOSE).ok_or_else(|| {
            ParseError::bad_format(offset + start_of_host, "IP literal is missing its closing ']'")
        })?;
        // The host always ends at the bracket, even if bytes sit between it
        // and the port separator.
        let end_of_host = start_of_host + close + 1;
        let separator = last_index_of(raw, PORT_SEPARATOR).filter(|&i| i >= end_of_host);
        (end_of_host, separator)
    } else {
        let separator = last_index_of(raw, PORT_SEPARATOR).filter(|&i| i >= start_of_host);
        (separator.unwrap_or(raw.len()), separator)
    };

    let port_text = port_separator.map(|i| &raw[i + 1..]);
    let port = match port_text {
        Some(text) => parse_port(text, options.port_mode)
            .map_err(|reason| ParseError::bad_format(offset + raw.len() - text.len(), reason))?,
        None => None,
    };

    Ok(Authority {
        raw,
        userinfo,
        user,
        password,
        host: &raw[start_of_host..end_of_host],
        port,
        port_text,
    })
}

/// Splits `user[:password]` at its first `:`.
///
/// Everything after that colon is the password, verbatim, so `name::`
/// yields the password `":"`. A colon with nothing after it yields no
/// password.
fn split_userinfo(userinfo: &[u8]) -> (Option<&[u8]>, Option<&[u8]>) {
    match first_index_of(userinfo, PORT_SEPARATOR) {
        Some(colon) => {
            let password = &userinfo[colon + 1..];
            (
                Some(&userinfo[..colon]),
                (!password.is_empty()).then_some(password),
            )
        }
        None => (Some(userinfo), None),
    }
}

fn parse_port(text: &[u8], mode: PortMode) -> Result<Option<u16>, &'static str> {
    match mode {
        PortMode::Permissive => Ok(Some(parse_port_permissive(text))),
        PortMode::Strict => parse_port_strict(text),
    }
}

/// Leading decimal digits, wrapping modulo 2^16. No digits gives `0`.
fn parse_port_permissive(text: &[u8]) -> u16 {
    text.iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0u16, |acc, &d| {
            acc.wrapping_mul(10).wrapping_add(u16::from(d - b'0'))
        })
}

fn parse_port_strict(text: &[u8]) -> Result<Option<u16>, &'static str> {
    if text.is_empty() {
        return Ok(None);
    }
    text.iter()
        .try_fold(0u16, |acc, &d| {
            if !d.is_ascii_digit() {
                return Err("port is not a decimal number");
            }
            acc.checked_mul(10)
                .and_then(|acc| acc.checked_add(u16::from(d - b'0')))
                .ok_or("port is out of range")
        })
        .map(Some)
}
