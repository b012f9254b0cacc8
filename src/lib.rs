//! Zero-copy decomposition of URIs into their RFC 3986 components.
//!
//! This crate splits a raw byte sequence into scheme, userinfo (user and
//! password), host, port, path, query, and fragment. Every component is a
//! view into the caller's buffer: parsing performs no allocation and no
//! I/O, and the returned [`Uri`] borrows the input for its whole lifetime.
//!
//! # Quick Start
//!
//! ```rust
//! let uri = uri_slice::parse(b"foo://user@example.com:8042/over/there?name=ferret#nose").unwrap();
//!
//! assert_eq!(uri.scheme(), b"foo");
//! assert_eq!(uri.user(), Some(&b"user"[..]));
//! assert_eq!(uri.host_str(), Some("example.com"));
//! assert_eq!(uri.port(), Some(8042));
//! assert_eq!(uri.path(), b"/over/there");
//! assert_eq!(uri.query_str(), Some("name=ferret"));
//! assert_eq!(uri.fragment_str(), Some("nose"));
//! ```
//!
//! When the scheme has already been consumed by an outer parser (an HTTP
//! request line, for instance), hand over the rest:
//!
//! ```rust
//! let uri = uri_slice::parse_without_scheme(b"//example.com/index.html").unwrap();
//! assert_eq!(uri.scheme(), b"");
//! assert_eq!(uri.with_scheme(b"http").scheme(), b"http");
//! ```
//!
//! # What is not done
//!
//! - No percent-decoding or encoding
//! - No normalization (dot segments, case folding)
//! - No resolution of relative references
//! - No validation of host syntax beyond locating its boundaries
//!
//! # Ports
//!
//! By default ports are converted permissively: leading digits are read,
//! the first non-digit ends the number, no digits give `0`, and large
//! values wrap modulo 2^16. [`PortMode::Strict`] rejects anything but a
//! decimal number in `0..=65535`:
//!
//! ```rust
//! use uri_slice::{ParseOptions, UriParser};
//!
//! assert_eq!(uri_slice::parse(b"http://h:80abc/").unwrap().port(), Some(80));
//!
//! let strict = UriParser::new(ParseOptions::new().strict());
//! assert!(strict.parse(b"http://h:80abc/").is_err());
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize` for [`Uri`]
//! - `log`: `debug` records for rejected input and `trace` records for
//!   accepted input, through the `log` facade

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod authority;
mod constants;
mod cursor;
mod error;
#[cfg(kani)]
mod kani_impls;
mod log;
mod options;
mod path;
pub mod prelude;
mod scheme;
mod uri;

pub use constants::{
    AUTHORITY_PREFIX, FRAGMENT_DELIMITER, IP_LITERAL_CLOSE, IP_LITERAL_OPEN, PATH_DELIMITER,
    PORT_SEPARATOR, QUERY_DELIMITER, SCHEME_TERMINATOR, USERINFO_TERMINATOR,
};
pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};
pub use options::{ParseOptions, PortMode};
pub use uri::{Component, Uri, UriParser};

/// Parses a complete URI, scheme included, with default options.
///
/// # Errors
///
/// Returns `ParseError` with kind `BadFormat` if:
/// - The scheme is empty, runs to the end of the input, or is not
///   immediately followed by `:`
/// - `//` is followed by an empty authority
/// - A `[` host has no closing `]`
pub fn parse(input: &[u8]) -> Result<Uri<'_>, ParseError> {
    Uri::parse(input)
}

/// Parses the part of a URI that follows `scheme:`, with default options.
///
/// The scheme of the result is empty.
///
/// # Errors
///
/// Returns `ParseError` with kind `BadFormat` if `//` is followed by an
/// empty authority or a `[` host has no closing `]`.
pub fn parse_without_scheme(input: &[u8]) -> Result<Uri<'_>, ParseError> {
    Uri::parse_without_scheme(input)
}
