//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use uri_slice::prelude::*;
//!
//! let uri = Uri::parse(b"http://example.com/").unwrap();
//! assert_eq!(uri.span(Component::Path), Some(18..19));
//! ```
//!
//! Delimiter constants are left out; import them from the crate root.

pub use crate::{
    // Core types
    Component, Cursor, Uri, UriParser,
    // Configuration
    ParseOptions, PortMode,
    // Errors
    ParseError, ParseErrorKind,
    // Entry points
    parse, parse_without_scheme,
};
