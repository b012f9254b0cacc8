//! Borrowed URI type and the parse orchestration.

use std::fmt::{self, Write as _};
use std::hash::{Hash, Hasher};
use std::ops::Range;

use crate::authority;
use crate::constants::{AUTHORITY_PREFIX, FRAGMENT_DELIMITER, PORT_SEPARATOR, QUERY_DELIMITER};
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::log::trace;
use crate::options::ParseOptions;
use crate::path;
use crate::scheme;

/// Names a component of a [`Uri`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Component {
    /// Text before the first `:`
    Scheme,
    /// Everything between `//` and the path
    Authority,
    /// Text before `@` in the authority
    Userinfo,
    /// Userinfo up to its first `:`
    User,
    /// Userinfo after its first `:`
    Password,
    /// Host, including brackets for IP literals
    Host,
    /// Raw text after the port separator
    Port,
    /// Path, possibly empty
    Path,
    /// Text after `?`
    Query,
    /// Text after `#`
    Fragment,
}

impl Component {
    /// Every component, in the order they appear in a URI.
    pub const ALL: [Self; 10] = [
        Self::Scheme,
        Self::Authority,
        Self::Userinfo,
        Self::User,
        Self::Password,
        Self::Host,
        Self::Port,
        Self::Path,
        Self::Query,
        Self::Fragment,
    ];
}

/// A URI split into its RFC 3986 components.
///
/// Every component is a view into the buffer that was parsed; nothing is
/// copied, decoded, or normalized. The lifetime `'a` ties the `Uri` to that
/// buffer.
///
/// ```text
///   foo://example.com:8042/over/there?name=ferret#nose
///   \_/   \______________/\_________/ \_________/ \__/
///    |           |            |            |        |
/// scheme     authority       path        query   fragment
///    |   _____________________|__
///   / \ /                        \
///   urn:example:animal:ferret:nose
/// ```
///
/// # Examples
///
/// ```
/// use uri_slice::Uri;
///
/// let uri = Uri::parse(b"foo://example.com:8042/over/there?name=ferret#nose").unwrap();
/// assert_eq!(uri.scheme(), b"foo");
/// assert_eq!(uri.host(), Some(&b"example.com"[..]));
/// assert_eq!(uri.port(), Some(8042));
/// assert_eq!(uri.path(), b"/over/there");
/// assert_eq!(uri.query(), Some(&b"name=ferret"[..]));
/// assert_eq!(uri.fragment(), Some(&b"nose"[..]));
///
/// let urn = Uri::parse(b"urn:example:animal:ferret:nose").unwrap();
/// assert_eq!(urn.scheme(), b"urn");
/// assert_eq!(urn.host(), None);
/// assert_eq!(urn.path(), b"example:animal:ferret:nose");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Uri<'a> {
    source: &'a [u8],
    scheme: &'a [u8],
    authority: Option<&'a [u8]>,
    userinfo: Option<&'a [u8]>,
    user: Option<&'a [u8]>,
    password: Option<&'a [u8]>,
    host: Option<&'a [u8]>,
    port: Option<u16>,
    port_text: Option<&'a [u8]>,
    path: &'a [u8],
    query: Option<&'a [u8]>,
    fragment: Option<&'a [u8]>,
}

impl<'a> Uri<'a> {
    /// Parses a complete URI, scheme included, with default options.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` with kind `BadFormat` if:
    /// - The scheme is empty, runs to the end of the input, or is not
    ///   immediately followed by `:`
    /// - `//` is followed by an empty authority
    /// - A `[` host has no closing `]`
    pub fn parse(input: &'a [u8]) -> Result<Self, ParseError> {
        UriParser::default().parse(input)
    }

    /// Parses the part of a URI that follows `scheme:`, with default options.
    ///
    /// The scheme of the result is empty; use [`Uri::with_scheme`] to fill
    /// it in.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` with kind `BadFormat` if `//` is followed by an
    /// empty authority or a `[` host has no closing `]`.
    pub fn parse_without_scheme(input: &'a [u8]) -> Result<Self, ParseError> {
        UriParser::default().parse_without_scheme(input)
    }

    /// Parses a complete URI from a string slice.
    ///
    /// # Errors
    ///
    /// See [`Uri::parse`].
    pub fn parse_str(input: &'a str) -> Result<Self, ParseError> {
        Self::parse(input.as_bytes())
    }

    /// Returns a copy of this URI with its scheme replaced.
    ///
    /// Meant for results of [`Uri::parse_without_scheme`] when the scheme
    /// was parsed elsewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_slice::Uri;
    ///
    /// let uri = Uri::parse_without_scheme(b"//example.com/").unwrap();
    /// assert_eq!(uri.scheme(), b"");
    /// assert_eq!(uri.with_scheme(b"https").scheme(), b"https");
    /// ```
    #[must_use]
    pub const fn with_scheme(mut self, scheme: &'a [u8]) -> Self {
        self.scheme = scheme;
        self
    }

    /// Returns the scheme, without its `:`.
    #[must_use]
    pub const fn scheme(&self) -> &'a [u8] {
        self.scheme
    }

    /// Returns the raw authority, between `//` and the path.
    #[must_use]
    pub const fn authority(&self) -> Option<&'a [u8]> {
        self.authority
    }

    /// Returns the raw userinfo, before `@`.
    #[must_use]
    pub const fn userinfo(&self) -> Option<&'a [u8]> {
        self.userinfo
    }

    /// Returns the user, if the authority has a userinfo.
    #[must_use]
    pub const fn user(&self) -> Option<&'a [u8]> {
        self.user
    }

    /// Returns the password, if the userinfo has a non-empty one.
    #[must_use]
    pub const fn password(&self) -> Option<&'a [u8]> {
        self.password
    }

    /// Returns the host. Present whenever the URI has an authority, though
    /// it may be empty.
    #[must_use]
    pub const fn host(&self) -> Option<&'a [u8]> {
        self.host
    }

    /// Returns the port number, if a port separator was found.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the unconverted text after the port separator.
    #[must_use]
    pub const fn port_text(&self) -> Option<&'a [u8]> {
        self.port_text
    }

    /// Returns the path, which may be empty.
    #[must_use]
    pub const fn path(&self) -> &'a [u8] {
        self.path
    }

    /// Returns the query, without its `?`.
    #[must_use]
    pub const fn query(&self) -> Option<&'a [u8]> {
        self.query
    }

    /// Returns the fragment, without its `#`.
    #[must_use]
    pub const fn fragment(&self) -> Option<&'a [u8]> {
        self.fragment
    }

    /// Returns true if the URI has an authority (`//...`).
    #[must_use]
    pub const fn has_authority(&self) -> bool {
        self.authority.is_some()
    }

    /// Returns the view for a component.
    #[must_use]
    pub const fn component(&self, component: Component) -> Option<&'a [u8]> {
        match component {
            Component::Scheme => Some(self.scheme),
            Component::Authority => self.authority,
            Component::Userinfo => self.userinfo,
            Component::User => self.user,
            Component::Password => self.password,
            Component::Host => self.host,
            Component::Port => self.port_text,
            Component::Path => Some(self.path),
            Component::Query => self.query,
            Component::Fragment => self.fragment,
        }
    }

    /// Returns a component as `str`, if present and valid UTF-8.
    #[must_use]
    pub fn component_str(&self, component: Component) -> Option<&'a str> {
        self.component(component)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    /// Returns the scheme as `str`, if valid UTF-8.
    #[must_use]
    pub fn scheme_str(&self) -> Option<&'a str> {
        self.component_str(Component::Scheme)
    }

    /// Returns the host as `str`, if present and valid UTF-8.
    #[must_use]
    pub fn host_str(&self) -> Option<&'a str> {
        self.component_str(Component::Host)
    }

    /// Returns the path as `str`, if valid UTF-8.
    #[must_use]
    pub fn path_str(&self) -> Option<&'a str> {
        self.component_str(Component::Path)
    }

    /// Returns the query as `str`, if present and valid UTF-8.
    #[must_use]
    pub fn query_str(&self) -> Option<&'a str> {
        self.component_str(Component::Query)
    }

    /// Returns the fragment as `str`, if present and valid UTF-8.
    #[must_use]
    pub fn fragment_str(&self) -> Option<&'a str> {
        self.component_str(Component::Fragment)
    }

    /// Returns the buffer this URI was parsed from.
    #[must_use]
    pub const fn source(&self) -> &'a [u8] {
        self.source
    }

    /// Returns the byte range a component occupies in the parsed buffer.
    ///
    /// Returns `None` if the component is absent, or if it does not point
    /// into the parsed buffer (a scheme supplied through
    /// [`Uri::with_scheme`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_slice::{Component, Uri};
    ///
    /// let uri = Uri::parse(b"http://example:1337/").unwrap();
    /// assert_eq!(uri.span(Component::Host), Some(7..14));
    /// assert_eq!(uri.span(Component::Port), Some(15..19));
    /// assert_eq!(uri.span(Component::Query), None);
    /// ```
    #[must_use]
    pub fn span(&self, component: Component) -> Option<Range<usize>> {
        let view = self.component(component)?;
        let start = view.as_ptr().addr().checked_sub(self.source.as_ptr().addr())?;
        let end = start.checked_add(view.len())?;
        (end <= self.source.len()).then_some(start..end)
    }
}

/// Compares components only, not the buffers they were parsed from.
impl PartialEq for Uri<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.scheme == other.scheme
            && self.authority == other.authority
            && self.port == other.port
            && self.path == other.path
            && self.query == other.query
            && self.fragment == other.fragment
    }
}

impl Eq for Uri<'_> {}

impl Hash for Uri<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.scheme.hash(state);
        self.authority.hash(state);
        self.port.hash(state);
        self.path.hash(state);
        self.query.hash(state);
        self.fragment.hash(state);
    }
}

fn write_lossy(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for chunk in bytes.utf8_chunks() {
        f.write_str(chunk.valid())?;
        if !chunk.invalid().is_empty() {
            f.write_char(char::REPLACEMENT_CHARACTER)?;
        }
    }
    Ok(())
}

/// Recomposes the URI (RFC 3986 §5.3).
///
/// The port is written as its converted number and an empty password is
/// dropped, so the output is not always byte-identical to the input.
impl fmt::Display for Uri<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write_lossy(f, self.scheme)?;
            f.write_char(':')?;
        }

        if let Some(host) = self.host {
            write_lossy(f, AUTHORITY_PREFIX)?;
            if let Some(user) = self.user {
                write_lossy(f, user)?;
                if let Some(password) = self.password {
                    f.write_char(':')?;
                    write_lossy(f, password)?;
                }
                f.write_char('@')?;
            }
            write_lossy(f, host)?;
            if let Some(port) = self.port {
                write!(f, "{}{port}", char::from(PORT_SEPARATOR))?;
            }
        }

        write_lossy(f, self.path)?;

        if let Some(query) = self.query {
            f.write_char(char::from(QUERY_DELIMITER))?;
            write_lossy(f, query)?;
        }

        if let Some(fragment) = self.fragment {
            f.write_char(char::from(FRAGMENT_DELIMITER))?;
            write_lossy(f, fragment)?;
        }

        Ok(())
    }
}

impl<'a> TryFrom<&'a [u8]> for Uri<'a> {
    type Error = ParseError;

    fn try_from(input: &'a [u8]) -> Result<Self, Self::Error> {
        Self::parse(input)
    }
}

impl<'a> TryFrom<&'a str> for Uri<'a> {
    type Error = ParseError;

    fn try_from(input: &'a str) -> Result<Self, Self::Error> {
        Self::parse_str(input)
    }
}

#[cfg(feature = "serde")]
struct Text<'a>(&'a [u8]);

#[cfg(feature = "serde")]
impl serde::Serialize for Text<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match std::str::from_utf8(self.0) {
            Ok(s) => serializer.serialize_str(s),
            Err(_) => serializer.serialize_bytes(self.0),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uri<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Uri", 8)?;
        state.serialize_field("scheme", &Text(self.scheme))?;
        state.serialize_field("user", &self.user.map(Text))?;
        state.serialize_field("password", &self.password.map(Text))?;
        state.serialize_field("host", &self.host.map(Text))?;
        state.serialize_field("port", &self.port)?;
        state.serialize_field("path", &Text(self.path))?;
        state.serialize_field("query", &self.query.map(Text))?;
        state.serialize_field("fragment", &self.fragment.map(Text))?;
        state.end()
    }
}

/// A URI parser carrying [`ParseOptions`].
///
/// The free functions [`parse`](crate::parse) and
/// [`parse_without_scheme`](crate::parse_without_scheme) use the defaults.
///
/// # Examples
///
/// ```
/// use uri_slice::{ParseOptions, UriParser};
///
/// let parser = UriParser::new(ParseOptions::new().strict());
/// let err = parser.parse(b"http://example.com:99999/").unwrap_err();
/// assert!(err.is_bad_format());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UriParser {
    options: ParseOptions,
}

impl UriParser {
    /// Creates a parser with the given options.
    #[must_use]
    pub const fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Returns the options in effect.
    #[must_use]
    pub const fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parses a complete URI, scheme included.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` with kind `BadFormat` if:
    /// - The scheme is empty, runs to the end of the input, or is not
    ///   immediately followed by `:`
    /// - `//` is followed by an empty authority
    /// - A `[` host has no closing `]`
    /// - Strict port mode is on and the port is not a number in `0..=65535`
    pub fn parse<'a>(&self, input: &'a [u8]) -> Result<Uri<'a>, ParseError> {
        let mut cursor = Cursor::new(input);
        let scheme = scheme::scan(&mut cursor)?;
        self.scan_rest(&mut cursor, scheme)
    }

    /// Parses the part of a URI that follows `scheme:`.
    ///
    /// The scheme of the result is empty.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` with kind `BadFormat` if:
    /// - `//` is followed by an empty authority
    /// - A `[` host has no closing `]`
    /// - Strict port mode is on and the port is not a number in `0..=65535`
    pub fn parse_without_scheme<'a>(&self, input: &'a [u8]) -> Result<Uri<'a>, ParseError> {
        let mut cursor = Cursor::new(input);
        self.scan_rest(&mut cursor, &input[..0])
    }

    fn scan_rest<'a>(
        self,
        cursor: &mut Cursor<'a>,
        scheme: &'a [u8],
    ) -> Result<Uri<'a>, ParseError> {
        let authority = if cursor.has_prefix(AUTHORITY_PREFIX) {
            Some(authority::scan(cursor, self.options)?)
        } else {
            None
        };
        let tail = path::scan(cursor);

        let uri = Uri {
            source: cursor.source(),
            scheme,
            authority: authority.map(|a| a.raw),
            userinfo: authority.and_then(|a| a.userinfo),
            user: authority.and_then(|a| a.user),
            password: authority.and_then(|a| a.password),
            host: authority.map(|a| a.host),
            port: authority.and_then(|a| a.port),
            port_text: authority.and_then(|a| a.port_text),
            path: tail.path,
            query: tail.query,
            fragment: tail.fragment,
        };
        trace!(
            "parsed {} byte URI, authority present: {}",
            uri.source.len(),
            uri.has_authority()
        );
        Ok(uri)
    }
}
