//! Delimiter bytes of the RFC 3986 generic syntax.

/// Terminates the scheme (`scheme ":"`).
pub const SCHEME_TERMINATOR: u8 = b':';

/// Introduces the authority component.
pub const AUTHORITY_PREFIX: &[u8] = b"//";

/// Separates userinfo from host.
pub const USERINFO_TERMINATOR: u8 = b'@';

/// Separates user from password, and host from port.
pub const PORT_SEPARATOR: u8 = b':';

/// Opens an IP-literal host.
pub const IP_LITERAL_OPEN: u8 = b'[';

/// Closes an IP-literal host.
pub const IP_LITERAL_CLOSE: u8 = b']';

/// Ends the authority and begins a path segment.
pub const PATH_DELIMITER: u8 = b'/';

/// Introduces the query component.
pub const QUERY_DELIMITER: u8 = b'?';

/// Introduces the fragment component.
pub const FRAGMENT_DELIMITER: u8 = b'#';
