//! Parser configuration.

/// How the text after a host/port `:` is turned into a port number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PortMode {
    /// Reads leading decimal digits and stops at the first non-digit.
    ///
    /// No digits at all yields `0`, and values beyond `65535` wrap modulo
    /// 2^16 instead of failing. `"8080abc"` becomes `8080`, `"x"` becomes
    /// `0`, `"65536"` becomes `0`. This matches the C `atoi`-style
    /// conversion many existing URI consumers rely on.
    #[default]
    Permissive,
    /// Requires the port to be ASCII digits with a value in `0..=65535`.
    ///
    /// Empty port text (`host:`) yields no port, as RFC 3986 §3.2.3
    /// allows. Anything else fails with
    /// [`ParseErrorKind::BadFormat`](crate::ParseErrorKind::BadFormat).
    Strict,
}

/// Options controlling a parse.
///
/// # Examples
///
/// ```
/// use uri_slice::{ParseOptions, PortMode, UriParser};
///
/// let parser = UriParser::new(ParseOptions::new().with_port_mode(PortMode::Strict));
/// assert!(parser.parse(b"http://example.com:80x/").is_err());
/// assert_eq!(parser.parse(b"http://example.com:80/").unwrap().port(), Some(80));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    /// Port conversion rule.
    ///
    /// Default: [`PortMode::Permissive`]
    pub port_mode: PortMode,
}

impl ParseOptions {
    /// Creates a new set of options with defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            port_mode: PortMode::Permissive,
        }
    }

    /// Sets the port conversion rule.
    #[must_use]
    pub const fn with_port_mode(mut self, port_mode: PortMode) -> Self {
        self.port_mode = port_mode;
        self
    }

    /// Shorthand for `with_port_mode(PortMode::Strict)`.
    #[must_use]
    pub const fn strict(self) -> Self {
        self.with_port_mode(PortMode::Strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_permissive() {
        assert_eq!(ParseOptions::default().port_mode, PortMode::Permissive);
        assert_eq!(ParseOptions::new(), ParseOptions::default());
    }

    #[test]
    fn builder_sets_mode() {
        let options = ParseOptions::new().strict();
        assert_eq!(options.port_mode, PortMode::Strict);

        let options = options.with_port_mode(PortMode::Permissive);
        assert_eq!(options.port_mode, PortMode::Permissive);
    }
}
