//! Utility module with prettytext's errors.
//!
//! Styling, measuring, wrapping, and laying out text never fail. The only
//! fallible operations parse the keywords used for configuration, i.e.,
//! [`ColorMode`](crate::style::ColorMode),
//! [`Alignment`](crate::pad::Alignment), and
//! [`StyleCode`](crate::escape::StyleCode).

/// The kinds of keywords that can be parsed from strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeywordKind {
    ColorMode,
    Alignment,
    StyleCode,
}

impl KeywordKind {
    /// Get a human-readable name for this kind of keyword.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ColorMode => "color mode",
            Self::Alignment => "alignment",
            Self::StyleCode => "style name",
        }
    }

    /// Get a human-readable list of the valid keywords.
    const fn expected(&self) -> &'static str {
        match self {
            Self::ColorMode => "`auto`, `always`, or `never`",
            Self::Alignment => "`left`, `right`, or `center`",
            Self::StyleCode => "a modifier such as `bold` or a color such as `bright_red`",
        }
    }
}

/// An unrecognized keyword.
///
/// This error indicates that a string did not name a valid value of the
/// expected kind. It retains the offending string for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseKeywordError {
    kind: KeywordKind,
    value: String,
}

impl ParseKeywordError {
    /// Create a new keyword error.
    pub fn new(kind: KeywordKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Get the kind of keyword that failed to parse.
    pub fn kind(&self) -> KeywordKind {
        self.kind
    }

    /// Get the string that failed to parse.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl core::fmt::Display for ParseKeywordError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} should be {} but is `{}`",
            self.kind.name(),
            self.kind.expected(),
            self.value
        )
    }
}

impl std::error::Error for ParseKeywordError {}
