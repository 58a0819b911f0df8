//! The catalog of reversible ANSI escape codes.
//!
//! Every entry in this module's catalog is an [`AnsiPair`], i.e., an escape
//! sequence turning a text attribute on and the matching escape sequence
//! turning it off again. The catalog comprises seven modifiers, eight standard
//! and eight bright foreground colors, and eight standard and eight bright
//! background colors. [`StyleCode`] names each entry, and [`RESET`] restores
//! the terminal's default appearance.
//!
//! # Example
//!
//! ```
//! # use prettytext::escape::{AnsiPair, StyleCode, BOLD};
//! assert_eq!(BOLD.open(), "\x1b[1m");
//! assert_eq!(BOLD.close(), "\x1b[22m");
//! assert_eq!(StyleCode::Bold.pair(), &BOLD);
//!
//! let custom = AnsiPair::new("38;5;208", 39);
//! assert_eq!(custom.open(), "\x1b[38;5;208m");
//! assert_eq!(custom.close(), "\x1b[39m");
//! ```

use std::borrow::Cow;

use crate::error::{KeywordKind, ParseKeywordError};

/// The escape sequence resetting all text attributes.
pub const RESET: &str = "\x1b[0m";

/// An open/close pair of escape sequences.
///
/// The open sequence turns some text attribute on and the close sequence turns
/// it off again. Catalog entries are statics borrowing static strings,
/// whereas [`compose_styles`](crate::style::compose_styles) and
/// [`AnsiPair::new`] produce pairs owning their strings. Either way, pairs are
/// immutable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AnsiPair {
    open: Cow<'static, str>,
    close: Cow<'static, str>,
}

impl AnsiPair {
    /// The identity pair, which has empty open and close sequences.
    pub const IDENTITY: AnsiPair = AnsiPair::from_static("", "");

    /// Create a new pair from the SGR parameters for turning an attribute on
    /// and off.
    pub fn new(open_code: impl core::fmt::Display, close_code: impl core::fmt::Display) -> Self {
        Self {
            open: Cow::Owned(format!("\x1b[{}m", open_code)),
            close: Cow::Owned(format!("\x1b[{}m", close_code)),
        }
    }

    /// Create a new pair from complete escape sequences.
    pub const fn from_static(open: &'static str, close: &'static str) -> Self {
        Self {
            open: Cow::Borrowed(open),
            close: Cow::Borrowed(close),
        }
    }

    /// Create a new pair from complete, owned escape sequences.
    pub(crate) fn from_parts(open: String, close: String) -> Self {
        Self {
            open: Cow::Owned(open),
            close: Cow::Owned(close),
        }
    }

    /// Get the escape sequence turning the attribute on.
    #[inline]
    pub fn open(&self) -> &str {
        &self.open
    }

    /// Get the escape sequence turning the attribute off.
    #[inline]
    pub fn close(&self) -> &str {
        &self.close
    }

    /// Determine whether this pair has neither open nor close sequence.
    pub fn is_identity(&self) -> bool {
        self.open.is_empty() && self.close.is_empty()
    }
}

// ------------------------------------------------------------------------------------------------

/// Invoke the callback macro with the complete catalog.
///
/// Each entry has the form `(Variant, name, "open", "close")`. Keeping the
/// catalog in one place lets both [`StyleCode`] and the chainable methods of
/// [`Styler`](crate::style::Styler) and [`Chain`](crate::style::Chain) be
/// generated from the same list.
macro_rules! with_style_catalog {
    ($callback:ident) => {
        $callback! {
            (Bold, bold, BOLD, "1", "22"),
            (Dim, dim, DIM, "2", "22"),
            (Italic, italic, ITALIC, "3", "23"),
            (Underline, underline, UNDERLINE, "4", "24"),
            (Inverse, inverse, INVERSE, "7", "27"),
            (Hidden, hidden, HIDDEN, "8", "28"),
            (Strikethrough, strikethrough, STRIKETHROUGH, "9", "29"),

            (Black, black, BLACK, "30", "39"),
            (Red, red, RED, "31", "39"),
            (Green, green, GREEN, "32", "39"),
            (Yellow, yellow, YELLOW, "33", "39"),
            (Blue, blue, BLUE, "34", "39"),
            (Magenta, magenta, MAGENTA, "35", "39"),
            (Cyan, cyan, CYAN, "36", "39"),
            (White, white, WHITE, "37", "39"),
            (BrightBlack, bright_black, BRIGHT_BLACK, "90", "39"),
            (BrightRed, bright_red, BRIGHT_RED, "91", "39"),
            (BrightGreen, bright_green, BRIGHT_GREEN, "92", "39"),
            (BrightYellow, bright_yellow, BRIGHT_YELLOW, "93", "39"),
            (BrightBlue, bright_blue, BRIGHT_BLUE, "94", "39"),
            (BrightMagenta, bright_magenta, BRIGHT_MAGENTA, "95", "39"),
            (BrightCyan, bright_cyan, BRIGHT_CYAN, "96", "39"),
            (BrightWhite, bright_white, BRIGHT_WHITE, "97", "39"),

            (BgBlack, bg_black, BG_BLACK, "40", "49"),
            (BgRed, bg_red, BG_RED, "41", "49"),
            (BgGreen, bg_green, BG_GREEN, "42", "49"),
            (BgYellow, bg_yellow, BG_YELLOW, "43", "49"),
            (BgBlue, bg_blue, BG_BLUE, "44", "49"),
            (BgMagenta, bg_magenta, BG_MAGENTA, "45", "49"),
            (BgCyan, bg_cyan, BG_CYAN, "46", "49"),
            (BgWhite, bg_white, BG_WHITE, "47", "49"),
            (BgBrightBlack, bg_bright_black, BG_BRIGHT_BLACK, "100", "49"),
            (BgBrightRed, bg_bright_red, BG_BRIGHT_RED, "101", "49"),
            (BgBrightGreen, bg_bright_green, BG_BRIGHT_GREEN, "102", "49"),
            (BgBrightYellow, bg_bright_yellow, BG_BRIGHT_YELLOW, "103", "49"),
            (BgBrightBlue, bg_bright_blue, BG_BRIGHT_BLUE, "104", "49"),
            (BgBrightMagenta, bg_bright_magenta, BG_BRIGHT_MAGENTA, "105", "49"),
            (BgBrightCyan, bg_bright_cyan, BG_BRIGHT_CYAN, "106", "49"),
            (BgBrightWhite, bg_bright_white, BG_BRIGHT_WHITE, "107", "49"),
        }
    };
}

pub(crate) use with_style_catalog;

macro_rules! define_catalog {
    ( $( ($variant:ident, $name:ident, $constant:ident, $open:literal, $close:literal) ),+ $(,)? ) => {
        $(
            #[doc = concat!("The `", stringify!($name), "` pair `ESC[", $open, "m` / `ESC[", $close, "m`.")]
            pub static $constant: AnsiPair =
                AnsiPair::from_static(concat!("\x1b[", $open, "m"), concat!("\x1b[", $close, "m"));
        )+

        /// The name of a catalog entry.
        ///
        /// Discriminants are consecutive small integers, starting with zero for
        /// [`StyleCode::Bold`], and hence can be used as indexes.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum StyleCode {
            $(
                #[doc = concat!("The `", stringify!($name), "` style.")]
                $variant,
            )+
        }

        impl StyleCode {
            const ALL: &'static [StyleCode] = &[ $( StyleCode::$variant ),+ ];

            /// Get this style's escape-code pair.
            pub fn pair(&self) -> &'static AnsiPair {
                match self {
                    $( Self::$variant => &$constant, )+
                }
            }

            /// Get this style's snake-case name.
            pub const fn name(&self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($name), )+
                }
            }
        }

        impl core::str::FromStr for StyleCode {
            type Err = ParseKeywordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( stringify!($name) => Ok(Self::$variant), )+
                    _ => Err(ParseKeywordError::new(KeywordKind::StyleCode, s)),
                }
            }
        }
    };
}

with_style_catalog!(define_catalog);

impl StyleCode {
    /// The number of catalog entries.
    pub const COUNT: usize = Self::ALL.len();

    /// Get an iterator over all catalog entries in order.
    pub fn all() -> impl Iterator<Item = StyleCode> {
        Self::ALL.iter().copied()
    }

    /// Determine whether this style is a modifier, i.e., neither foreground
    /// nor background color.
    pub const fn is_modifier(&self) -> bool {
        (*self as usize) < 7
    }

    /// Determine whether this style is a foreground color.
    pub const fn is_foreground(&self) -> bool {
        let index = *self as usize;
        7 <= index && index < 23
    }

    /// Determine whether this style is a background color.
    pub const fn is_background(&self) -> bool {
        23 <= (*self as usize)
    }
}

impl core::fmt::Display for StyleCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<StyleCode> for AnsiPair {
    fn from(value: StyleCode) -> Self {
        value.pair().clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_catalog() {
        assert_eq!(StyleCode::COUNT, 39);
        assert_eq!(StyleCode::all().filter(StyleCode::is_modifier).count(), 7);
        assert_eq!(StyleCode::all().filter(StyleCode::is_foreground).count(), 16);
        assert_eq!(StyleCode::all().filter(StyleCode::is_background).count(), 16);

        for (index, code) in StyleCode::all().enumerate() {
            assert_eq!(code as usize, index);
            assert!(code.pair().open().starts_with("\x1b["));
            assert!(code.pair().close().ends_with('m'));
            assert_eq!(code.name().parse::<StyleCode>(), Ok(code));
        }

        assert_eq!(DIM.open(), "\x1b[2m");
        assert_eq!(DIM.close(), BOLD.close());
        assert_eq!(BRIGHT_CYAN.open(), "\x1b[96m");
        assert_eq!(BG_BRIGHT_WHITE.open(), "\x1b[107m");
        assert_eq!(BG_BRIGHT_WHITE.close(), "\x1b[49m");
        assert_eq!(StyleCode::BgBrightRed.to_string(), "bg_bright_red");
        assert!("blinking".parse::<StyleCode>().is_err());
    }

    #[test]
    fn test_pair() {
        let pair = AnsiPair::new(1, 22);
        assert_eq!(pair, BOLD);
        assert!(!pair.is_identity());
        assert!(AnsiPair::IDENTITY.is_identity());
        assert_eq!(AnsiPair::default(), AnsiPair::IDENTITY);
        assert_eq!(AnsiPair::from(StyleCode::Red), RED);
    }
}
