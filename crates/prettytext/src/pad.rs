//! Padding text to a visible width.
//!
//! All functions in this module measure text with
//! [`visible_width`](crate::width::visible_width), so escape sequences do not
//! count and full-width characters count twice. Text that already is as wide
//! as the target width, or wider, is returned unchanged. Padding thus never
//! truncates, and padding padded text again is a no-op.
//!
//! # Example
//!
//! ```
//! # use prettytext::pad::{center, pad_end, pad_start};
//! assert_eq!(pad_start("42", 5), "   42");
//! assert_eq!(pad_end("\x1b[1mhi\x1b[22m", 4), "\x1b[1mhi\x1b[22m  ");
//! assert_eq!(center("ab", 5), " ab  ");
//! ```

use crate::error::{KeywordKind, ParseKeywordError};
use crate::width::visible_width;

/// The horizontal alignment of text within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Flush with the left edge, padded on the right.
    #[default]
    Left,
    /// Flush with the right edge, padded on the left.
    Right,
    /// Centered, with the odd column of padding on the right.
    Center,
}

impl Alignment {
    /// Get this alignment's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

impl core::str::FromStr for Alignment {
    type Err = ParseKeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("left") {
            Ok(Self::Left)
        } else if s.eq_ignore_ascii_case("right") {
            Ok(Self::Right)
        } else if s.eq_ignore_ascii_case("center") {
            Ok(Self::Center)
        } else {
            Err(ParseKeywordError::new(KeywordKind::Alignment, s))
        }
    }
}

impl core::fmt::Display for Alignment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ------------------------------------------------------------------------------------------------

/// Surround the text with the given amounts of fill.
fn surround(text: &str, left: usize, right: usize, fill: char) -> String {
    let mut result = String::with_capacity(text.len() + (left + right) * fill.len_utf8());
    result.extend(core::iter::repeat(fill).take(left));
    result.push_str(text);
    result.extend(core::iter::repeat(fill).take(right));
    result
}

/// Determine the missing columns, if any.
fn shortfall(text: &str, width: usize) -> Option<usize> {
    let current = visible_width(text);
    (current < width).then(|| width - current)
}

/// Pad the text on the left with the fill character.
pub fn pad_start_with(text: &str, width: usize, fill: char) -> String {
    match shortfall(text, width) {
        Some(extra) => surround(text, extra, 0, fill),
        None => text.to_owned(),
    }
}

/// Pad the text on the right with the fill character.
pub fn pad_end_with(text: &str, width: usize, fill: char) -> String {
    match shortfall(text, width) {
        Some(extra) => surround(text, 0, extra, fill),
        None => text.to_owned(),
    }
}

/// Center the text with the fill character.
///
/// If the padding cannot be split evenly, the right side receives the extra
/// fill character.
pub fn center_with(text: &str, width: usize, fill: char) -> String {
    match shortfall(text, width) {
        Some(extra) => surround(text, extra / 2, extra - extra / 2, fill),
        None => text.to_owned(),
    }
}

/// Pad the text on the left with spaces, i.e., right-align it.
pub fn pad_start(text: &str, width: usize) -> String {
    pad_start_with(text, width, ' ')
}

/// Pad the text on the right with spaces, i.e., left-align it.
pub fn pad_end(text: &str, width: usize) -> String {
    pad_end_with(text, width, ' ')
}

/// Center the text with spaces.
pub fn center(text: &str, width: usize) -> String {
    center_with(text, width, ' ')
}

/// Align the text within the given width, padding with spaces.
pub fn align(text: &str, width: usize, alignment: Alignment) -> String {
    match alignment {
        Alignment::Left => pad_end(text, width),
        Alignment::Right => pad_start(text, width),
        Alignment::Center => center(text, width),
    }
}
