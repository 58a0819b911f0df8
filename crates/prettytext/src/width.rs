//! Removing escape sequences and measuring visible width.
//!
//! A terminal renders text in columns. Escape sequences occupy no columns at
//! all, most characters occupy one column, and full-width characters, notably
//! CJK ideographs, Hangul syllables, and the fullwidth forms, occupy two. This
//! module strips escape sequences with [`strip_ansi`] and measures the columns
//! that remain with [`visible_width`].
//!
//! Widths are per code point. Combining marks and emoji sequences are not
//! treated specially.
//!
//! # Example
//!
//! ```
//! # use prettytext::width::{strip_ansi, visible_width};
//! let styled = "\x1b[1m你好\x1b[22m, world";
//! assert_eq!(strip_ansi(styled), "你好, world");
//! assert_eq!(visible_width(styled), 11);
//! ```

use std::borrow::Cow;

use crate::scan::{Scanner, Token};

/// Determine whether the code point occupies two columns.
///
/// The ranges cover CJK radicals, symbols, punctuation, strokes, and
/// compatibility characters, Hiragana and Katakana, Hangul compatibility jamo
/// and syllables, the CJK unified ideographs including extensions, the CJK
/// compatibility ideographs and forms, and the fullwidth forms and signs.
pub const fn is_full_width(c: char) -> bool {
    matches!(
        c as u32,
        0x2e80..=0x2fdf      // CJK Radicals Supplement, Kangxi Radicals
        | 0x2ff0..=0x303f    // Ideographic Description, CJK Symbols and Punctuation
        | 0x3040..=0x30ff    // Hiragana, Katakana
        | 0x3130..=0x318f    // Hangul Compatibility Jamo
        | 0x31c0..=0x31ff    // CJK Strokes, Katakana Phonetic Extensions
        | 0x3200..=0x33ff    // Enclosed CJK Letters and Months, CJK Compatibility
        | 0x3400..=0x4dbf    // CJK Unified Ideographs Extension A
        | 0x4e00..=0x9fff    // CJK Unified Ideographs
        | 0xac00..=0xd7af    // Hangul Syllables
        | 0xf900..=0xfaff    // CJK Compatibility Ideographs
        | 0xfe30..=0xfe4f    // CJK Compatibility Forms
        | 0xff00..=0xff60    // Fullwidth Forms
        | 0xffe0..=0xffe6    // Fullwidth Signs
        | 0x20000..=0x2fffd  // CJK Unified Ideographs Extensions B–F, Supplement
        | 0x30000..=0x3fffd  // CJK Unified Ideographs Extensions G–H
    )
}

/// Determine the number of columns the character occupies, i.e., 1 or 2.
#[inline]
pub const fn char_width(c: char) -> usize {
    if is_full_width(c) {
        2
    } else {
        1
    }
}

/// Determine the number of columns occupied by text without escape sequences.
///
/// Unlike [`visible_width`], this function does not look for escape sequences
/// and counts every character, including ESC.
pub fn plain_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Remove the escape sequences found in one scan of the text.
///
/// This function returns `None` if the text contains no escape sequences.
fn strip_once(text: &str) -> Option<String> {
    let mut result = String::with_capacity(text.len());
    let mut found = false;
    for token in Scanner::new(text) {
        match token {
            Token::Text(run) => result.push_str(run),
            Token::Sequence(_) => found = true,
        }
    }
    found.then_some(result)
}

/// Remove all escape sequences from the text.
///
/// The result borrows the text if it contains no escape sequences.
pub fn strip_ansi_cow(text: &str) -> Cow<'_, str> {
    let Some(mut stripped) = strip_once(text) else {
        return Cow::Borrowed(text);
    };

    // A lone ESC followed by a removed sequence may start a new sequence.
    while let Some(again) = strip_once(&stripped) {
        stripped = again;
    }
    Cow::Owned(stripped)
}

/// Remove all escape sequences from the text.
///
/// This function removes control sequences (`ESC [ … final`) and operating
/// system commands (`ESC ] … BEL` or `ESC ] … ESC \`). It leaves everything
/// else untouched, including whitespace, newlines, and any ESC that does not
/// start a well-formed sequence. The result contains no escape sequences,
/// even where removing one sequence brings an ESC next to the remains of
/// another. Hence stripping stripped text is a no-op.
pub fn strip_ansi(text: &str) -> String {
    strip_ansi_cow(text).into_owned()
}

/// Determine the visible width of a single line of text.
///
/// This function strips escape sequences and adds up [`char_width`] for the
/// remaining characters. It does not treat newlines specially, so callers
/// should split multi-line text before measuring it.
pub fn visible_width(text: &str) -> usize {
    plain_width(&strip_ansi_cow(text))
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_char_width() {
        assert_eq!(char_width('a'), 1);
        assert_eq!(char_width(' '), 1);
        assert_eq!(char_width('\x1b'), 1);
        assert_eq!(char_width('é'), 1);
        assert_eq!(char_width('你'), 2);
        assert_eq!(char_width('ひ'), 2);
        assert_eq!(char_width('カ'), 2);
        assert_eq!(char_width('한'), 2);
        assert_eq!(char_width('ㄱ'), 2);
        assert_eq!(char_width('。'), 2);
        assert_eq!(char_width('Ａ'), 2);
        assert_eq!(char_width('\u{fe30}'), 2);
        assert_eq!(char_width('𠀀'), 2);
    }

    #[test]
    fn test_strip_ansi() {
        assert_eq!(strip_ansi(""), "");
        assert_eq!(strip_ansi("plain"), "plain");
        assert!(matches!(strip_ansi_cow("plain"), Cow::Borrowed("plain")));
        assert_eq!(strip_ansi("\x1b[1mbold\x1b[22m"), "bold");
        assert_eq!(strip_ansi("\x1b[38;5;208mor\x1b[39mange"), "orange");
        assert_eq!(strip_ansi("a\x1b[2Kb\x1b[3Ac"), "abc");
        assert_eq!(
            strip_ansi("\x1b]8;;https://example.com\x1b\\link\x1b]8;;\x1b\\"),
            "link"
        );
        assert_eq!(strip_ansi(" \x1b[1m\n\t \x1b[0m"), " \n\t ");
        assert_eq!(strip_ansi("\x1b[1"), "\x1b[1");
        assert_eq!(strip_ansi("\x1b\x1b[1mx"), "\x1bx");
    }

    #[test]
    fn test_strip_exposed_sequences() {
        // Removing the inner sequence turns the lone ESC into a sequence.
        let text = "\x1b\x1b[1m[2m";
        assert_eq!(strip_ansi(text), "");
        assert_eq!(visible_width(text), 0);
        assert_eq!(visible_width(&strip_ansi(text)), visible_width(text));

        assert_eq!(strip_ansi("a\x1b\x1b\x1b[1m[2m[3mb"), "ab");
        assert_eq!(strip_ansi("\x1b\x1b[1m(B"), "\x1b(B");
    }

    #[test]
    fn test_visible_width() {
        assert_eq!(visible_width(""), 0);
        assert_eq!(visible_width("hello"), 5);
        assert_eq!(visible_width("\u{4f60}\u{597d}"), 4);
        assert_eq!(visible_width("\x1b[31m\u{4f60}\x1b[39mx"), 3);
        assert_eq!(visible_width("\x1b[0m"), 0);
        // Malformed sequences count as text.
        assert_eq!(visible_width("\x1b[1"), 3);
    }

    proptest! {
        #[test]
        fn strip_preserves_width(text in "(\\PC|\x1b|\x07|\\[|m|\x1b\\[[0-9;]{0,6}m|\x1b\\]8;;\x07)*") {
            let stripped = strip_ansi(&text);
            prop_assert_eq!(visible_width(&stripped), visible_width(&text));
            prop_assert_eq!(strip_ansi(&stripped), stripped.clone());
        }

        #[test]
        fn plain_text_is_unchanged(text in "[^\x1b]*") {
            prop_assert_eq!(strip_ansi(&text), text.clone());
            prop_assert_eq!(visible_width(&text), plain_width(&text));
        }
    }
}
