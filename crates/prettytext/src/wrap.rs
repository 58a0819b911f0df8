//! Wrapping styled text to a column budget.
//!
//! [`wrap_text`] reflows text so that no line is wider than the given number
//! of columns, while keeping escape sequences intact and styles continuous
//! across the line breaks it inserts. It processes each line of the input in
//! a single left-to-right scan. Along the way, it tracks the SGR sequences in
//! effect, remembers the most recent space as the preferred point for breaking
//! the line, and counts the columns of text with
//! [`char_width`](crate::width::char_width). Escape sequences count for
//! nothing.
//!
//! When a line break falls into styled text, the line ends with
//! [`RESET`](crate::escape::RESET) and the next line starts by reopening all
//! SGR sequences in effect at the break. Consequently, every inserted line is
//! self-contained and can be printed on its own, for example, next to a table
//! border.
//!
//! Existing newlines are preserved. Styles in effect at the end of one input
//! line carry over to the next one, just as they would in a terminal.
//!
//! The wrapper does not interpret SGR parameters. It clears the active
//! sequences on a reset, i.e., `ESC[0m` or `ESC[m`, and otherwise remembers
//! every SGR sequence in order, including close sequences such as `ESC[22m`.
//! Replaying them restores the correct appearance. But once a style has been
//! opened and closed on an input line, every later break still ends with
//! [`RESET`](crate::escape::RESET) and reopens with both sequences, even if
//! the text at the break is unstyled:
//!
//! ```
//! # use prettytext::wrap::wrap_text;
//! assert_eq!(
//!     wrap_text("\x1b[1mbold\x1b[22m plain", 5),
//!     "\x1b[1mbold\x1b[22m\x1b[0m\n\x1b[1m\x1b[22mplain"
//! );
//! ```
//!
//! # Example
//!
//! ```
//! # use prettytext::wrap::{wrap_text, wrap_text_with, WrapOptions};
//! assert_eq!(wrap_text("hello world", 7), "hello\nworld");
//! assert_eq!(wrap_text("abcdefghij", 5), "abcde\nfghij");
//!
//! let options = WrapOptions::builder().word_break(false).build();
//! assert_eq!(wrap_text_with("hello world", 7, &options), "hello w\norld");
//!
//! assert_eq!(
//!     wrap_text("\x1b[1mhello world\x1b[22m", 7),
//!     "\x1b[1mhello\x1b[0m\n\x1b[1mworld\x1b[22m"
//! );
//! ```

use crate::escape::RESET;
use crate::scan::{Scanner, Sequence, Token};
use crate::width::char_width;

/// A builder of wrap options.
#[derive(Debug)]
pub struct WrapOptionBuilder(WrapOptions);

impl WrapOptionBuilder {
    /// Set whether to prefer breaking lines at spaces.
    ///
    /// If enabled, which is the default, the wrapper breaks lines at the most
    /// recent space and only breaks words that are too long for a line. If
    /// disabled, the wrapper fills each line to the last column and breaks
    /// wherever the budget runs out.
    pub fn word_break(&mut self, word_break: bool) -> &mut Self {
        self.0.word_break = word_break;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> WrapOptions {
        self.0.clone()
    }
}

/// The options for wrapping text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrapOptions {
    word_break: bool,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self { word_break: true }
    }
}

impl WrapOptions {
    /// Create a new builder with the default option values.
    pub fn builder() -> WrapOptionBuilder {
        WrapOptionBuilder(Self::default())
    }

    /// Determine whether to prefer breaking lines at spaces.
    pub fn word_break(&self) -> bool {
        self.word_break
    }
}

// ------------------------------------------------------------------------------------------------

/// The most recent point for breaking a line, i.e., the most recent space.
#[derive(Debug)]
struct Breakpoint<'t> {
    /// The buffer length just before the space.
    length: usize,
    /// The columns just before the space.
    columns: usize,
    /// The SGR sequences in effect at the space.
    active: Vec<&'t str>,
}

/// The state of wrapping text.
#[derive(Debug)]
struct WrapCursor<'t> {
    width: usize,
    word_break: bool,
    /// The completed lines.
    lines: Vec<String>,
    /// The line being assembled.
    buffer: String,
    /// The visible columns in the buffer.
    columns: usize,
    /// The SGR sequences in effect, in order of appearance.
    active: Vec<&'t str>,
    breakpoint: Option<Breakpoint<'t>>,
}

impl<'t> WrapCursor<'t> {
    fn new(width: usize, options: &WrapOptions) -> Self {
        Self {
            width,
            word_break: options.word_break(),
            lines: Vec::new(),
            buffer: String::new(),
            columns: 0,
            active: Vec::new(),
            breakpoint: None,
        }
    }

    /// Wrap one line of input. The active styles carry over between lines.
    fn wrap_line(&mut self, line: &'t str) {
        for token in Scanner::new(line) {
            match token {
                Token::Sequence(sequence) => self.copy_sequence(sequence),
                Token::Text(text) => {
                    for c in text.chars() {
                        self.place(c);
                    }
                }
            }
        }

        // Flush even an empty buffer, which preserves blank lines.
        self.lines.push(core::mem::take(&mut self.buffer));
        self.columns = 0;
        self.breakpoint = None;
    }

    fn copy_sequence(&mut self, sequence: Sequence<'t>) {
        self.buffer.push_str(sequence.as_str());
        if sequence.is_reset() {
            self.active.clear();
        } else if sequence.is_sgr() {
            self.active.push(sequence.as_str());
        }
    }

    #[inline]
    fn fits(&self, width: usize) -> bool {
        self.columns + width <= self.width
    }

    fn place(&mut self, c: char) {
        let width = char_width(c);
        if self.fits(width) {
            self.push(c, width);
            return;
        }

        if self.word_break {
            if c == ' ' {
                // The overflowing space itself is the break.
                self.force_break();
                return;
            }

            if let Some(breakpoint) = self.breakpoint.take() {
                self.break_at(breakpoint);
                if self.fits(width) {
                    self.push(c, width);
                    return;
                }
            }
        }

        // A character wider than the entire budget still needs a line.
        if 0 < self.columns {
            self.force_break();
        }
        self.push(c, width);
    }

    fn push(&mut self, c: char, width: usize) {
        self.buffer.push(c);
        self.columns += width;

        if self.word_break && c == ' ' {
            self.breakpoint = Some(Breakpoint {
                length: self.buffer.len() - 1,
                columns: self.columns - 1,
                active: self.active.clone(),
            });
        }
    }

    /// Complete the buffer as a line, resetting styles if necessary.
    fn complete_line(&mut self, styled: bool) {
        if styled {
            self.buffer.push_str(RESET);
        }
        self.lines.push(core::mem::take(&mut self.buffer));
    }

    /// Break the line at the breakpoint, dropping the space.
    fn break_at(&mut self, breakpoint: Breakpoint<'t>) {
        let rest = self.buffer.split_off(breakpoint.length + 1);
        self.buffer.truncate(breakpoint.length);
        self.complete_line(!breakpoint.active.is_empty());

        self.buffer = breakpoint.active.concat();
        self.buffer.push_str(&rest);
        self.columns -= breakpoint.columns + 1;
    }

    /// Break the line right here.
    fn force_break(&mut self) {
        self.complete_line(!self.active.is_empty());
        self.buffer = self.active.concat();
        self.columns = 0;
        self.breakpoint = None;
    }
}

/// Wrap the text to the given width with the given options.
///
/// A width of zero disables wrapping and returns the text unchanged.
pub fn wrap_text_with(text: &str, width: usize, options: &WrapOptions) -> String {
    if width == 0 {
        return text.to_owned();
    }

    let mut cursor = WrapCursor::new(width, options);
    for line in text.split('\n') {
        cursor.wrap_line(line);
    }
    cursor.lines.join("\n")
}

/// Wrap the text to the given width, preferably breaking lines at spaces.
///
/// A width of zero disables wrapping and returns the text unchanged.
pub fn wrap_text(text: &str, width: usize) -> String {
    wrap_text_with(text, width, &WrapOptions::default())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::width::{strip_ansi, visible_width};
    use proptest::prelude::*;

    fn hard() -> WrapOptions {
        WrapOptions::builder().word_break(false).build()
    }

    #[test]
    fn test_word_break() {
        assert_eq!(wrap_text("hello world", 7), "hello\nworld");
        assert_eq!(wrap_text("hello world", 11), "hello world");
        assert_eq!(wrap_text("hello world", 5), "hello\nworld");
        assert_eq!(
            wrap_text("the quick brown fox jumps", 10),
            "the quick\nbrown fox\njumps"
        );
        assert_eq!(wrap_text("a  b", 2), "a \nb");
        assert_eq!(wrap_text("abcdefg hij", 3), "abc\ndef\ng\nhij");
    }

    #[test]
    fn test_forced_break() {
        assert_eq!(wrap_text("abcdefghij", 5), "abcde\nfghij");
        assert_eq!(wrap_text("abcdefghijk", 5), "abcde\nfghij\nk");
        assert_eq!(wrap_text_with("hello world", 7, &hard()), "hello w\norld");
        assert_eq!(wrap_text_with("ab cd", 2, &hard()), "ab\n c\nd");
    }

    #[test]
    fn test_wide_characters() {
        assert_eq!(wrap_text("你好世界", 4), "你好\n世界");
        assert_eq!(wrap_text("你好世界", 5), "你好\n世界");
        assert_eq!(wrap_text("a你好", 4), "a你\n好");
        // A character wider than the budget gets its own line.
        assert_eq!(wrap_text("你好", 1), "你\n好");
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(wrap_text("hello world", 0), "hello world");
        assert_eq!(wrap_text("", 0), "");
    }

    #[test]
    fn test_existing_newlines() {
        assert_eq!(wrap_text("", 5), "");
        assert_eq!(wrap_text("one\n\ntwo", 5), "one\n\ntwo");
        assert_eq!(wrap_text("aaa bbb\nccc ddd", 4), "aaa\nbbb\nccc\nddd");
        assert_eq!(wrap_text("trailing\n", 20), "trailing\n");
    }

    #[test]
    fn test_styled() {
        assert_eq!(
            wrap_text("\x1b[1mhello world\x1b[22m", 7),
            "\x1b[1mhello\x1b[0m\n\x1b[1mworld\x1b[22m"
        );
        assert_eq!(
            wrap_text_with("\x1b[31mabcdef\x1b[39m", 3, &hard()),
            "\x1b[31mabc\x1b[0m\n\x1b[31mdef\x1b[39m"
        );

        // Styles opened after the breakpoint move along with the word.
        assert_eq!(
            wrap_text("aa \x1b[4mbbbb\x1b[24m", 4),
            "aa\n\x1b[4mbbbb\x1b[24m"
        );

        // A reset empties the active styles.
        assert_eq!(
            wrap_text("\x1b[1mab\x1b[0mcdef", 3),
            "\x1b[1mab\x1b[0mc\ndef"
        );

        // Escape sequences never count toward the width.
        assert_eq!(
            wrap_text("\x1b[1m\x1b[31mabc\x1b[39m\x1b[22m", 3),
            "\x1b[1m\x1b[31mabc\x1b[39m\x1b[22m"
        );
    }

    #[test]
    fn test_closed_styles_are_replayed() {
        assert_eq!(
            wrap_text("\x1b[1mbold\x1b[22m plain text here", 6),
            "\x1b[1mbold\x1b[22m\x1b[0m\n\
             \x1b[1m\x1b[22mplain\x1b[0m\n\
             \x1b[1m\x1b[22mtext\x1b[0m\n\
             \x1b[1m\x1b[22mhere"
        );

        // Only a reset forgets the replayed sequences.
        assert_eq!(
            wrap_text("\x1b[1mbold\x1b[22m\x1b[0m plain text", 6),
            "\x1b[1mbold\x1b[22m\x1b[0m\nplain\ntext"
        );
    }

    #[test]
    fn test_styles_span_newlines() {
        assert_eq!(
            wrap_text("\x1b[32mone\ntwo three\x1b[39m", 5),
            "\x1b[32mone\ntwo\x1b[0m\n\x1b[32mthree\x1b[39m"
        );
    }

    #[test]
    fn test_malformed_sequences_are_text() {
        assert_eq!(wrap_text("\x1b[1", 2), "\x1b[\n1");
    }

    proptest! {
        #[test]
        fn width_zero_is_identity(text in "\\PC*") {
            prop_assert_eq!(wrap_text(&text, 0), text.clone());
        }

        #[test]
        fn lines_fit(text in "[a-z ]{0,60}", width in 1usize..16) {
            for line in wrap_text(&text, width).split('\n') {
                prop_assert!(visible_width(line) <= width, "{:?} exceeds {}", line, width);
            }
        }

        #[test]
        fn only_spaces_are_lost(text in "[a-z ]{0,60}", width in 1usize..16) {
            let wrapped = wrap_text(&text, width);
            let expected: String = text.chars().filter(|c| *c != ' ').collect();
            let actual: String = wrapped.chars().filter(|c| *c != ' ' && *c != '\n').collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn styled_lines_are_self_contained(words in prop::collection::vec("[a-z]{1,6}", 1..8), width in 6usize..12) {
            let text = format!("\x1b[1m{}\x1b[22m", words.join(" "));
            let wrapped = wrap_text(&text, width);
            let lines: Vec<&str> = wrapped.split('\n').collect();
            for (index, line) in lines.iter().enumerate() {
                prop_assert!(line.starts_with("\x1b[1m"));
                if index + 1 < lines.len() {
                    prop_assert!(line.ends_with(RESET));
                }
                prop_assert!(visible_width(line) <= width);
            }
            prop_assert_eq!(
                strip_ansi(&wrapped).replace('\n', " "),
                words.join(" ")
            );
        }

        #[test]
        fn fitting_text_is_unchanged(text in "[a-z ]{0,10}") {
            prop_assert_eq!(wrap_text(&text, 10), text.clone());
        }
    }
}
