//! Tokenizing text with embedded escape sequences.
//!
//! The [`Scanner`] splits a string into [`Token::Text`] and
//! [`Token::Sequence`] tokens. It recognizes the two families of escape
//! sequences that styled terminal output contains in practice:
//!
//!   * Control sequences starting with `ESC [`, followed by parameter bytes
//!     `0x30–0x3f`, intermediate bytes `0x20–0x2f`, and a final byte
//!     `0x40–0x7e`. SGR sequences such as `ESC[1m` belong to this family, as
//!     do cursor movement and erase sequences.
//!   * Operating system commands starting with `ESC ]` and terminated by
//!     either BEL or `ESC \`, as used for hyperlinks and window titles.
//!
//! Everything else is text. That includes an ESC that does not start a
//! well-formed sequence from either family, which is how unterminated or
//! otherwise malformed sequences degrade gracefully into visible characters.
//!
//! Both the [`width`](crate::width) and the [`wrap`](crate::wrap) modules use
//! this scanner. Wrapping copies the recognized sequences verbatim. Stripping,
//! in contrast, scans its own result again until no sequence remains, since
//! removing a sequence may join an unrecognized ESC with the bytes after it.
//!
//! # Example
//!
//! ```
//! # use prettytext::scan::{Scanner, Token};
//! let mut scanner = Scanner::new("\x1b[1mhi\x1b[22m");
//! assert!(matches!(scanner.next(), Some(Token::Sequence(s)) if s.is_sgr()));
//! assert_eq!(scanner.next(), Some(Token::Text("hi")));
//! assert!(matches!(scanner.next(), Some(Token::Sequence(s)) if s.as_str() == "\x1b[22m"));
//! assert_eq!(scanner.next(), None);
//! ```

mod machine;

use self::machine::{transition, Action, State};

const ESC: u8 = 0x1b;

/// The control introducing a recognized escape sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Control Sequence Introducer: `ESC [`
    CSI,
    /// Operating System Command: `ESC ]`
    OSC,
}

impl core::fmt::Display for Control {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::CSI => "\x1b[",
            Self::OSC => "\x1b]",
        })
    }
}

/// A recognized escape sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sequence<'t> {
    control: Control,
    text: &'t str,
}

impl<'t> Sequence<'t> {
    /// Get the control introducing this sequence.
    pub fn control(&self) -> Control {
        self.control
    }

    /// Get the complete sequence, including the introducing ESC.
    pub fn as_str(&self) -> &'t str {
        self.text
    }

    /// Get the sequence's parameters, i.e., the bytes between the introducing
    /// control and the final byte for CSI or the terminator for OSC.
    pub fn params(&self) -> &'t str {
        let body = &self.text[2..];
        match self.control {
            Control::CSI => &body[..body.len() - 1],
            Control::OSC => body
                .strip_suffix('\x07')
                .or_else(|| body.strip_suffix("\x1b\\"))
                .unwrap_or(body),
        }
    }

    /// Determine whether this sequence selects graphic rendition.
    ///
    /// SGR sequences are control sequences with final byte `m` and
    /// parameters drawn only from digits, colons, and semicolons. Private
    /// parameters or intermediate bytes disqualify a sequence.
    pub fn is_sgr(&self) -> bool {
        self.control == Control::CSI
            && self.text.ends_with('m')
            && self.params().bytes().all(|b| matches!(b, b'0'..=b'9' | b':' | b';'))
    }

    /// Determine whether this sequence resets all graphic rendition, i.e., is
    /// `ESC[0m` or its abbreviation `ESC[m`.
    pub fn is_reset(&self) -> bool {
        self.is_sgr() && matches!(self.params(), "" | "0")
    }
}

impl core::fmt::Display for Sequence<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.text)
    }
}

/// A text or escape sequence token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'t> {
    /// One or more characters without escape sequences.
    Text(&'t str),
    /// One recognized escape sequence.
    Sequence(Sequence<'t>),
}

impl<'t> Token<'t> {
    /// Get the token's underlying string slice.
    pub fn as_str(&self) -> &'t str {
        match self {
            Self::Text(text) => text,
            Self::Sequence(sequence) => sequence.as_str(),
        }
    }
}

// ------------------------------------------------------------------------------------------------

/// Try recognizing an escape sequence at the start of the given bytes.
///
/// The first byte must be an ESC. Upon success, this function returns the
/// sequence's control and length in bytes. Since every byte that completes a
/// sequence is ASCII, the length always falls on a character boundary.
fn recognize(bytes: &[u8]) -> Option<(Control, usize)> {
    let control = match bytes.get(1) {
        Some(b'[') => Control::CSI,
        Some(b']') => Control::OSC,
        _ => return None,
    };

    let mut state = State::Escape;
    for (index, &byte) in bytes.iter().enumerate().skip(1) {
        let (next, action) = transition(state, byte);
        match action {
            Action::RetainByte => state = next,
            Action::Dispatch => return Some((control, index + 1)),
            Action::AbortSequence => return None,
        }
    }

    // The input ended in the middle of the sequence.
    None
}

/// A scanner for text and escape sequences.
///
/// The scanner is an iterator over a string's [`Token`]s. It is zero-copy:
/// every token borrows from the scanned string. Consecutive characters without
/// recognized escape sequences are combined into a single text token.
#[derive(Clone, Debug)]
pub struct Scanner<'t> {
    text: &'t str,
    position: usize,
    /// The length of a sequence already recognized at `position`.
    pending: Option<(Control, usize)>,
}

impl<'t> Scanner<'t> {
    /// Create a new scanner for the given text.
    pub fn new(text: &'t str) -> Self {
        Self {
            text,
            position: 0,
            pending: None,
        }
    }

    /// Determine whether the scanner has consumed all text.
    pub fn is_done(&self) -> bool {
        self.text.len() <= self.position
    }
}

impl<'t> Iterator for Scanner<'t> {
    type Item = Token<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.text.get(self.position..)?;
        if rest.is_empty() {
            return None;
        }
        let bytes = rest.as_bytes();

        let mut end = 0;
        if bytes.first() == Some(&ESC) {
            if let Some((control, length)) = self.pending.take().or_else(|| recognize(bytes)) {
                self.position += length;
                return Some(Token::Sequence(Sequence {
                    control,
                    text: &rest[..length],
                }));
            }
            // A lone ESC is text.
            end = 1;
        }

        // Extend the text token up to the next escape sequence.
        loop {
            match bytes[end..].iter().position(|&b| b == ESC) {
                None => {
                    end = bytes.len();
                    break;
                }
                Some(offset) => {
                    end += offset;
                    if let Some(recognized) = recognize(&bytes[end..]) {
                        self.pending = Some(recognized);
                        break;
                    }
                    end += 1;
                }
            }
        }

        self.position += end;
        Some(Token::Text(&rest[..end]))
    }
}
