//! Applying, composing, and chaining styles.
//!
//! This module's free functions operate on [`AnsiPair`]s directly:
//! [`apply_style`] wraps text in a pair and [`compose_styles`] combines
//! several pairs into one. Both are unconditional. In contrast, a [`Styler`]
//! resolves once, at construction, whether the runtime environment supports
//! styled output, and then styles text only if it does.
//!
//!
//! # Nesting
//!
//! Several pairs in the catalog share their close sequence. For example,
//! [`BOLD`](crate::escape::BOLD) and [`DIM`](crate::escape::DIM) both end
//! with `ESC[22m`, and all foreground colors end with `ESC[39m`. Naively
//! nesting dim text inside bold text thus ends the bold text early. To avoid
//! that, [`apply_style`] reopens the pair after every interior occurrence of
//! its close sequence:
//!
//! ```
//! # use prettytext::escape::{BOLD, DIM};
//! # use prettytext::style::apply_style;
//! let inner = apply_style("soft", &DIM);
//! let outer = apply_style(&format!("start {} end", inner), &BOLD);
//! assert_eq!(
//!     outer,
//!     "\x1b[1mstart \x1b[2msoft\x1b[22m\x1b[1m end\x1b[22m"
//! );
//! ```
//!
//! This is a textual rule that looks for the close sequence as a substring.
//! It does not tokenize the text, unlike [`wrap`](crate::wrap).
//!
//!
//! # Chains
//!
//! A styler's methods named after catalog entries start a [`Chain`], and the
//! same methods on a chain extend it. Painting text with a chain applies all
//! styles, with the first-named style outermost:
//!
//! ```
//! # use prettytext::style::Styler;
//! let styler = Styler::enabled(true);
//! assert_eq!(
//!     styler.bold().red().paint("hi"),
//!     "\x1b[1m\x1b[31mhi\x1b[39m\x1b[22m"
//! );
//!
//! let plain = Styler::enabled(false);
//! assert_eq!(plain.bold().red().paint("hi"), "hi");
//! ```

mod capability;
mod chain;

pub use capability::{resolve_capability, ColorMode, EnvironmentSnapshot};
pub use chain::{styler, Chain, Styler};

use smallvec::SmallVec;

use crate::escape::AnsiPair;

/// Wrap the text in the pair, reopening the pair after every interior close.
///
/// Empty text stays empty, since styling nothing would only produce noise.
/// The identity pair leaves text unchanged.
///
/// If the text does not contain the pair's close sequence, stripping escape
/// sequences from the result yields the original text.
pub fn apply_style(text: &str, pair: &AnsiPair) -> String {
    if text.is_empty() {
        return String::new();
    } else if pair.is_identity() {
        return text.to_owned();
    }

    let (open, close) = (pair.open(), pair.close());
    let mut result = String::with_capacity(open.len() + text.len() + close.len());
    result.push_str(open);
    if close.is_empty() || !text.contains(close) {
        result.push_str(text);
    } else {
        let mut reopen = String::with_capacity(close.len() + open.len());
        reopen.push_str(close);
        reopen.push_str(open);
        result.push_str(&text.replace(close, &reopen));
    }
    result.push_str(close);
    result
}

/// Combine the pairs into one.
///
/// The combined pair opens all pairs in the given order and closes them in
/// reverse order, so that they nest properly. Combining no pairs results in
/// the [identity](AnsiPair::IDENTITY) pair.
///
/// ```
/// # use prettytext::escape::{BOLD, RED};
/// # use prettytext::style::compose_styles;
/// let alarm = compose_styles(&[&BOLD, &RED]);
/// assert_eq!(alarm.open(), "\x1b[1m\x1b[31m");
/// assert_eq!(alarm.close(), "\x1b[39m\x1b[22m");
/// ```
pub fn compose_styles(pairs: &[&AnsiPair]) -> AnsiPair {
    if pairs.is_empty() {
        return AnsiPair::IDENTITY;
    }

    let open: String = pairs.iter().map(|pair| pair.open()).collect();
    let closes: SmallVec<[&str; 4]> = pairs.iter().rev().map(|pair| pair.close()).collect();
    AnsiPair::from_parts(open, closes.concat())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::escape::{StyleCode, BG_BLUE, BOLD, DIM, ITALIC, RED, UNDERLINE};
    use crate::width::strip_ansi;
    use proptest::prelude::*;

    #[test]
    fn test_apply_style() {
        assert_eq!(apply_style("", &BOLD), "");
        assert_eq!(apply_style("hi", &BOLD), "\x1b[1mhi\x1b[22m");
        assert_eq!(apply_style("hi", &AnsiPair::IDENTITY), "hi");

        let inner = apply_style("soft", &DIM);
        assert_eq!(
            apply_style(&format!("start {} end", inner), &BOLD),
            "\x1b[1mstart \x1b[2msoft\x1b[22m\x1b[1m end\x1b[22m"
        );

        // Restyling already styled text.
        let once = apply_style("x", &RED);
        assert_eq!(apply_style(&once, &RED), "\x1b[31m\x1b[31mx\x1b[39m\x1b[31m\x1b[39m");

        // Unrelated close sequences are left alone.
        let underlined = apply_style("u", &UNDERLINE);
        assert_eq!(
            apply_style(&underlined, &ITALIC),
            "\x1b[3m\x1b[4mu\x1b[24m\x1b[23m"
        );
    }

    #[test]
    fn test_compose_styles() {
        assert_eq!(compose_styles(&[]), AnsiPair::IDENTITY);
        assert_eq!(compose_styles(&[&BOLD]), BOLD);

        let composed = compose_styles(&[&BOLD, &RED, &BG_BLUE]);
        assert_eq!(composed.open(), "\x1b[1m\x1b[31m\x1b[44m");
        assert_eq!(composed.close(), "\x1b[49m\x1b[39m\x1b[22m");
        assert_eq!(apply_style("!", &composed), "\x1b[1m\x1b[31m\x1b[44m!\x1b[49m\x1b[39m\x1b[22m");
    }

    fn any_code() -> impl Strategy<Value = StyleCode> {
        prop::sample::select(StyleCode::all().collect::<Vec<_>>())
    }

    proptest! {
        #[test]
        fn apply_style_preserves_text(text in "[^\x1b]{1,40}", code in any_code()) {
            let styled = apply_style(&text, code.pair());
            prop_assert!(styled.starts_with(code.pair().open()));
            prop_assert!(styled.ends_with(code.pair().close()));
            prop_assert_eq!(strip_ansi(&styled), text.clone());
        }

        #[test]
        fn compose_closes_in_reverse(first in any_code(), second in any_code()) {
            let composed = compose_styles(&[first.pair(), second.pair()]);
            prop_assert_eq!(
                composed.open(),
                format!("{}{}", first.pair().open(), second.pair().open())
            );
            prop_assert_eq!(
                composed.close(),
                format!("{}{}", second.pair().close(), first.pair().close())
            );
        }
    }
}
