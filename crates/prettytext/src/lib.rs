//! # Pretty 📐 Text
//!
//! Prettytext styles, measures, wraps, and lays out text for terminals. It
//! treats escape sequences as what they are, invisible instructions to the
//! terminal, and counts columns the way terminals do, with full-width
//! characters occupying two. As a result, styled text can be padded, wrapped,
//! and arranged in lists and tables without anything getting out of line.
//!
//!
//! ## 1. Overview
//!
//! Prettytext's modules build on each other:
//!
//!   * The [`escape`] module defines the **catalog of open/close pairs** of ANSI
//!     escape sequences, i.e., [`AnsiPair`](escape::AnsiPair)s named by
//!     [`StyleCode`](escape::StyleCode)s.
//!   * The [`style`] module **applies and composes pairs** with [`apply_style`]
//!     and [`compose_styles`]. Its [`Styler`](style::Styler) decides once
//!     whether the environment supports styles and builds memoized
//!     [`Chain`](style::Chain)s of styles.
//!   * The [`scan`] module **tokenizes text** into text runs and escape
//!     sequences.
//!   * The [`width`] module **strips escape sequences** with [`strip_ansi`] and
//!     **measures visible width** with [`visible_width`].
//!   * The [`pad`] module **pads and aligns** text to a visible width.
//!   * The [`wrap`] module **wraps text** with [`wrap_text`] while keeping
//!     styles intact across line breaks.
//!   * The [`block`] module **renders lists and tables**.
//!
//!
//! ## 2. Styling Text
//!
//! The default [`styler()`] emits escape sequences only if standard output is
//! a terminal and `NO_COLOR` is not set. For predictable output, create a
//! styler with an explicit [`ColorMode`](style::ColorMode):
//!
//! ```
//! # use prettytext::style::{ColorMode, Styler};
//! let styler = Styler::new(ColorMode::Always);
//! let warning = styler.bold().yellow().paint("careful");
//! assert_eq!(warning, "\x1b[1m\x1b[33mcareful\x1b[39m\x1b[22m");
//!
//! let styler = Styler::new(ColorMode::Never);
//! assert_eq!(styler.bold().yellow().paint("careful"), "careful");
//! ```
//!
//!
//! ## 3. Laying Out Text
//!
//! Measuring, padding, and wrapping ignore escape sequences:
//!
//! ```
//! # use prettytext::{apply_style, escape::BOLD, pad_end, visible_width, wrap_text};
//! let bold = apply_style("wide 你好", &BOLD);
//! assert_eq!(visible_width(&bold), 9);
//! assert_eq!(pad_end(&bold, 10), format!("{} ", bold));
//! assert_eq!(
//!     wrap_text(&bold, 5),
//!     "\x1b[1mwide\x1b[0m\n\x1b[1m你好\x1b[22m"
//! );
//! ```
//!
//! Lists and tables line up their markers and columns accordingly:
//!
//! ```
//! # use prettytext::{table, block::TableOptions};
//! let rendered = table(&["Name", "Age"], &[["Alice", "30"]], &TableOptions::default());
//! assert_eq!(rendered, "| Name  | Age |\n|-------|-----|\n| Alice | 30  |");
//! ```

pub mod block;
pub mod error;
pub mod escape;
pub mod pad;
pub mod scan;
pub mod style;
mod util;
pub mod width;
pub mod wrap;

pub use block::{ordered_list, table, task_list, unordered_list};
pub use pad::{center, pad_end, pad_start};
pub use style::{apply_style, compose_styles, styler};
pub use width::{strip_ansi, visible_width};
pub use wrap::wrap_text;
