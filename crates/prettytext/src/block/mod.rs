//! Rendering lists and tables.
//!
//! This module lays out blocks of text, i.e., bulleted, numbered, and task
//! lists as well as tables. Every renderer measures text by its visible width,
//! so markers and columns line up even if items contain escape sequences or
//! full-width characters. Renderers return the lines of the block joined by
//! newlines, without a trailing newline, and return the empty string for empty
//! input.
//!
//! Each renderer takes an options object, which is created with a builder:
//!
//! ```
//! # use prettytext::block::{unordered_list, UnorderedListOptions};
//! let options = UnorderedListOptions::builder()
//!     .marker("*")
//!     .indent(2)
//!     .build();
//!
//! assert_eq!(
//!     unordered_list(&["first", "second\nline"], &options),
//!     "  * first\n  * second\n    line"
//! );
//! ```

mod list;
mod table;

pub use list::{
    ordered_list, task_list, unordered_list, OrderedListOptionBuilder, OrderedListOptions,
    TaskItem, TaskListOptionBuilder, TaskListOptions, UnorderedListOptionBuilder,
    UnorderedListOptions,
};
pub use table::{table, TableOptionBuilder, TableOptions};
