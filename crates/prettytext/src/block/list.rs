use crate::pad::pad_start;
use crate::width::visible_width;

/// The horizontal layout shared by all items of a list.
#[derive(Debug)]
struct ListLayout {
    indent: usize,
    /// The width of the marker column.
    marker_width: usize,
    marker_gap: usize,
}

impl ListLayout {
    /// Render one item, which may span several lines.
    ///
    /// The first line starts with the marker. Continuation lines start with
    /// enough spaces to line up under the first line's content.
    fn render(&self, lines: &mut Vec<String>, marker: &str, item: &str) {
        let mut item_lines = item.split('\n');
        let first = item_lines.next().unwrap_or_default();

        let mut line = String::with_capacity(self.indent + marker.len() + self.marker_gap + first.len());
        line.extend(core::iter::repeat(' ').take(self.indent));
        line.push_str(marker);
        line.extend(core::iter::repeat(' ').take(self.marker_gap));
        line.push_str(first);
        lines.push(line);

        let hang = self.indent + self.marker_width + self.marker_gap;
        for continuation in item_lines {
            let mut line = String::with_capacity(hang + continuation.len());
            line.extend(core::iter::repeat(' ').take(hang));
            line.push_str(continuation);
            lines.push(line);
        }
    }
}

// ------------------------------------------------------------------------------------------------

/// A builder of unordered list options.
#[derive(Debug)]
pub struct UnorderedListOptionBuilder(UnorderedListOptions);

impl UnorderedListOptionBuilder {
    /// Set the marker, which may be styled.
    pub fn marker<S: Into<String>>(&mut self, marker: S) -> &mut Self {
        self.0.marker = marker.into();
        self
    }

    /// Set the number of spaces between marker and content.
    pub fn marker_gap(&mut self, gap: usize) -> &mut Self {
        self.0.marker_gap = gap;
        self
    }

    /// Set the number of spaces before the marker.
    pub fn indent(&mut self, indent: usize) -> &mut Self {
        self.0.indent = indent;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> UnorderedListOptions {
        self.0.clone()
    }
}

/// The options for [`unordered_list`].
///
/// By default, items are marked with a bullet `•` followed by one space and
/// are not indented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnorderedListOptions {
    marker: String,
    marker_gap: usize,
    indent: usize,
}

impl Default for UnorderedListOptions {
    fn default() -> Self {
        Self {
            marker: "•".to_owned(),
            marker_gap: 1,
            indent: 0,
        }
    }
}

impl UnorderedListOptions {
    /// Create a new builder with the default option values.
    pub fn builder() -> UnorderedListOptionBuilder {
        UnorderedListOptionBuilder(Self::default())
    }

    /// Get the marker.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Get the number of spaces between marker and content.
    pub fn marker_gap(&self) -> usize {
        self.marker_gap
    }

    /// Get the number of spaces before the marker.
    pub fn indent(&self) -> usize {
        self.indent
    }
}

/// Render the items as an unordered list.
///
/// ```
/// # use prettytext::block::{unordered_list, UnorderedListOptions};
/// let list = unordered_list(&["alpha", "beta"], &UnorderedListOptions::default());
/// assert_eq!(list, "• alpha\n• beta");
/// ```
pub fn unordered_list<S: AsRef<str>>(items: &[S], options: &UnorderedListOptions) -> String {
    let layout = ListLayout {
        indent: options.indent,
        marker_width: visible_width(&options.marker),
        marker_gap: options.marker_gap,
    };

    let mut lines = Vec::with_capacity(items.len());
    for item in items {
        layout.render(&mut lines, &options.marker, item.as_ref());
    }
    lines.join("\n")
}

// ------------------------------------------------------------------------------------------------

/// A builder of ordered list options.
#[derive(Debug)]
pub struct OrderedListOptionBuilder(OrderedListOptions);

impl OrderedListOptionBuilder {
    /// Set the number of the first item.
    pub fn start(&mut self, start: usize) -> &mut Self {
        self.0.start = start;
        self
    }

    /// Set the number of spaces between marker and content.
    pub fn marker_gap(&mut self, gap: usize) -> &mut Self {
        self.0.marker_gap = gap;
        self
    }

    /// Set the number of spaces before the marker.
    pub fn indent(&mut self, indent: usize) -> &mut Self {
        self.0.indent = indent;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> OrderedListOptions {
        self.0.clone()
    }
}

/// The options for [`ordered_list`].
///
/// By default, numbering starts with 1, markers are followed by one space,
/// and items are not indented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderedListOptions {
    start: usize,
    marker_gap: usize,
    indent: usize,
}

impl Default for OrderedListOptions {
    fn default() -> Self {
        Self {
            start: 1,
            marker_gap: 1,
            indent: 0,
        }
    }
}

impl OrderedListOptions {
    /// Create a new builder with the default option values.
    pub fn builder() -> OrderedListOptionBuilder {
        OrderedListOptionBuilder(Self::default())
    }

    /// Get the number of the first item.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the number of spaces between marker and content.
    pub fn marker_gap(&self) -> usize {
        self.marker_gap
    }

    /// Get the number of spaces before the marker.
    pub fn indent(&self) -> usize {
        self.indent
    }
}

/// Render the items as a numbered list.
///
/// Markers have the form `7.`. They are right-aligned to the width of the
/// last marker, so that all items' content is left-aligned. Numbering
/// continues past `usize::MAX` instead of wrapping around.
///
/// ```
/// # use prettytext::block::{ordered_list, OrderedListOptions};
/// let options = OrderedListOptions::builder().start(9).build();
/// let list = ordered_list(&["nine", "ten"], &options);
/// assert_eq!(list, " 9. nine\n10. ten");
/// ```
pub fn ordered_list<S: AsRef<str>>(items: &[S], options: &OrderedListOptions) -> String {
    let Some(last) = items.len().checked_sub(1) else {
        return String::new();
    };

    // u128 holds the sum of any two usizes.
    let marker = |index: usize| format!("{}.", options.start as u128 + index as u128);
    let layout = ListLayout {
        indent: options.indent,
        marker_width: marker(last).len(),
        marker_gap: options.marker_gap,
    };

    let mut lines = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let marker = pad_start(&marker(index), layout.marker_width);
        layout.render(&mut lines, &marker, item.as_ref());
    }
    lines.join("\n")
}

// ------------------------------------------------------------------------------------------------

/// An item of a task list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskItem {
    /// The item's content.
    pub text: String,
    /// Whether the task has been completed.
    pub checked: bool,
}

impl TaskItem {
    /// Create a new task item.
    pub fn new<S: Into<String>>(text: S, checked: bool) -> Self {
        Self {
            text: text.into(),
            checked,
        }
    }

    /// Create a new, completed task item.
    pub fn done<S: Into<String>>(text: S) -> Self {
        Self::new(text, true)
    }

    /// Create a new, open task item.
    pub fn todo<S: Into<String>>(text: S) -> Self {
        Self::new(text, false)
    }
}

/// A builder of task list options.
#[derive(Debug)]
pub struct TaskListOptionBuilder(TaskListOptions);

impl TaskListOptionBuilder {
    /// Set the marker for completed tasks, which may be styled.
    pub fn checked_marker<S: Into<String>>(&mut self, marker: S) -> &mut Self {
        self.0.checked_marker = marker.into();
        self
    }

    /// Set the marker for open tasks, which may be styled.
    pub fn unchecked_marker<S: Into<String>>(&mut self, marker: S) -> &mut Self {
        self.0.unchecked_marker = marker.into();
        self
    }

    /// Set the number of spaces between marker and content.
    pub fn marker_gap(&mut self, gap: usize) -> &mut Self {
        self.0.marker_gap = gap;
        self
    }

    /// Set the number of spaces before the marker.
    pub fn indent(&mut self, indent: usize) -> &mut Self {
        self.0.indent = indent;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> TaskListOptions {
        self.0.clone()
    }
}

/// The options for [`task_list`].
///
/// By default, completed tasks are marked `[x]`, open tasks `[ ]`, markers
/// are followed by one space, and items are not indented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskListOptions {
    checked_marker: String,
    unchecked_marker: String,
    marker_gap: usize,
    indent: usize,
}

impl Default for TaskListOptions {
    fn default() -> Self {
        Self {
            checked_marker: "[x]".to_owned(),
            unchecked_marker: "[ ]".to_owned(),
            marker_gap: 1,
            indent: 0,
        }
    }
}

impl TaskListOptions {
    /// Create a new builder with the default option values.
    pub fn builder() -> TaskListOptionBuilder {
        TaskListOptionBuilder(Self::default())
    }

    /// Get the marker for completed tasks.
    pub fn checked_marker(&self) -> &str {
        &self.checked_marker
    }

    /// Get the marker for open tasks.
    pub fn unchecked_marker(&self) -> &str {
        &self.unchecked_marker
    }

    /// Get the number of spaces between marker and content.
    pub fn marker_gap(&self) -> usize {
        self.marker_gap
    }

    /// Get the number of spaces before the marker.
    pub fn indent(&self) -> usize {
        self.indent
    }
}

/// Render the items as a task list.
///
/// Each item's marker depends on whether it is checked. Continuation lines
/// are indented by the width of the wider marker.
///
/// ```
/// # use prettytext::block::{task_list, TaskItem, TaskListOptions};
/// let items = [TaskItem::done("write"), TaskItem::todo("test")];
/// assert_eq!(task_list(&items, &TaskListOptions::default()), "[x] write\n[ ] test");
/// ```
pub fn task_list(items: &[TaskItem], options: &TaskListOptions) -> String {
    let layout = ListLayout {
        indent: options.indent,
        marker_width: visible_width(&options.checked_marker)
            .max(visible_width(&options.unchecked_marker)),
        marker_gap: options.marker_gap,
    };

    let mut lines = Vec::with_capacity(items.len());
    for item in items {
        let marker = if item.checked {
            &options.checked_marker
        } else {
            &options.unchecked_marker
        };
        layout.render(&mut lines, marker, &item.text);
    }
    lines.join("\n")
}
