use crate::pad::{align, Alignment};
use crate::width::visible_width;

/// A builder of table options.
#[derive(Debug)]
pub struct TableOptionBuilder(TableOptions);

impl TableOptionBuilder {
    /// Set the alignments of the leading columns.
    ///
    /// Columns without alignment are left-aligned.
    pub fn align<I: IntoIterator<Item = Alignment>>(&mut self, alignments: I) -> &mut Self {
        self.0.align = alignments.into_iter().collect();
        self
    }

    /// Set the minimum width of every column, not counting padding.
    pub fn min_column_width(&mut self, width: usize) -> &mut Self {
        self.0.min_column_width = width;
        self
    }

    /// Set the number of spaces on either side of a cell.
    pub fn cell_padding(&mut self, padding: usize) -> &mut Self {
        self.0.cell_padding = padding;
        self
    }

    /// Set the character filling the separator between header and body.
    pub fn separator_char(&mut self, c: char) -> &mut Self {
        self.0.separator_char = c;
        self
    }

    /// Set the character separating columns.
    pub fn border_char(&mut self, c: char) -> &mut Self {
        self.0.border_char = c;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> TableOptions {
        self.0.clone()
    }
}

/// The options for [`table`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableOptions {
    align: Vec<Alignment>,
    min_column_width: usize,
    cell_padding: usize,
    separator_char: char,
    border_char: char,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            align: Vec::new(),
            min_column_width: 0,
            cell_padding: 1,
            separator_char: '-',
            border_char: '|',
        }
    }
}

impl TableOptions {
    /// Create a new builder with the default option values.
    pub fn builder() -> TableOptionBuilder {
        TableOptionBuilder(Self::default())
    }

    /// Get the alignment for the column with the given index.
    pub fn alignment(&self, column: usize) -> Alignment {
        self.align.get(column).copied().unwrap_or_default()
    }

    /// Get the minimum column width.
    pub fn min_column_width(&self) -> usize {
        self.min_column_width
    }

    /// Get the cell padding.
    pub fn cell_padding(&self) -> usize {
        self.cell_padding
    }

    /// Get the separator character.
    pub fn separator_char(&self) -> char {
        self.separator_char
    }

    /// Get the border character.
    pub fn border_char(&self) -> char {
        self.border_char
    }
}

// ------------------------------------------------------------------------------------------------

/// The column widths and alignments of a table.
#[derive(Debug)]
struct TableLayout<'o> {
    widths: Vec<usize>,
    options: &'o TableOptions,
}

impl<'o> TableLayout<'o> {
    fn new<H, C, R>(headers: &[H], rows: &[R], options: &'o TableOptions) -> Self
    where
        H: AsRef<str>,
        C: AsRef<str>,
        R: AsRef<[C]>,
    {
        let columns = rows
            .iter()
            .map(|row| row.as_ref().len())
            .fold(headers.len(), usize::max);

        let mut widths = vec![options.min_column_width; columns];
        let mut measure = |column: usize, cell: &str| {
            if let Some(width) = widths.get_mut(column) {
                *width = (*width).max(visible_width(cell));
            }
        };

        for (column, header) in headers.iter().enumerate() {
            measure(column, header.as_ref());
        }
        for row in rows {
            for (column, cell) in row.as_ref().iter().enumerate() {
                measure(column, cell.as_ref());
            }
        }

        Self { widths, options }
    }

    /// Render a row. Missing cells are empty.
    fn row<'c, I: Iterator<Item = &'c str>>(&self, cells: I) -> String {
        let border = self.options.border_char;
        let padding = self.options.cell_padding;

        let mut line = String::new();
        line.push(border);
        let mut cells = cells.fuse();
        for (column, &width) in self.widths.iter().enumerate() {
            let cell = cells.next().unwrap_or_default();
            line.extend(core::iter::repeat(' ').take(padding));
            line.push_str(&align(cell, width, self.options.alignment(column)));
            line.extend(core::iter::repeat(' ').take(padding));
            line.push(border);
        }
        line
    }

    fn separator(&self) -> String {
        let border = self.options.border_char;
        let padding = 2 * self.options.cell_padding;

        let mut line = String::new();
        line.push(border);
        for &width in &self.widths {
            line.extend(core::iter::repeat(self.options.separator_char).take(width + padding));
            line.push(border);
        }
        line
    }
}

/// Render a table with a header row and zero or more body rows.
///
/// Each column is as wide as its widest cell or the minimum column width,
/// whichever is larger, with cells measured by their visible width. The
/// number of columns is the larger of the header count and the longest row.
/// Missing header and body cells are empty. If there are no columns at all,
/// the result is empty.
///
/// Cells should not contain newlines.
///
/// ```
/// # use prettytext::block::{table, TableOptions};
/// let rendered = table(
///     &["Name", "Age"],
///     &[["Alice", "30"], ["Bob", "25"]],
///     &TableOptions::default(),
/// );
/// assert_eq!(
///     rendered,
///     "| Name  | Age |\n|-------|-----|\n| Alice | 30  |\n| Bob   | 25  |"
/// );
/// ```
pub fn table<H, C, R>(headers: &[H], rows: &[R], options: &TableOptions) -> String
where
    H: AsRef<str>,
    C: AsRef<str>,
    R: AsRef<[C]>,
{
    let layout = TableLayout::new(headers, rows, options);
    if layout.widths.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(layout.row(headers.iter().map(AsRef::as_ref)));
    lines.push(layout.separator());
    for row in rows {
        lines.push(layout.row(row.as_ref().iter().map(AsRef::as_ref)));
    }
    lines.join("\n")
}

#[cfg(test)]
mod test {
    use super::*;

    const NO_ROWS: [[&str; 0]; 0] = [];

    #[test]
    fn test_table() {
        assert_eq!(
            table(
                &["Name", "Age"],
                &[["Alice", "30"], ["Bob", "25"]],
                &TableOptions::default()
            ),
            "| Name  | Age |\n|-------|-----|\n| Alice | 30  |\n| Bob   | 25  |"
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(table::<&str, &str, _>(&[], &NO_ROWS, &TableOptions::default()), "");
        assert_eq!(table(&["A"], &NO_ROWS, &TableOptions::default()), "| A |\n|---|");
    }

    #[test]
    fn test_ragged() {
        let rows = vec![vec!["1"], vec!["2", "3", "4"]];
        assert_eq!(
            table(&["a", "b"], &rows, &TableOptions::default()),
            "| a | b |   |\n|---|---|---|\n| 1 |   |   |\n| 2 | 3 | 4 |"
        );
    }

    #[test]
    fn test_options() {
        let options = TableOptions::builder()
            .align([Alignment::Right, Alignment::Center])
            .min_column_width(4)
            .cell_padding(0)
            .separator_char('=')
            .border_char(':')
            .build();
        assert_eq!(options.alignment(0), Alignment::Right);
        assert_eq!(options.alignment(7), Alignment::Left);

        assert_eq!(
            table(&["n", "x", "y"], &[["1", "2", "3"]], &options),
            ":   n: x  :y   :\n:====:====:====:\n:   1: 2  :3   :"
        );
    }

    #[test]
    fn test_visible_widths() {
        let rows = [["\x1b[1m你好\x1b[22m", "ok"]];
        assert_eq!(
            table(&["word", "status"], &rows, &TableOptions::default()),
            "| word | status |\n|------|--------|\n| \x1b[1m你好\x1b[22m | ok     |"
        );
    }
}
