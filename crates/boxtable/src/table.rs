//! The bordered table.
//!
//! A [`Table`] owns its headers and rows. Column widths are computed once, in
//! [`Table::new`], from the style-stripped length of every header and cell.
//! Options only affect how those columns are drawn.
//!
//! # Example
//!
//! ```rust
//! use boxtable::Table;
//!
//! let table = Table::new(vec![vec!["1", "2"]], vec!["A", "B"]).unwrap();
//!
//! assert_eq!(
//!     table.render(),
//!     "┌───┬───┐\n\
//!      │ A │ B │\n\
//!      ├───┼───┤\n\
//!      │ 1 │ 2 │\n\
//!      └───┴───┘\n"
//! );
//! ```
//!
//! Options are chained on a mutable table:
//!
//! ```rust
//! use boxtable::Table;
//!
//! let mut table = Table::new(vec![vec!["1", "2"]], vec!["A", "B"]).unwrap();
//! table.set_is_ascii(true).set_padding_left(2).set_padding_right(0);
//!
//! assert_eq!(
//!     table.to_string(),
//!     "+---+---+\n\
//!      |  A|  B|\n\
//!      +---+---+\n\
//!      |  1|  2|\n\
//!      +---+---+\n"
//! );
//! ```

use std::fmt;
use std::io;

use crate::border::Role;
use crate::error::{Result, TableError};
use crate::options::TableOptions;
use crate::util::{bold, stripped_len};

/// A grid of text cells with one header per column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    content: Vec<Vec<String>>,
    headers: Vec<String>,
    /// Per-column content width, excluding padding.
    widths: Vec<usize>,
    options: TableOptions,
}

/// Which horizontal rule to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineType {
    Top,
    Middle,
    Bottom,
}

impl LineType {
    /// `(fill, left, joint, right)` roles for this rule.
    fn roles(self) -> (Role, Role, Role, Role) {
        match self {
            LineType::Top => (Role::Top, Role::TopLeft, Role::TopMid, Role::TopRight),
            LineType::Middle => (Role::Mid, Role::LeftMid, Role::MidMid, Role::RightMid),
            LineType::Bottom => (
                Role::Bottom,
                Role::BottomLeft,
                Role::BottomMid,
                Role::BottomRight,
            ),
        }
    }
}

impl Table {
    /// Creates a table from rows of cells and a header per column.
    ///
    /// The number of headers fixes the number of columns. Every row must have
    /// exactly that many cells.
    ///
    /// # Errors
    ///
    /// - [`TableError::NoColumns`] if `headers` is empty.
    /// - [`TableError::RowLength`] for the first row whose length differs from
    ///   the header count.
    pub fn new<R, H>(content: R, headers: H) -> Result<Self>
    where
        R: IntoIterator,
        R::Item: IntoIterator,
        <R::Item as IntoIterator>::Item: Into<String>,
        H: IntoIterator,
        H::Item: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if headers.is_empty() {
            return Err(TableError::NoColumns);
        }

        let content: Vec<Vec<String>> = content
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        if let Some((row, cells)) = content
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != headers.len())
        {
            return Err(TableError::RowLength {
                row,
                expected: headers.len(),
                actual: cells.len(),
            });
        }

        let widths = column_widths(&content, &headers);
        tracing::debug!(
            rows = content.len(),
            columns = headers.len(),
            widths = ?widths,
            "computed column widths"
        );

        Ok(Table {
            content,
            headers,
            widths,
            options: TableOptions::default(),
        })
    }

    /// Replaces all options at once.
    pub fn with_options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    /// Render header cells in bold.
    pub fn set_bold_headers(&mut self, bold_headers: bool) -> &mut Self {
        self.options.bold_headers = bold_headers;
        self
    }

    /// Use ASCII glyphs (`+`, `-`, `|`) instead of box-drawing characters.
    pub fn set_is_ascii(&mut self, ascii: bool) -> &mut Self {
        self.options.ascii = ascii;
        self
    }

    /// Spaces inserted before each cell value.
    pub fn set_padding_left(&mut self, padding: usize) -> &mut Self {
        self.options.padding_left = padding;
        self
    }

    /// Spaces appended after each cell value.
    pub fn set_padding_right(&mut self, padding: usize) -> &mut Self {
        self.options.padding_right = padding;
        self
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn content(&self) -> &[Vec<String>] {
        &self.content
    }

    /// Column widths computed at construction, without padding.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }

    pub fn num_rows(&self) -> usize {
        self.content.len()
    }

    /// The top border, newline-terminated.
    pub fn top_border(&self) -> String {
        let mut out = String::new();
        self.draw_line(&mut out, LineType::Top);
        out
    }

    /// The rule between the header and the first row, also drawn between
    /// consecutive rows.
    pub fn separator_line(&self) -> String {
        let mut out = String::new();
        self.draw_line(&mut out, LineType::Middle);
        out
    }

    /// The bottom border, newline-terminated.
    pub fn bottom_border(&self) -> String {
        let mut out = String::new();
        self.draw_line(&mut out, LineType::Bottom);
        out
    }

    /// The header line, bold if enabled.
    pub fn header_line(&self) -> String {
        let mut out = String::new();
        self.draw_cells(&mut out, &self.headers, true);
        out
    }

    /// The content line for row `index`, or `None` if out of range.
    pub fn row_line(&self, index: usize) -> Option<String> {
        let row = self.content.get(index)?;
        let mut out = String::new();
        self.draw_cells(&mut out, row, false);
        Some(out)
    }

    /// Renders the whole table.
    ///
    /// Layout, top to bottom: top border, header, separator, then each row
    /// followed by a separator (or the bottom border after the last row).
    /// A table without rows ends with the header separator and the bottom
    /// border. Every line ends with `\n`.
    pub fn render(&self) -> String {
        tracing::trace!(
            rows = self.content.len(),
            bold_headers = self.options.bold_headers,
            ascii = self.options.ascii,
            padding_left = self.options.padding_left,
            padding_right = self.options.padding_right,
            "rendering table"
        );

        let mut out = String::new();
        self.draw_line(&mut out, LineType::Top);
        self.draw_cells(&mut out, &self.headers, true);
        self.draw_line(&mut out, LineType::Middle);

        if self.content.is_empty() {
            self.draw_line(&mut out, LineType::Bottom);
            return out;
        }

        let last = self.content.len() - 1;
        for (i, row) in self.content.iter().enumerate() {
            self.draw_cells(&mut out, row, false);
            if i < last {
                self.draw_line(&mut out, LineType::Middle);
            } else {
                self.draw_line(&mut out, LineType::Bottom);
            }
        }
        out
    }

    /// Writes [`render`](Self::render) to a byte sink.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(self.render().as_bytes())
    }

    fn draw_line(&self, out: &mut String, line_type: LineType) {
        let symbols = self.options.symbol_set();
        let (fill, left, joint, right) = line_type.roles();
        let fill = symbols.glyph(fill);
        let padding = self.options.padding();

        out.push(symbols.glyph(left));
        for (i, width) in self.widths.iter().enumerate() {
            if i > 0 {
                out.push(symbols.glyph(joint));
            }
            out.extend(std::iter::repeat_n(fill, width + padding));
        }
        out.push(symbols.glyph(right));
        out.push('\n');
    }

    fn draw_cells(&self, out: &mut String, cells: &[String], is_header: bool) {
        let symbols = self.options.symbol_set();
        let is_bold = is_header && self.options.bold_headers;

        out.push(symbols.glyph(Role::Left));
        for (i, (cell, &width)) in cells.iter().zip(&self.widths).enumerate() {
            if i > 0 {
                out.push(symbols.glyph(Role::Middle));
            }
            out.push_str(&self.extend(cell, width, is_bold));
        }
        out.push(symbols.glyph(Role::Right));
        out.push('\n');
    }

    /// Pads `value` to `width`, adds cell padding, then applies bold.
    ///
    /// Values already wider than `width` are never truncated.
    fn extend(&self, value: &str, width: usize, is_bold: bool) -> String {
        let fill = width.saturating_sub(stripped_len(value));
        let mut cell = String::with_capacity(value.len() + fill + self.options.padding());
        cell.extend(std::iter::repeat_n(' ', self.options.padding_left));
        cell.push_str(value);
        cell.extend(std::iter::repeat_n(' ', fill + self.options.padding_right));

        if is_bold {
            bold(&cell)
        } else {
            cell
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Widest style-stripped length per column, headers included.
fn column_widths(content: &[Vec<String>], headers: &[String]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| stripped_len(h)).collect();
    for row in content {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(stripped_len(cell));
        }
    }
    widths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_one() -> Table {
        Table::new(vec![vec!["1", "2"]], vec!["A", "B"]).unwrap()
    }

    #[test]
    fn test_widths_from_content_and_headers() {
        let table = Table::new(
            vec![vec!["1", "22"], vec!["333", "4"]],
            vec!["A", "Bee"],
        )
        .unwrap();
        assert_eq!(table.widths(), &[3, 3]);
    }

    #[test]
    fn test_widths_without_rows_are_header_lengths() {
        let rows: Vec<Vec<&str>> = Vec::new();
        let table = Table::new(rows, vec!["Name", "Id"]).unwrap();
        assert_eq!(table.widths(), &[4, 2]);
    }

    #[test]
    fn test_widths_ignore_styles() {
        let table = Table::new(vec![vec!["\x1b[1mab\x1b[0m"]], vec!["X"]).unwrap();
        assert_eq!(table.widths(), &[2]);
    }

    #[test]
    fn test_no_columns() {
        let rows: Vec<Vec<&str>> = Vec::new();
        let headers: Vec<&str> = Vec::new();
        assert!(matches!(
            Table::new(rows, headers),
            Err(TableError::NoColumns)
        ));
    }

    #[test]
    fn test_short_row() {
        let err = Table::new(vec![vec!["1", "2"], vec!["3"]], vec!["A", "B"]).unwrap_err();
        assert!(matches!(
            err,
            TableError::RowLength {
                row: 1,
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_long_row() {
        let err = Table::new(vec![vec!["1", "2", "3"]], vec!["A", "B"]).unwrap_err();
        assert!(matches!(
            err,
            TableError::RowLength {
                row: 0,
                expected: 2,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_line_roles() {
        let table = two_by_one();
        assert_eq!(table.top_border(), "┌───┬───┐\n");
        assert_eq!(table.separator_line(), "├───┼───┤\n");
        assert_eq!(table.bottom_border(), "└───┴───┘\n");
        assert_eq!(table.header_line(), "│ A │ B │\n");
        assert_eq!(table.row_line(0).as_deref(), Some("│ 1 │ 2 │\n"));
        assert_eq!(table.row_line(1), None);
    }

    #[test]
    fn test_extend_pads_to_width() {
        let table = two_by_one();
        assert_eq!(table.extend("ab", 4, false), " ab   ");
    }

    #[test]
    fn test_extend_never_truncates() {
        let table = two_by_one();
        assert_eq!(table.extend("abcdef", 2, false), " abcdef ");
    }

    #[test]
    fn test_extend_pads_styled_value_by_visible_length() {
        let table = two_by_one();
        assert_eq!(
            table.extend("\x1b[1mab\x1b[0m", 3, false),
            " \x1b[1mab\x1b[0m  "
        );
    }

    #[test]
    fn test_extend_bold_wraps_padding() {
        let mut table = two_by_one();
        table.set_padding_left(2).set_padding_right(0);
        assert_eq!(table.extend("a", 2, true), "\x1b[1m  a \x1b[0m");
    }

    #[test]
    fn test_zero_width_zero_padding_lines_up() {
        let rows: Vec<Vec<&str>> = Vec::new();
        let mut table = Table::new(rows, vec![""]).unwrap();
        table.set_padding_left(0).set_padding_right(0);
        assert_eq!(table.render(), "┌┐\n││\n├┤\n└┘\n");
    }

    #[test]
    fn test_render_without_rows() {
        let rows: Vec<Vec<&str>> = Vec::new();
        let table = Table::new(rows, vec!["Name"]).unwrap();
        assert_eq!(table.render(), "┌──────┐\n│ Name │\n├──────┤\n└──────┘\n");
    }

    #[test]
    fn test_render_two_rows() {
        let table = Table::new(
            vec![vec!["1", "22"], vec!["333", "4"]],
            vec!["A", "B"],
        )
        .unwrap();
        let expected = "\
┌─────┬────┐
│ A   │ B  │
├─────┼────┤
│ 1   │ 22 │
├─────┼────┤
│ 333 │ 4  │
└─────┴────┘
";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_options_changes_are_seen_by_next_render() {
        let mut table = two_by_one();
        let unicode = table.render();
        table.set_is_ascii(true);
        let ascii = table.render();
        assert_ne!(unicode, ascii);
        table.set_is_ascii(false);
        assert_eq!(table.render(), unicode);
    }

    #[test]
    fn test_with_options() {
        let options = TableOptions {
            bold_headers: false,
            ascii: true,
            padding_left: 0,
            padding_right: 0,
        };
        let table = two_by_one().with_options(options);
        assert_eq!(table.options(), &options);
        assert_eq!(table.render(), "+-+-+\n|A|B|\n+-+-+\n|1|2|\n+-+-+\n");
    }

    #[test]
    fn test_display_matches_render() {
        let mut table = two_by_one();
        table.set_bold_headers(true);
        assert_eq!(format!("{}", table), table.render());
    }

    #[test]
    fn test_display_through_setter_chain() {
        let mut table = two_by_one();
        let out = format!("{}", table.set_is_ascii(true));
        assert!(out.starts_with("+---+---+\n"));
    }

    #[test]
    fn test_write_to() {
        let table = two_by_one();
        let mut buf = Vec::new();
        table.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), table.render());
    }

    #[test]
    fn test_accessors() {
        let table = two_by_one();
        assert_eq!(table.num_columns(), 2);
        assert_eq!(table.num_rows(), 1);
        assert_eq!(table.headers(), &["A".to_string(), "B".to_string()]);
        assert_eq!(table.content(), &[vec!["1".to_string(), "2".to_string()]]);
    }
}
