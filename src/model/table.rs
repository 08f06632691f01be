//! Table types.

use super::{Alignment, Paragraph};
use serde::{Deserialize, Serialize};

/// A table structure.
///
/// Rows are appended one at a time from data, so the row count always
/// equals the number of data rows plus the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,

    /// Number of header rows (0 = no header)
    pub header_rows: u8,

    /// Horizontal placement of the table on the page
    pub alignment: Alignment,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            header_rows: 0,
            alignment: Alignment::Left,
        }
    }

    /// Build a table from a header row and literal data rows.
    ///
    /// Every row shares the header's column count `N`, so a ragged table
    /// cannot be expressed.
    pub fn from_rows<const N: usize>(header: [&str; N], rows: &[[&str; N]]) -> Self {
        let mut table = Self {
            header_rows: 1,
            ..Self::new()
        };
        table.add_row(TableRow::header(header.iter().map(|h| TableCell::text(*h)).collect()));
        for row in rows {
            table.add_row(TableRow::from_strings(row.iter().copied()));
        }
        table
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    /// Check whether every row has the same number of cells.
    pub fn is_rectangular(&self) -> bool {
        let columns = self.column_count();
        self.rows.iter().all(|r| r.cells.len() == columns)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get header rows.
    pub fn header(&self) -> &[TableRow] {
        let n = (self.header_rows as usize).min(self.rows.len());
        &self.rows[..n]
    }

    /// Get body rows (non-header).
    pub fn body(&self) -> &[TableRow] {
        let n = (self.header_rows as usize).min(self.rows.len());
        &self.rows[n..]
    }

    /// Get a cell by row and column index.
    pub fn cell(&self, row: usize, column: usize) -> Option<&TableCell> {
        self.rows.get(row).and_then(|r| r.cells.get(column))
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,

    /// Whether this is a header row
    pub is_header: bool,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: false,
        }
    }

    /// Create a header row.
    pub fn header(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: true,
        }
    }

    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content (paragraphs)
    pub content: Vec<Paragraph>,

    /// Background fill as a hex string, passed through to the renderer as-is
    pub shading: Option<String>,
}

impl TableCell {
    /// Create a new cell with one paragraph holding one run of text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Paragraph::with_text(text)],
            shading: None,
        }
    }

    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() || self.plain_text().trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_new() {
        let table = Table::new();
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
        assert!(table.header().is_empty());
    }

    #[test]
    fn test_table_from_rows() {
        let table = Table::from_rows(
            ["Name", "Age"],
            &[["Alice", "30"], ["Bob", "25"]],
        );

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.header().len(), 1);
        assert_eq!(table.body().len(), 2);
        assert!(table.rows[0].is_header);
        assert!(table.is_rectangular());
        assert_eq!(table.cell(2, 0).unwrap().plain_text(), "Bob");
    }

    #[test]
    fn test_header_only_table() {
        let table = Table::from_rows(["A", "B", "C"], &[]);
        assert_eq!(table.row_count(), 1);
        assert!(table.body().is_empty());
    }

    #[test]
    fn test_ragged_rows_detected() {
        let mut table = Table::new();
        table.add_row(TableRow::from_strings(["a", "b"]));
        table.add_row(TableRow::from_strings(["c"]));
        assert!(!table.is_rectangular());
    }

    #[test]
    fn test_cell_text() {
        let cell = TableCell::text("Hello");
        assert_eq!(cell.plain_text(), "Hello");
        assert!(!cell.is_empty());

        let blank = TableCell::text("");
        assert!(blank.is_empty());
        assert_eq!(blank.content[0].runs().len(), 1);
    }
}
