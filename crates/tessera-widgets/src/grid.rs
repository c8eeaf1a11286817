//! Aligned text rendering of a [`Table`].

use crate::record::Table;
use tessera_core::text::{display_width, pad};

/// Column separator.
pub const SEPARATOR: char = '│';

fn join<'a>(cells: impl Iterator<Item = &'a String>, widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, (cell, &w)) in cells.zip(widths).enumerate() {
        if i > 0 {
            line.push(SEPARATOR);
        }
        line.push_str(&pad(cell, w));
    }
    line
}

/// A table rendered to aligned lines: a header of field names and one line
/// per record, every cell padded to its column width and joined by
/// [`SEPARATOR`].
///
/// Widths are derived from the table's current contents on every build;
/// nothing is cached across builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    widths: Vec<usize>,
    total_width: usize,
    header: String,
    rows: Vec<String>,
}

impl Grid {
    /// Render `table`.
    pub fn build(table: &Table) -> Self {
        let schema = table.schema();
        let widths: Vec<usize> = schema
            .iter()
            .enumerate()
            .map(|(i, name)| {
                table
                    .rows()
                    .map(|row| display_width(&row[i]))
                    .fold(display_width(name), usize::max)
            })
            .collect();

        let header = join(schema.iter(), &widths);
        let rows = table.rows().map(|row| join(row.iter(), &widths)).collect();
        let total_width = (widths.iter().sum::<usize>() + widths.len()).saturating_sub(3);

        Self {
            widths,
            total_width,
            header,
            rows,
        }
    }

    /// Width the horizontal scroll range is measured against:
    /// `sum(widths) + columns - 3`, saturating at zero.
    pub fn total_width(&self) -> usize {
        self.total_width
    }

    /// Per-column widths in display columns.
    pub fn column_widths(&self) -> &[usize] {
        &self.widths
    }

    /// The header line.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Line for record `index`.
    pub fn row(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(String::as_str)
    }

    /// Record lines, in table order.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of record lines.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no record lines.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header and rows joined by newlines.
    pub fn text(&self) -> String {
        let mut text = self.header.clone();
        for row in &self.rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }
}
