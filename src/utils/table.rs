//! Table rendering utilities for CLI outputs.
//!
//! Cells may span several lines; every line is padded to the column width
//! before color is applied so escape codes never skew the alignment.

use super::colors::paint;
use super::formatting::{pad_right, truncate};

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub lines: Vec<String>,
    pub color: Option<&'static str>,
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Self {
            lines: vec![s.into()],
            color: None,
        }
    }

    pub fn lines(lines: Vec<String>) -> Self {
        Self { lines, color: None }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn colored(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
    pub color: bool,
}

impl Table {
    pub fn new(columns: Vec<Column>, color: bool) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            color,
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push_str(" | ");
        }
        out.push('\n');
        out.push_str(&self.separator());

        // Rows
        for row in &self.rows {
            let height = row.iter().map(|c| c.lines.len()).max().unwrap_or(0).max(1);

            for line_idx in 0..height {
                for (i, col) in self.columns.iter().enumerate() {
                    let cell = row.get(i);
                    let raw = cell
                        .and_then(|c| c.lines.get(line_idx))
                        .map(String::as_str)
                        .unwrap_or("");
                    let padded = pad_right(&truncate(raw, col.width), col.width);

                    match cell.and_then(|c| c.color) {
                        Some(color) if !raw.is_empty() => {
                            out.push_str(&paint(&padded, color, self.color))
                        }
                        _ => out.push_str(&padded),
                    }
                    out.push_str(" | ");
                }
                out.push('\n');
            }
            out.push_str(&self.separator());
        }

        out
    }

    fn separator(&self) -> String {
        let mut line = String::new();
        for col in &self.columns {
            line.push_str(&"-".repeat(col.width));
            line.push_str("-+-");
        }
        line.push('\n');
        line
    }
}
