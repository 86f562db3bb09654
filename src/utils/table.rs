//! Table rendering utilities for CLI outputs.

use super::formatting::pad_right;
use unicode_width::UnicodeWidthStr;

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

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Widen columns so every header and cell fits.
    pub fn fit(&mut self) {
        for (i, col) in self.columns.iter_mut().enumerate() {
            let widest = self
                .rows
                .iter()
                .filter_map(|r| r.get(i))
                .map(|c| UnicodeWidthStr::width(c.as_str()))
                .chain(std::iter::once(UnicodeWidthStr::width(col.header.as_str())))
                .max()
                .unwrap_or(0);
            col.width = col.width.max(widest);
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad_right(cell, col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
