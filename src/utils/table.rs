//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
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

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| UnicodeWidthStr::width(c.header.as_str()))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad(&col.header, *w, col.align));
            out.push_str("  ");
        }
        out.truncate(out.trim_end().len());
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        out.push_str(&"-".repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let mut line = String::new();
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                line.push_str(&pad(cell, widths[i], col.align));
                line.push_str("  ");
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }
}

/// Pad by display width (format! pads by char count, which breaks on `€`).
fn pad(s: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(UnicodeWidthStr::width(s)));
    match align {
        Align::Left => format!("{s}{fill}"),
        Align::Right => format!("{fill}{s}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_grow_to_content() {
        let mut t = Table::new(vec![Column::left("Name"), Column::right("Hours")]);
        t.add_row(vec!["Ana".into(), "7.50 h".into()]);
        t.add_row(vec!["Bartolomé".into(), "12.00 h".into()]);

        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Name         Hours");
        assert_eq!(lines[2], "Ana         7.50 h");
        assert_eq!(lines[3], "Bartolomé  12.00 h");
    }
}
