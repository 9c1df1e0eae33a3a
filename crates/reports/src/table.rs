//! Aligned text table for the terminal.
//!
//! Each column is as wide as its widest cell, header included. Cells are
//! left-aligned and joined by `" | "`, followed by a dashed separator under
//! the header.

use crate::report::ReportData;

const COLUMN_SEPARATOR: &str = " | ";

/// Per-column display width: the max of the header and every cell, in chars.
pub fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(width) => *width = (*width).max(len),
                None => widths.push(len),
            }
        }
    }
    widths
}

/// Plain-text table renderer
#[derive(Debug, Default, Clone)]
pub struct TableFormatter;

impl TableFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Header row, dash separator, then one row per record
    pub fn render(&self, report: &dyn ReportData) -> String {
        let headers = report.headers();
        let rows = report.rows();
        let widths = column_widths(&headers, &rows);

        let full_width: usize =
            widths.iter().sum::<usize>() + COLUMN_SEPARATOR.len() * widths.len().saturating_sub(1);

        let mut output = Self::render_line(&headers, &widths);
        output.push('\n');
        output.push_str(&"-".repeat(full_width));
        output.push('\n');
        for row in &rows {
            output.push_str(&Self::render_line(row, &widths));
            output.push('\n');
        }
        output
    }

    fn render_line(cells: &[String], widths: &[usize]) -> String {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, width)| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                format!("{:<width$}", cell, width = *width)
            })
            .collect();
        padded.join(COLUMN_SEPARATOR).trim_end().to_string()
    }
}
