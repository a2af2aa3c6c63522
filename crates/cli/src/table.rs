//! Text rendering of an iteration history.
//!
//! ```text
//! iter | x    | y    | next x | next y | f(x, y)
//! -----+------+------+--------+--------+--------
//! 1    | 1    | 1    | -0.5   | -0.5   | 3
//! 2    | -0.5 | -0.5 | 1      | 1      | 1.5
//! ```
//!
//! Two-equation histories get one residual column per equation, `f1` and `f2`.

use std::fmt;

use rootline_solvers::equation::newton::{History, IterationRecord, Mode};

/// Renders a [`History`] as a pipe-separated table via [`fmt::Display`].
#[derive(Debug, Clone, Copy)]
pub struct HistoryTable<'a> {
    history: &'a History,
    mode: Mode,
}

impl<'a> HistoryTable<'a> {
    /// Creates a table for a history produced in `mode`.
    #[must_use]
    pub fn new(history: &'a History, mode: Mode) -> Self {
        Self { history, mode }
    }

    fn header(&self) -> Vec<String> {
        let residuals: &[&str] = match self.mode {
            Mode::Single => &["f(x, y)"],
            Mode::Pair => &["f1", "f2"],
        };
        ["iter", "x", "y", "next x", "next y"]
            .iter()
            .chain(residuals)
            .map(ToString::to_string)
            .collect()
    }
}

fn row(record: &IterationRecord) -> Vec<String> {
    let mut cells = vec![
        record.iter.to_string(),
        record.prev.x.to_string(),
        record.prev.y.to_string(),
        record.next.x.to_string(),
        record.next.y.to_string(),
    ];
    cells.extend(record.residuals.as_slice().iter().map(ToString::to_string));
    cells
}

fn write_line(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(f, "{}", line.trim_end())
}

impl fmt::Display for HistoryTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.header();
        let rows: Vec<Vec<String>> = self.history.iter().map(row).collect();

        let widths: Vec<usize> = (0..header.len())
            .map(|col| {
                std::iter::once(&header)
                    .chain(&rows)
                    .filter_map(|cells| cells.get(col))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write_line(f, &header, &widths)?;
        let rule = widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("-+-");
        writeln!(f, "{rule}")?;
        for cells in &rows {
            write_line(f, cells, &widths)?;
        }
        Ok(())
    }
}
