//! Per-run report rows and a plain-text results table.

use std::fmt::Write as _;
use std::io;
use std::time::Duration;

use crate::search::{SearchConfig, SearchResult, Strategy};
use crate::validate::is_valid_chain;

/// One row of the results table.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    /// Strategy that produced the chain.
    pub strategy: Strategy,
    /// Word length of the run.
    pub word_len: usize,
    /// Distinct words of that length.
    pub num_words: usize,
    /// Length of the best chain.
    pub chain_len: usize,
    /// Seconds spent searching.
    pub search_secs: f64,
    /// Seconds spent indexing plus searching.
    pub total_secs: f64,
    /// Strategy parameters, as text.
    pub params: String,
    /// Verdict of the independent chain check.
    pub valid: bool,
    /// Whether the run was cut short.
    pub stopped_early: bool,
    /// The chain itself.
    pub chain: Vec<String>,
}

impl RunReport {
    /// Builds a row from a finished run, re-validating the chain.
    pub fn new(result: SearchResult, cfg: &SearchConfig, total: Duration) -> Self {
        Self {
            strategy: result.strategy,
            word_len: result.word_len,
            num_words: result.num_words,
            chain_len: result.len(),
            search_secs: result.elapsed.as_secs_f64(),
            total_secs: total.as_secs_f64(),
            params: cfg.describe(),
            valid: is_valid_chain(&result.chain),
            stopped_early: result.stopped_early,
            chain: result.chain,
        }
    }
}

const HEADERS: [&str; 8] = [
    "Strategy",
    "Word Length",
    "Num. Words",
    "Seq. Length",
    "Search (sec)",
    "Total (sec)",
    "Params",
    "Correct",
];

fn cells(row: &RunReport) -> [String; 8] {
    let verdict = match (row.valid, row.stopped_early) {
        (true, false) => "True",
        (true, true) => "True (stopped)",
        (false, _) => "False",
    };
    [
        row.strategy.to_string(),
        row.word_len.to_string(),
        row.num_words.to_string(),
        row.chain_len.to_string(),
        format!("{:.4}", row.search_secs),
        format!("{:.4}", row.total_secs),
        row.params.clone(),
        verdict.to_owned(),
    ]
}

/// Renders rows as a bordered, column-aligned table.
pub fn render_table(rows: &[RunReport]) -> String {
    let body: Vec<[String; 8]> = rows.iter().map(cells).collect();
    let mut widths = HEADERS.map(str::len);
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let mut out = String::new();
    let _ = writeln!(out, "{rule}");
    push_row(&mut out, &HEADERS, &widths);
    let _ = writeln!(out, "{rule}");
    for row in &body {
        push_row(&mut out, row, &widths);
    }
    let _ = writeln!(out, "{rule}");
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, row: &[S], widths: &[usize; 8]) {
    out.push('|');
    for (cell, width) in row.iter().zip(widths) {
        let _ = write!(out, " {:<width$} |", cell.as_ref());
    }
    out.push('\n');
}

/// Writes the table to a writer.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_table<W: io::Write>(rows: &[RunReport], mut w: W) -> io::Result<()> {
    w.write_all(render_table(rows).as_bytes())
}

// ============================================================================
// Tests
// ============================================================================
