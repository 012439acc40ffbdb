//! High-level pipeline API: load -> scrub -> write.
//!
//! # Example
//!
//! ```rust,ignore
//! use csvscrub::{scrub_csv, ScrubOptions};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = scrub_csv(
//!         Path::new("listing.csv"),
//!         Path::new("listing_clean.csv"),
//!         &ScrubOptions::default(),
//!     )?;
//!     println!("{} rows written", report.rows_written);
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::PipelineResult;
use crate::logs::{log_info, log_success, log_warning};
use crate::parser::{load_csv_bytes, load_csv_file, LoadReport};
use crate::scrub::normalize::{default_text_columns, scrub_table};
use crate::table::Table;
use crate::writer::{write_csv_file, write_csv_string};

/// Options for one cleaning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrubOptions {
    /// Field delimiter. `None` auto-detects from the header line; the
    /// default pins the export's `;` convention.
    pub delimiter: Option<char>,

    /// Columns whose cells get normalized. Members absent from the input
    /// are skipped without error.
    pub text_columns: Vec<String>,
}

impl Default for ScrubOptions {
    fn default() -> Self {
        Self {
            delimiter: Some(';'),
            text_columns: default_text_columns(),
        }
    }
}

/// What one cleaning run did.
#[derive(Debug, Clone, Serialize)]
pub struct ScrubReport {
    /// Encoding the input was decoded with.
    pub encoding: String,
    /// Delimiter used for both input and output.
    pub delimiter: char,
    /// Column headers, in file order.
    pub headers: Vec<String>,
    /// Data rows that parsed against the header width.
    pub rows_read: usize,
    /// Rows skipped for a field-count mismatch.
    pub malformed_rows: usize,
    /// Rows dropped because every field was missing.
    pub empty_rows: usize,
    /// Cells rewritten with a different value by the normalizer.
    pub cells_changed: usize,
    /// Rows in the output file.
    pub rows_written: usize,
}

/// Clean a delimited file and write the sanitized copy.
///
/// Loads `input`, normalizes every configured text column that exists,
/// drops fully-empty rows, and writes the result to `output` with the same
/// delimiter convention. Only whole-file I/O failures are fatal; malformed
/// rows are skipped and counted in the report.
pub fn scrub_csv(input: &Path, output: &Path, options: &ScrubOptions) -> PipelineResult<ScrubReport> {
    log_info(format!("📖 Reading {}", input.display()));
    let (mut table, load) = load_csv_file(input, options.delimiter)?;
    log_loaded(&table, &load, options.delimiter.is_none());

    let cells_changed = scrub(&mut table, options);

    log_info(format!("💾 Writing {}", output.display()));
    write_csv_file(&table, output, load.delimiter)?;
    log_success(format!("{} row(s) written", table.row_count()));

    Ok(build_report(&table, load, cells_changed))
}

/// Same as [`scrub_csv`], but in-memory: raw input bytes to cleaned CSV text.
pub fn scrub_bytes(bytes: &[u8], options: &ScrubOptions) -> PipelineResult<(String, ScrubReport)> {
    let (mut table, load) = load_csv_bytes(bytes, options.delimiter)?;
    let cells_changed = scrub(&mut table, options);
    let cleaned = write_csv_string(&table, load.delimiter)?;
    Ok((cleaned, build_report(&table, load, cells_changed)))
}

fn scrub(table: &mut Table, options: &ScrubOptions) -> usize {
    log_info("🧼 Scrubbing text columns...");
    let present = options
        .text_columns
        .iter()
        .filter(|c| table.has_column(c))
        .count();
    let cells_changed = scrub_table(table, &options.text_columns);
    log_success(format!(
        "{}/{} listed column(s) present, {} cell(s) changed",
        present,
        options.text_columns.len(),
        cells_changed
    ));
    cells_changed
}

fn log_loaded(table: &Table, load: &LoadReport, detected: bool) {
    log_success(format!(
        "encoding {}, delimiter '{}'{}",
        load.encoding,
        format_delimiter(load.delimiter),
        if detected { " (auto-detected)" } else { "" }
    ));
    log_success(format!(
        "{} row(s) kept, {} empty row(s) dropped",
        table.row_count(),
        load.empty_rows
    ));
    if load.malformed_rows > 0 {
        log_warning(format!(
            "{} malformed row(s) skipped",
            load.malformed_rows
        ));
    }
}

fn build_report(table: &Table, load: LoadReport, cells_changed: usize) -> ScrubReport {
    ScrubReport {
        encoding: load.encoding,
        delimiter: load.delimiter,
        headers: load.headers,
        rows_read: load.rows_read,
        malformed_rows: load.malformed_rows,
        empty_rows: load.empty_rows,
        cells_changed,
        rows_written: table.row_count(),
    }
}

/// Format delimiter for display
fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}
