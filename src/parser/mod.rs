//! Delimited-file loader with encoding and delimiter auto-detection.
//!
//! Reads a header-first delimited file into a [`Table`]. Rows whose field
//! count does not match the header are skipped (counted, not fatal), and
//! rows where every field is missing are dropped after parsing.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{CsvError, CsvResult};
use crate::table::{Row, Table};

/// Metadata about one load.
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// Detected or caller-pinned encoding.
    pub encoding: String,
    /// Detected or caller-pinned delimiter.
    pub delimiter: char,
    /// Column headers, in file order.
    pub headers: Vec<String>,
    /// Data rows that parsed against the header width.
    pub rows_read: usize,
    /// Rows skipped because their field count did not match the header.
    pub malformed_rows: usize,
    /// Parsed rows dropped because every field was missing.
    pub empty_rows: usize,
}

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _confidence, _lang) = chardet::detect(bytes);

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to text using the detected encoding, lossy on bad sequences.
fn decode(bytes: &[u8], encoding: &str) -> String {
    match encoding {
        "iso-8859-1" => encoding_rs::ISO_8859_15.decode(bytes).0.into_owned(),
        "windows-1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned(),
        _ => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Detect the delimiter by counting occurrences in the header line.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [';', ',', '\t', '|'];
    let mut best_sep = ';';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Validate a delimiter and narrow it to the single byte the CSV layer needs.
pub(crate) fn delimiter_byte(delimiter: char) -> CsvResult<u8> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(CsvError::InvalidDelimiter(delimiter))
    }
}

/// Load a delimited file into a [`Table`].
///
/// `delimiter: None` auto-detects from the header line.
///
/// # Example
/// ```ignore
/// let (table, report) = csvscrub::load_csv_file("listing.csv", Some(';'))?;
/// println!("{} rows, {} skipped", table.row_count(), report.malformed_rows);
/// ```
pub fn load_csv_file<P: AsRef<Path>>(
    path: P,
    delimiter: Option<char>,
) -> CsvResult<(Table, LoadReport)> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| CsvError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    load_csv_bytes(&bytes, delimiter)
}

/// Load raw bytes, sniffing the encoding first.
pub fn load_csv_bytes(bytes: &[u8], delimiter: Option<char>) -> CsvResult<(Table, LoadReport)> {
    let encoding = detect_encoding(bytes);
    let content = decode(bytes, &encoding);
    load_decoded(&content, encoding, delimiter)
}

/// Load already-decoded text.
pub fn load_csv_str(content: &str, delimiter: Option<char>) -> CsvResult<(Table, LoadReport)> {
    load_decoded(content, "utf-8".to_string(), delimiter)
}

fn load_decoded(
    content: &str,
    encoding: String,
    delimiter: Option<char>,
) -> CsvResult<(Table, LoadReport)> {
    let content = content.trim_start_matches('\u{feff}');
    if content.trim().is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let delimiter = match delimiter {
        Some(d) => d,
        None => detect_delimiter(content),
    };
    let delim_byte = delimiter_byte(delimiter)?;

    let mut reader = ReaderBuilder::new()
        .delimiter(delim_byte)
        .has_headers(true)
        .flexible(false)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(CsvError::NoHeaders);
    }

    let mut table = Table::new(headers.clone());
    let mut rows_read = 0;
    let mut malformed_rows = 0;
    let mut empty_rows = 0;

    for record in reader.records() {
        let record = match record {
            Ok(r) => r,
            // Wrong field count (or any other per-record failure): skip the
            // row and keep going.
            Err(_) => {
                malformed_rows += 1;
                continue;
            }
        };

        rows_read += 1;
        let row: Row = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    None
                } else {
                    Some(field.to_string())
                }
            })
            .collect();

        if Table::row_is_empty(&row) {
            empty_rows += 1;
        } else {
            table.rows.push(row);
        }
    }

    let report = LoadReport {
        encoding,
        delimiter,
        headers,
        rows_read,
        malformed_rows,
        empty_rows,
    };
    Ok((table, report))
}
