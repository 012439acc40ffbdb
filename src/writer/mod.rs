//! Table serializer: writes a [`Table`] back out as delimited text.
//!
//! Header row first, then data rows in table order. Missing values become
//! empty fields (no placeholder token), no row-index column is emitted, and
//! fields are quoted only when the CSV layer requires it.

use std::io;
use std::path::Path;

use csv::WriterBuilder;

use crate::error::{CsvError, CsvResult};
use crate::parser::delimiter_byte;
use crate::table::Table;

/// Serialize a table to a file.
///
/// Fails with [`CsvError::FileAccess`] when the output path cannot be
/// created (missing or unwritable directory).
pub fn write_csv_file<P: AsRef<Path>>(table: &Table, path: P, delimiter: char) -> CsvResult<()> {
    let path = path.as_ref();
    let delim = delimiter_byte(delimiter)?;
    let file = std::fs::File::create(path).map_err(|source| CsvError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = WriterBuilder::new().delimiter(delim).from_writer(file);
    write_table(&mut writer, table)?;
    writer.flush()?;
    Ok(())
}

/// Serialize a table to a string.
pub fn write_csv_string(table: &Table, delimiter: char) -> CsvResult<String> {
    let delim = delimiter_byte(delimiter)?;
    let mut buf = Vec::new();
    {
        let mut writer = WriterBuilder::new().delimiter(delim).from_writer(&mut buf);
        write_table(&mut writer, table)?;
        writer.flush()?;
    }
    String::from_utf8(buf).map_err(|e| CsvError::Encoding(e.to_string()))
}

fn write_table<W: io::Write>(writer: &mut csv::Writer<W>, table: &Table) -> CsvResult<()> {
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(|field| field.as_deref().unwrap_or("")))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Table {
        let mut table = Table::new(vec!["Nome".into(), "Citta".into()]);
        table.rows.push(vec![Some("Da Mario".into()), None]);
        table.rows.push(vec![Some("Chez Paul".into()), Some("Lione".into())]);
        table
    }

    #[test]
    fn test_header_then_rows_in_order() {
        let out = write_csv_string(&sample(), ';').unwrap();
        assert_eq!(out, "Nome;Citta\nDa Mario;\nChez Paul;Lione\n");
    }

    #[test]
    fn test_missing_is_empty_field_not_token() {
        let out = write_csv_string(&sample(), ';').unwrap();
        assert!(out.contains("Da Mario;\n"));
        assert!(!out.to_lowercase().contains("null"));
        assert!(!out.contains("NaN"));
    }

    #[test]
    fn test_field_containing_delimiter_is_quoted() {
        let mut table = Table::new(vec!["Nome".into()]);
        table.rows.push(vec![Some("a;b".into())]);
        let out = write_csv_string(&table, ';').unwrap();
        assert_eq!(out, "Nome\n\"a;b\"\n");
    }

    #[test]
    fn test_alternate_delimiter() {
        let out = write_csv_string(&sample(), ',').unwrap();
        assert!(out.starts_with("Nome,Citta\n"));
    }

    #[test]
    fn test_invalid_delimiter_rejected() {
        let result = write_csv_string(&sample(), '€');
        assert!(matches!(result, Err(CsvError::InvalidDelimiter('€'))));
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv_file(&sample(), &path, ';').unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Nome;Citta\nDa Mario;\nChez Paul;Lione\n");
    }

    #[test]
    fn test_missing_directory_is_file_access() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let result = write_csv_file(&sample(), &path, ';');
        assert!(matches!(result, Err(CsvError::FileAccess { .. })));
    }
}
