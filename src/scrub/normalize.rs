//! The field normalizer and the column mapper that applies it.
//!
//! [`normalize`] is a pure, total function over string-or-missing input.
//! Step order matters: each step assumes the previous step's output
//! alphabet.
//!
//! 1. missing -> empty string
//! 2. transliterate non-ASCII to its nearest ASCII approximation
//! 3. replace every char outside `[A-Za-z0-9- ]` with a space
//! 4. collapse whitespace runs to a single space
//! 5. trim

use once_cell::sync::Lazy;
use regex::Regex;
use unidecode::unidecode;

use crate::table::Table;

/// Columns scrubbed by default: the text fields of the restaurant listing
/// export this tool was built around.
pub const TEXT_COLUMNS: [&str; 7] = [
    "Nome",
    "Nazione",
    "Citta",
    "Indirizzo",
    "Delivery",
    "Online",
    "Tipo_di_cucina",
];

static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9\- ]").expect("disallowed-chars pattern"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Default text column set as owned strings, for [`ScrubOptions`].
///
/// [`ScrubOptions`]: crate::scrub::pipeline::ScrubOptions
pub fn default_text_columns() -> Vec<String> {
    TEXT_COLUMNS.iter().map(|c| c.to_string()).collect()
}

/// Clean one field value.
///
/// Missing values come out as the empty string; everything else is reduced
/// to `{A-Z a-z 0-9 space hyphen}` with single internal spaces and no
/// leading/trailing space. Idempotent.
pub fn normalize(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return String::new();
    };

    let ascii = unidecode(raw);
    let filtered = DISALLOWED.replace_all(&ascii, " ");
    let collapsed = WHITESPACE.replace_all(&filtered, " ");
    collapsed.trim().to_string()
}

/// Apply [`normalize`] to every cell of every listed column present in the
/// table. Columns not in the list are never touched; listed columns absent
/// from the table are silently skipped.
///
/// Returns the number of cells whose value changed (a missing field becoming
/// the empty string counts).
pub fn scrub_table(table: &mut Table, columns: &[String]) -> usize {
    let mut changed = 0;

    for name in columns {
        let Some(idx) = table.column_index(name) else {
            continue;
        };
        for row in &mut table.rows {
            let cleaned = normalize(row[idx].as_deref());
            if row[idx].as_deref() != Some(cleaned.as_str()) {
                changed += 1;
            }
            row[idx] = Some(cleaned);
        }
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_is_empty() {
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(Some("")), "");
    }

    #[test]
    fn test_transliteration_goldens() {
        assert_eq!(normalize(Some("Café–Münchner")), "Cafe-Munchner");
        assert_eq!(normalize(Some("Ärea Ø1")), "Area O1");
        assert_eq!(normalize(Some("12 Rue d'Or")), "12 Rue d Or");
        assert_eq!(normalize(Some("Italian/French!!")), "Italian French");
        assert_eq!(normalize(Some("Straße")), "Strasse");
    }

    #[test]
    fn test_disallowed_chars_become_spaces() {
        assert_eq!(normalize(Some("a.b,c")), "a b c");
        assert_eq!(normalize(Some("tre-stelle")), "tre-stelle");
    }

    #[test]
    fn test_whitespace_collapsed_and_trimmed() {
        assert_eq!(normalize(Some("  Da   Mario\t\n ")), "Da Mario");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "Café–Münchner",
            "  spaced   out  ",
            "già pulito",
            "12 Rue d'Or",
            "",
            "---",
            "北京 Duck House",
        ];
        for s in samples {
            let once = normalize(Some(s));
            assert_eq!(normalize(Some(once.as_str())), once, "input {:?}", s);
        }
    }

    #[test]
    fn test_alphabet_closure() {
        let samples = ["Ævar & Örn!", "tab\there", "émoji 🍕 time", "ok-value 9"];
        for s in samples {
            let out = normalize(Some(s));
            assert!(
                out.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-'),
                "{:?} -> {:?}",
                s,
                out
            );
            assert!(!out.contains("  "), "{:?} -> {:?}", s, out);
            assert_eq!(out.trim(), out);
        }
    }

    #[test]
    fn test_scrub_table_changes_listed_columns() {
        let mut table = Table::new(vec!["Nome".into(), "Rating".into()]);
        table.rows.push(vec![Some("Café!!".into()), Some("5/5 ***".into())]);

        let changed = scrub_table(&mut table, &["Nome".to_string()]);

        assert_eq!(changed, 1);
        assert_eq!(table.rows[0][0].as_deref(), Some("Cafe"));
        // Rating is outside the set and keeps its raw characters.
        assert_eq!(table.rows[0][1].as_deref(), Some("5/5 ***"));
    }

    #[test]
    fn test_scrub_table_missing_column_is_skipped() {
        let mut table = Table::new(vec!["Nome".into()]);
        table.rows.push(vec![Some("ok".into())]);

        let changed = scrub_table(&mut table, &default_text_columns());

        assert_eq!(changed, 0);
        assert_eq!(table.rows[0][0].as_deref(), Some("ok"));
    }

    #[test]
    fn test_scrub_table_counts_missing_to_empty() {
        let mut table = Table::new(vec!["Citta".into()]);
        table.rows.push(vec![None]);

        let changed = scrub_table(&mut table, &["Citta".to_string()]);

        assert_eq!(changed, 1);
        assert_eq!(table.rows[0][0].as_deref(), Some(""));
    }

    #[test]
    fn test_default_text_columns() {
        let cols = default_text_columns();
        assert_eq!(cols.len(), 7);
        assert!(cols.contains(&"Tipo_di_cucina".to_string()));
    }
}
