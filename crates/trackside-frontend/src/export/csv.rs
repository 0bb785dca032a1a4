use std::borrow::Cow;
use std::path::Path;

use crate::export::ExportError;

/// A rendered table captured for export: column headers plus rows of
/// already-formatted cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableState {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Quotes a field when it contains a comma, quote, or newline, doubling any
/// embedded quotes (RFC 4180 style). Everything else passes through as-is.
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Serializes the table as CSV: a header line followed by one line per row.
pub fn to_csv(table: &TableState) -> Result<String, ExportError> {
    if table.columns.is_empty() {
        return Err(ExportError::NoData);
    }

    let mut out = String::new();
    let header: Vec<Cow<'_, str>> = table.columns.iter().map(|c| escape_field(c)).collect();
    out.push_str(&header.join(","));
    out.push('\n');

    for row in &table.rows {
        let cells: Vec<Cow<'_, str>> = row.iter().map(|c| escape_field(c)).collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    Ok(out)
}

/// Writes the table to `path` as a CSV download.
pub fn write_csv(table: &TableState, path: &Path) -> Result<(), ExportError> {
    let contents = to_csv(table)?;
    std::fs::write(path, contents)?;
    log::info!("Exported {} row(s) to {path:?}", table.rows.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_with_commas_are_quoted() {
        let table = TableState {
            columns: vec!["a".into(), "b".into()],
            rows: vec![vec!["x,y".into(), "1".into()]],
        };
        assert_eq!(to_csv(&table).unwrap(), "a,b\n\"x,y\",1\n");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let table = TableState {
            columns: vec!["quote".into()],
            rows: vec![vec!["she said \"go\"".into()]],
        };
        assert_eq!(to_csv(&table).unwrap(), "quote\n\"she said \"\"go\"\"\"\n");
    }

    #[test]
    fn newlines_force_quoting() {
        let table = TableState {
            columns: vec!["notes".into()],
            rows: vec![vec!["line one\nline two".into()]],
        };
        assert_eq!(to_csv(&table).unwrap(), "notes\n\"line one\nline two\"\n");
    }

    #[test]
    fn plain_fields_pass_through_unquoted() {
        let table = TableState {
            columns: vec!["athlete".into(), "value".into()],
            rows: vec![
                vec!["Ada".into(), "10.5".into()],
                vec!["Ben".into(), "9.8".into()],
            ],
        };
        assert_eq!(to_csv(&table).unwrap(), "athlete,value\nAda,10.5\nBen,9.8\n");
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(matches!(
            to_csv(&TableState::default()),
            Err(ExportError::NoData)
        ));
    }

    #[test]
    fn writes_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.csv");
        let table = TableState {
            columns: vec!["a".into()],
            rows: vec![vec!["1".into()]],
        };
        write_csv(&table, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\n1\n");
    }
}
