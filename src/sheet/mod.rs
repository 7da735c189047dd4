// # Sheet Module
//
// Reads the first worksheet of a tabular file into an in-memory `Table`.
// The parsing strategy is chosen from the file extension; unknown extensions
// (WPS .et/.ett, misnamed exports) are sniffed as workbooks from content.

mod delimited;
mod workbook;

use chrono::NaiveDateTime;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Workbook contains no worksheets")]
    NoWorksheet,
}

/// How a file is parsed, decided from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    /// xlsx, xlsm, xlam, xlsb, xls, ods
    Workbook,
    /// Comma separated
    Csv,
    /// Tab separated
    Tsv,
    /// Unknown extension, detect the workbook format from content
    Sniff,
}

impl SheetFormat {
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("xlsx" | "xlsm" | "xlam" | "xlsb" | "xls" | "xla" | "ods") => {
                SheetFormat::Workbook
            }
            Some("csv") => SheetFormat::Csv,
            Some("tsv" | "tab") => SheetFormat::Tsv,
            _ => SheetFormat::Sniff,
        }
    }
}

/// A single spreadsheet cell as read from the source file
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    /// Spreadsheet error value such as `#N/A`
    Error(String),
}

impl CellValue {
    /// String form of the cell, or None for missing cells.
    /// Integral floats drop their fraction so numeric keywords read as typed.
    pub fn to_text(&self) -> Option<String> {
        match self {
            CellValue::Empty | CellValue::Error(_) => None,
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Int(i) => Some(i.to_string()),
            CellValue::Float(f) => Some(format_float(*f)),
            // Capitalized to match keywords already stored by earlier imports
            CellValue::Bool(true) => Some("True".to_string()),
            CellValue::Bool(false) => Some("False".to_string()),
            CellValue::DateTime(dt) => Some(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
        }
    }
}

fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Header row plus data rows of the first worksheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cells of one column in row order. Short rows yield `CellValue::Empty`.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &CellValue> + '_ {
        const EMPTY: &CellValue = &CellValue::Empty;
        self.rows.iter().map(move |row| row.get(index).unwrap_or(EMPTY))
    }
}

/// Name used for columns whose header cell is blank
pub(crate) fn unnamed_header(index: usize) -> String {
    format!("Unnamed: {}", index)
}

/// Read the first worksheet of `path`
pub fn read_table(path: &Path) -> Result<Table, SheetError> {
    let format = SheetFormat::from_path(path);
    debug!("Reading {} as {:?}", path.display(), format);

    match format {
        SheetFormat::Workbook => workbook::read_workbook(path),
        SheetFormat::Csv => delimited::read_delimited(path, b','),
        SheetFormat::Tsv => delimited::read_delimited(path, b'\t'),
        SheetFormat::Sniff => workbook::sniff_workbook(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            SheetFormat::from_path(&PathBuf::from("a/b/list.xlsx")),
            SheetFormat::Workbook
        );
        assert_eq!(
            SheetFormat::from_path(&PathBuf::from("LIST.XLS")),
            SheetFormat::Workbook
        );
        assert_eq!(
            SheetFormat::from_path(&PathBuf::from("list.ods")),
            SheetFormat::Workbook
        );
        assert_eq!(
            SheetFormat::from_path(&PathBuf::from("list.csv")),
            SheetFormat::Csv
        );
        assert_eq!(
            SheetFormat::from_path(&PathBuf::from("list.tsv")),
            SheetFormat::Tsv
        );
        assert_eq!(
            SheetFormat::from_path(&PathBuf::from("list.et")),
            SheetFormat::Sniff
        );
        assert_eq!(
            SheetFormat::from_path(&PathBuf::from("no_extension")),
            SheetFormat::Sniff
        );
    }

    #[test]
    fn test_cell_text_coercion() {
        assert_eq!(CellValue::Empty.to_text(), None);
        assert_eq!(CellValue::Error("#N/A".into()).to_text(), None);
        assert_eq!(
            CellValue::Text("  games ".into()).to_text(),
            Some("  games ".to_string())
        );
        assert_eq!(CellValue::Int(42).to_text(), Some("42".to_string()));
        assert_eq!(CellValue::Float(2024.0).to_text(), Some("2024".to_string()));
        assert_eq!(CellValue::Float(1.5).to_text(), Some("1.5".to_string()));
        assert_eq!(CellValue::Bool(true).to_text(), Some("True".to_string()));
        assert_eq!(CellValue::Bool(false).to_text(), Some("False".to_string()));

        let dt = chrono::NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        assert_eq!(
            CellValue::DateTime(dt).to_text(),
            Some("2024-03-09 00:00:00".to_string())
        );
    }

    #[test]
    fn test_column_pads_short_rows() {
        let table = Table {
            headers: vec!["kw".into(), "volume".into()],
            rows: vec![
                vec![CellValue::Text("cat".into()), CellValue::Int(10)],
                vec![CellValue::Text("dog".into())],
            ],
        };

        let volumes: Vec<&CellValue> = table.column(1).collect();
        assert_eq!(volumes, vec![&CellValue::Int(10), &CellValue::Empty]);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 2);
    }
}
