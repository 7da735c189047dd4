use super::{unnamed_header, CellValue, SheetError, Table};
use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, DataType, Range, Reader, Sheets};
use std::io::{Cursor, Read, Seek};
use std::path::Path;

/// Open a workbook whose format is known from its extension
pub(super) fn read_workbook(path: &Path) -> Result<Table, SheetError> {
    let mut workbook = open_workbook_auto(path)?;
    first_sheet(&mut workbook)
}

/// Open a workbook by trying each supported format against the file content.
/// The reader is cloned per attempt, so the bytes are loaded up front.
pub(super) fn sniff_workbook(path: &Path) -> Result<Table, SheetError> {
    let bytes = std::fs::read(path)?;
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    first_sheet(&mut workbook)
}

fn first_sheet<RS: Read + Seek>(workbook: &mut Sheets<RS>) -> Result<Table, SheetError> {
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(SheetError::NoWorksheet)??;
    Ok(table_from_range(&range))
}

fn table_from_range(range: &Range<Data>) -> Table {
    let mut rows = range.rows();

    let headers = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .enumerate()
            .map(|(index, data)| {
                cell_from_data(data)
                    .to_text()
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or_else(|| unnamed_header(index))
            })
            .collect(),
        None => return Table::default(),
    };

    let rows = rows
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();

    Table { headers, rows }
}

fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(_) | Data::DateTimeIso(_) => match data.as_datetime() {
            Some(dt) => CellValue::DateTime(dt),
            None => CellValue::Text(data.to_string()),
        },
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_to_table() {
        let mut range: Range<Data> = Range::new((0, 0), (3, 1));
        range.set_value((0, 0), Data::String("kw".into()));
        range.set_value((1, 0), Data::String("cat".into()));
        range.set_value((1, 1), Data::Float(12.0));
        range.set_value((2, 0), Data::Empty);
        range.set_value((3, 0), Data::Int(7));

        let table = table_from_range(&range);

        assert_eq!(table.headers, vec!["kw", "Unnamed: 1"]);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows[0][0], CellValue::Text("cat".into()));
        assert_eq!(table.rows[0][1], CellValue::Float(12.0));
        assert_eq!(table.rows[1][0], CellValue::Empty);
        assert_eq!(table.rows[2][0], CellValue::Int(7));
    }

    #[test]
    fn test_empty_range_has_no_columns() {
        let range: Range<Data> = Range::empty();
        let table = table_from_range(&range);
        assert_eq!(table.column_count(), 0);
    }

    fn fixture() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/keywords.xlsx")
    }

    #[test]
    fn test_reads_first_worksheet_of_xlsx() {
        let table = read_workbook(&fixture()).unwrap();

        assert_eq!(table.headers, vec!["id", "kw_phrase"]);
        assert_eq!(table.row_count(), 7);
        assert_eq!(table.rows[0][1], CellValue::Text("running shoes".into()));
        // Row with only an id cell
        assert!(table.rows[1].get(1).map_or(true, |c| *c == CellValue::Empty));
        assert_eq!(
            table.rows[3][1].to_text().as_deref(),
            Some("2024-01-01 00:00:00")
        );
        assert_eq!(table.rows[4][1].to_text().as_deref(), Some("42"));
        assert_eq!(table.rows[5][1], CellValue::Bool(true));
        assert!(!table
            .rows
            .iter()
            .flatten()
            .any(|c| c.to_text().as_deref() == Some("second sheet keyword")));
    }

    #[test]
    fn test_sniffs_workbook_under_unknown_extension() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("keywords.et");
        std::fs::copy(fixture(), &path).unwrap();

        let sniffed = sniff_workbook(&path).unwrap();

        assert_eq!(sniffed, read_workbook(&fixture()).unwrap());
    }

    #[test]
    fn test_garbage_file_is_a_workbook_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"definitely not a zip archive").unwrap();

        assert!(read_workbook(&path).is_err());
        assert!(sniff_workbook(&path).is_err());
    }
}
