use super::{unnamed_header, CellValue, SheetError, Table};
use std::path::Path;

/// Read a delimited text file. The first record is the header row; empty
/// fields are treated as missing cells.
pub(super) fn read_delimited(path: &Path, delimiter: u8) -> Result<Table, SheetError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(index, header)| {
            if header.trim().is_empty() {
                unnamed_header(index)
            } else {
                header.to_string()
            }
        })
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::Text(field.to_string())
                    }
                })
                .collect(),
        );
    }

    Ok(Table { headers, rows })
}
