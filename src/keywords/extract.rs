use crate::sheet::Table;

/// Keywords of one column in row order: missing cells dropped, values
/// stringified and trimmed, empty results discarded.
pub fn extract_keywords(table: &Table, column: usize) -> Vec<String> {
    table
        .column(column)
        .filter_map(|cell| cell.to_text())
        .map(|text| text.trim().to_string())
        .filter(|keyword| !keyword.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::CellValue;

    fn table(cells: Vec<CellValue>) -> Table {
        Table {
            headers: vec!["kw".to_string()],
            rows: cells.into_iter().map(|c| vec![c]).collect(),
        }
    }

    #[test]
    fn test_trims_and_drops_empty() {
        let table = table(vec![
            CellValue::Text("  unblocked games ".into()),
            CellValue::Empty,
            CellValue::Text("   ".into()),
            CellValue::Text("games".into()),
            CellValue::Error("#N/A".into()),
        ]);

        assert_eq!(
            extract_keywords(&table, 0),
            vec!["unblocked games", "games"]
        );
    }

    #[test]
    fn test_keeps_row_order_and_duplicates() {
        let table = table(vec![
            CellValue::Text("cat".into()),
            CellValue::Text("dog".into()),
            CellValue::Text("cat".into()),
        ]);

        assert_eq!(extract_keywords(&table, 0), vec!["cat", "dog", "cat"]);
    }

    #[test]
    fn test_coerces_non_text_cells() {
        let table = table(vec![
            CellValue::Float(2048.0),
            CellValue::Int(7),
            CellValue::Bool(false),
        ]);

        assert_eq!(extract_keywords(&table, 0), vec!["2048", "7", "false"]);
    }

    #[test]
    fn test_out_of_range_column_is_empty() {
        let table = table(vec![CellValue::Text("cat".into())]);
        assert!(extract_keywords(&table, 3).is_empty());
    }
}
