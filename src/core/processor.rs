use crate::core::extract::extract_numbers;
use crate::domain::model::{Diagnostic, PhoneNumber, Table, TransformResult};
use std::collections::HashSet;

/// Drop repeated numbers, keeping the first occurrence of each.
pub fn dedup_preserving_order(numbers: Vec<PhoneNumber>) -> Vec<PhoneNumber> {
    let mut seen = HashSet::with_capacity(numbers.len());
    numbers
        .into_iter()
        .filter(|number| seen.insert(number.clone()))
        .collect()
}

/// Scan every cell of `table` in row-major order. The first row is data like
/// any other.
pub fn process_table(table: &Table) -> TransformResult {
    let mut all_numbers = Vec::new();
    let mut diagnostics = Vec::new();
    let mut cell_diagnostics: Vec<Diagnostic> = Vec::new();

    for (position, cell) in table.cells() {
        all_numbers.extend(extract_numbers(cell, &mut cell_diagnostics));
        diagnostics.extend(cell_diagnostics.drain(..).map(|d| d.at(position)));
    }

    let accepted_total = all_numbers.len();

    TransformResult {
        numbers: dedup_preserving_order(all_numbers),
        diagnostics,
        cells_scanned: table.cell_count(),
        accepted_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CellPosition, CellValue};

    fn table(rows: &[&[&str]]) -> Table {
        Table::new(
            rows.iter()
                .map(|row| row.iter().map(|&cell| CellValue::from(cell)).collect())
                .collect(),
        )
    }

    fn numbers(result: &TransformResult) -> Vec<&str> {
        result.numbers.iter().map(PhoneNumber::as_str).collect()
    }

    #[test]
    fn test_duplicates_collapse_to_one() {
        let result = process_table(&table(&[&["call 09123456789 now"], &["09123456789"]]));
        assert_eq!(numbers(&result), vec!["09123456789"]);
        assert_eq!(result.accepted_total, 2);
        assert_eq!(result.cells_scanned, 2);
    }

    #[test]
    fn test_first_seen_order_across_rows_and_columns() {
        let result = process_table(&table(&[
            &["phone", "09351234567", "9123456789"],
            &["+98 935 123 4567", "09901112233"],
            &["۰۹۱۲۳۴۵۶۷۸۹"],
        ]));
        assert_eq!(
            numbers(&result),
            vec!["09351234567", "09123456789", "09901112233"]
        );
    }

    #[test]
    fn test_header_row_is_scanned_as_data() {
        let result = process_table(&table(&[&["09121112233"], &["09124445566"]]));
        assert_eq!(numbers(&result), vec!["09121112233", "09124445566"]);
    }

    #[test]
    fn test_diagnostics_carry_cell_position() {
        let result = process_table(&table(&[&["name", "phone"], &["ali", "12345"]]));
        assert!(result.numbers.is_empty());
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(
            result.diagnostics[0].position,
            Some(CellPosition { row: 1, column: 1 })
        );
        assert_eq!(result.diagnostics[0].original, "12345");
    }

    #[test]
    fn test_empty_table() {
        let result = process_table(&Table::default());
        assert!(result.numbers.is_empty());
        assert!(result.diagnostics.is_empty());
        assert_eq!(result.cells_scanned, 0);
    }

    #[test]
    fn test_dedup_has_no_repeats() {
        let result = process_table(&table(&[
            &["09123456789", "9123456789", "989123456789"],
            &["09351234567", "09123456789"],
        ]));
        let unique: HashSet<&str> = numbers(&result).into_iter().collect();
        assert_eq!(unique.len(), result.numbers.len());
        assert_eq!(result.accepted_total, 5);
        assert_eq!(numbers(&result), vec!["09123456789", "09351234567"]);
    }
}
