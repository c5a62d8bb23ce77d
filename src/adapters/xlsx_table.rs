use crate::domain::model::{CellValue, Table};
use crate::utils::error::Result;
use calamine::{Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;
use std::io::Cursor;

fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            CellValue::from(s.as_str())
        }
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        // 日期以 Excel 序號處理
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
    }
}

/// Read the first worksheet. Cells keep their sheet coordinates: leading
/// unused rows and columns come back as empty rows / empty cells.
pub fn read_xlsx(data: &[u8]) -> Result<Table> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(data))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Ok(Table::default()),
    };

    let (first_row, first_column) = range.start().unwrap_or((0, 0));
    let mut rows: Vec<Vec<CellValue>> = vec![Vec::new(); first_row as usize];

    for row in range.rows() {
        let mut cells = vec![CellValue::Empty; first_column as usize];
        cells.extend(row.iter().map(cell_from_data));
        rows.push(cells);
    }

    Ok(Table::new(rows))
}

/// Write `values` as column A of a single-sheet workbook, no header.
pub fn write_xlsx<V: AsRef<str>>(values: &[V]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // 全部存成字串，避免開頭的 0 被當成數字吃掉
    for (row, value) in (0u32..).zip(values) {
        worksheet.write_string(row, 0, value.as_ref())?;
    }

    Ok(workbook.save_to_buffer()?)
}
