use crate::domain::model::{CellValue, Table};
use crate::utils::error::{EtlError, Result};
use csv::{ReaderBuilder, WriterBuilder};

/// Every line is a data row; rows may have different widths. Invalid UTF-8
/// is replaced rather than rejected.
pub fn read_csv(data: &[u8]) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut rows = Vec::new();
    for record in rdr.byte_records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|field| CellValue::from(String::from_utf8_lossy(field).as_ref()))
                .collect(),
        );
    }

    Ok(Table::new(rows))
}

/// One value per line, no header.
pub fn write_csv<V: AsRef<str>>(values: &[V]) -> Result<Vec<u8>> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    for value in values {
        wtr.write_record([value.as_ref()])?;
    }

    wtr.into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_ragged_rows_without_header() {
        let table = read_csv(b"phone,name\n09123456789\n,x,9123456789\n").unwrap();
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0][0], CellValue::Text("phone".into()));
        assert_eq!(table.rows[1], vec![CellValue::Text("09123456789".into())]);
        assert_eq!(table.rows[2][0], CellValue::Empty);
        assert_eq!(table.cell_count(), 6);
    }

    #[test]
    fn test_read_quoted_field_with_comma() {
        let table = read_csv("\"call 0912, ext 3\",۰۹۱۲".as_bytes()).unwrap();
        assert_eq!(table.rows[0][0], CellValue::Text("call 0912, ext 3".into()));
        assert_eq!(table.rows[0][1], CellValue::Text("۰۹۱۲".into()));
    }

    #[test]
    fn test_read_invalid_utf8_is_lossy() {
        let table = read_csv(b"\xff09123456789\n").unwrap();
        let text = table.rows[0][0].to_text().into_owned();
        assert!(text.ends_with("09123456789"));
    }

    #[test]
    fn test_write_single_column() {
        let bytes = write_csv(&["09123456789", "09351234567"]).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "09123456789\n09351234567\n");
    }

    #[test]
    fn test_write_empty() {
        let bytes = write_csv::<&str>(&[]).unwrap();
        assert!(bytes.is_empty());
    }
}
