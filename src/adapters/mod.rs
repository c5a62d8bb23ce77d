// Adapters layer: codecs between file bytes and the domain `Table`.

pub mod csv_table;
pub mod xlsx_table;

use crate::domain::model::{PhoneNumber, Table, TabularFormat};
use crate::utils::error::Result;

pub fn read_table(format: TabularFormat, data: &[u8]) -> Result<Table> {
    match format {
        TabularFormat::Csv => csv_table::read_csv(data),
        TabularFormat::Xlsx => xlsx_table::read_xlsx(data),
    }
}

pub fn write_numbers(format: TabularFormat, numbers: &[PhoneNumber]) -> Result<Vec<u8>> {
    match format {
        TabularFormat::Csv => csv_table::write_csv(numbers),
        TabularFormat::Xlsx => xlsx_table::write_xlsx(numbers),
    }
}
