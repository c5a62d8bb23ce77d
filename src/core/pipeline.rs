use crate::adapters::{read_table, write_numbers};
use crate::core::processor::process_table;
use crate::core::{ConfigProvider, Pipeline, Storage, Table, TransformResult};
use crate::domain::model::TabularFormat;
use crate::utils::error::{EtlError, Result};

pub struct PhonePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> PhonePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn format_of(file_name: &str) -> Result<TabularFormat> {
        TabularFormat::from_path(file_name).ok_or_else(|| EtlError::UnsupportedFormat {
            path: file_name.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for PhonePipeline<S, C> {
    async fn discover(&self) -> Result<Vec<String>> {
        let mut files: Vec<String> = self
            .storage
            .list_files()
            .await?
            .into_iter()
            .filter(|name| TabularFormat::from_path(name).is_some())
            .collect();
        files.sort();

        tracing::debug!(
            "Found {} candidate file(s) in {}",
            files.len(),
            self.config.scan_directory()
        );
        Ok(files)
    }

    async fn extract(&self, file_name: &str) -> Result<Table> {
        // 就算 discover 已經過濾過，這裡仍要擋掉不支援的格式
        let format = Self::format_of(file_name)?;

        let data = self.storage.read_file(file_name).await?;
        tracing::debug!("Read {} bytes from {}", data.len(), file_name);

        let table = read_table(format, &data)?;
        tracing::debug!(
            "Parsed {} row(s), {} cell(s) from {}",
            table.rows.len(),
            table.cell_count(),
            file_name
        );
        Ok(table)
    }

    async fn transform(&self, table: Table) -> Result<TransformResult> {
        Ok(process_table(&table))
    }

    async fn load(&self, file_name: &str, result: &TransformResult) -> Result<String> {
        let format = Self::format_of(file_name)?;
        let output_name = self.output_name(file_name);

        let data = write_numbers(format, &result.numbers)?;
        tracing::debug!("Writing {} bytes to {}", data.len(), output_name);
        self.storage.write_file(&output_name, &data).await?;

        Ok(output_name)
    }

    fn output_name(&self, file_name: &str) -> String {
        format!("{}{}", self.config.output_prefix(), file_name)
    }
}
