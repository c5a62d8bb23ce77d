use crate::domain::model::{Diagnostic, Table, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// File access relative to the scanned directory.
pub trait Storage: Send + Sync {
    /// Names of the regular files directly inside the base directory.
    fn list_files(&self) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// What to do when one input file cannot be read or written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop the whole run on the first failing file.
    #[default]
    Abort,
    /// Log the failure and continue with the next file.
    Skip,
}

pub trait ConfigProvider: Send + Sync {
    fn scan_directory(&self) -> &str;
    fn output_prefix(&self) -> &str;
}

/// Receives every digit run the validator rejects.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Candidate input files, in processing order.
    async fn discover(&self) -> Result<Vec<String>>;
    async fn extract(&self, file_name: &str) -> Result<Table>;
    async fn transform(&self, table: Table) -> Result<TransformResult>;
    /// Persists the result and returns the output file name.
    async fn load(&self, file_name: &str, result: &TransformResult) -> Result<String>;
    fn output_name(&self, file_name: &str) -> String;
}
