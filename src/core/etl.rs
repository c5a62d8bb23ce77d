use crate::core::Pipeline;
use crate::domain::model::{FailedFile, FileReport, RunSummary, TransformResult};
use crate::domain::ports::ErrorPolicy;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Walks the candidate files one at a time: extract, transform, load.
pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
    error_policy: ErrorPolicy,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
            error_policy: ErrorPolicy::default(),
        }
    }

    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    /// Input → output pairs a run would touch. Reads and writes nothing else.
    pub async fn plan(&self) -> Result<Vec<(String, String)>> {
        let files = self.pipeline.discover().await?;
        Ok(files
            .into_iter()
            .map(|file| {
                let output = self.pipeline.output_name(&file);
                (file, output)
            })
            .collect())
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("🚀 Starting phone number cleanup");

        // 一開始就列出檔案，跑的過程中產生的輸出不會再被處理
        let files = self.pipeline.discover().await?;
        if files.is_empty() {
            tracing::warn!("No .csv or .xlsx files found");
        }

        let mut summary = RunSummary::default();

        for file in files {
            match self.process_file(&file).await {
                Ok(report) => summary.processed.push(report),
                Err(e) => match self.error_policy {
                    ErrorPolicy::Abort => {
                        tracing::error!("❌ Failed to process {}: {}", file, e);
                        return Err(e);
                    }
                    ErrorPolicy::Skip => {
                        tracing::warn!("⏭️ Skipping {}: {}", file, e);
                        summary.failed.push(FailedFile {
                            input: file,
                            error: e.to_string(),
                        });
                    }
                },
            }
        }

        tracing::info!(
            "✅ Processed {} file(s), {} failed, {} unique number(s) written",
            summary.processed.len(),
            summary.failed.len(),
            summary.unique_numbers()
        );
        self.monitor.log_final_stats();

        Ok(summary)
    }

    async fn process_file(&self, file: &str) -> Result<FileReport> {
        tracing::info!("📄 Processing file: {}", file);

        let table = self.pipeline.extract(file).await?;
        let result = self.pipeline.transform(table).await?;
        log_diagnostics(file, &result);

        let output = self.pipeline.load(file, &result).await?;

        let report = FileReport {
            input: file.to_string(),
            output,
            cells_scanned: result.cells_scanned,
            accepted_total: result.accepted_total,
            unique_numbers: result.numbers.len(),
            dropped_runs: result.diagnostics.len(),
        };

        tracing::info!(
            "💾 Processed file saved to {} ({} cells, {} accepted, {} unique, {} dropped)",
            report.output,
            report.cells_scanned,
            report.accepted_total,
            report.unique_numbers,
            report.dropped_runs
        );
        self.monitor.log_stats(file);

        Ok(report)
    }
}

fn log_diagnostics(file: &str, result: &TransformResult) {
    for diagnostic in &result.diagnostics {
        let position = diagnostic
            .position
            .map(|p| p.to_string())
            .unwrap_or_default();
        tracing::warn!(
            file,
            cell = %position,
            original = %diagnostic.original,
            rewritten = %diagnostic.rewritten,
            reason = %diagnostic.reason,
            "{}",
            diagnostic
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pipeline::tests::{MockConfig, MockStorage};
    use crate::core::pipeline::PhonePipeline;
    use crate::utils::error::EtlError;

    async fn engine_with(
        files: &[(&str, &str)],
        error_policy: ErrorPolicy,
    ) -> (EtlEngine<PhonePipeline<MockStorage, MockConfig>>, MockStorage) {
        let storage = MockStorage::new();
        for (name, data) in files {
            storage.put_file(name, data.as_bytes()).await;
        }
        let pipeline = PhonePipeline::new(storage.clone(), MockConfig::default());
        let engine = EtlEngine::new(pipeline).with_error_policy(error_policy);
        (engine, storage)
    }

    #[tokio::test]
    async fn test_run_processes_every_candidate() {
        let (engine, storage) = engine_with(
            &[
                ("a.csv", "09123456789,9351234567\n"),
                ("b.csv", "no numbers\n"),
                ("readme.md", "09123456789"),
            ],
            ErrorPolicy::Abort,
        )
        .await;

        let summary = engine.run().await.unwrap();

        assert_eq!(summary.processed.len(), 2);
        assert!(summary.failed.is_empty());
        assert_eq!(summary.processed[0].input, "a.csv");
        assert_eq!(summary.processed[0].unique_numbers, 2);
        assert_eq!(summary.processed[1].unique_numbers, 0);
        assert_eq!(summary.unique_numbers(), 2);

        let a = storage.get_file("processed_a.csv").await.unwrap();
        assert_eq!(String::from_utf8(a).unwrap(), "09123456789\n09351234567\n");
        assert!(storage.get_file("processed_b.csv").await.unwrap().is_empty());
        assert!(storage.get_file("processed_readme.md").await.is_none());
    }

    #[tokio::test]
    async fn test_report_counts_drops() {
        let (engine, _) = engine_with(
            &[("a.csv", "123,09123456789\n9123456789,98\n")],
            ErrorPolicy::Abort,
        )
        .await;

        let summary = engine.run().await.unwrap();
        let report = &summary.processed[0];
        assert_eq!(report.cells_scanned, 4);
        assert_eq!(report.accepted_total, 2);
        assert_eq!(report.unique_numbers, 1);
        assert_eq!(report.dropped_runs, 2);
    }

    #[tokio::test]
    async fn test_abort_policy_stops_on_corrupt_file() {
        let (engine, storage) = engine_with(
            &[("a.xlsx", "definitely not a workbook"), ("b.csv", "09123456789\n")],
            ErrorPolicy::Abort,
        )
        .await;

        let err = engine.run().await.unwrap_err();
        assert!(matches!(err, EtlError::XlsxError(_)));
        // a.xlsx 排在前面，b.csv 不會被處理
        assert!(storage.get_file("processed_b.csv").await.is_none());
    }

    #[tokio::test]
    async fn test_skip_policy_continues_with_siblings() {
        let (engine, storage) = engine_with(
            &[("a.xlsx", "definitely not a workbook"), ("b.csv", "09123456789\n")],
            ErrorPolicy::Skip,
        )
        .await;

        let summary = engine.run().await.unwrap();
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].input, "a.xlsx");
        assert_eq!(summary.processed.len(), 1);
        assert!(storage.get_file("processed_b.csv").await.is_some());
        assert!(storage.get_file("processed_a.xlsx").await.is_none());
    }

    #[tokio::test]
    async fn test_plan_writes_nothing() {
        let (engine, storage) =
            engine_with(&[("a.csv", "09123456789\n")], ErrorPolicy::Abort).await;

        let plan = engine.plan().await.unwrap();
        assert_eq!(
            plan,
            vec![("a.csv".to_string(), "processed_a.csv".to_string())]
        );
        assert!(storage.get_file("processed_a.csv").await.is_none());
    }

    #[tokio::test]
    async fn test_empty_directory() {
        let (engine, _) = engine_with(&[], ErrorPolicy::Abort).await;
        let summary = engine.run().await.unwrap();
        assert_eq!(summary, RunSummary::default());
    }
}
