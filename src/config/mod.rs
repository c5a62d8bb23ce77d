pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::ports::ErrorPolicy;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_name_component, validate_path, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_SCAN_DIRECTORY: &str = ".";
pub const DEFAULT_OUTPUT_PREFIX: &str = "processed_";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "phone-etl")]
#[command(about = "Extract, normalize and deduplicate mobile numbers from .csv/.xlsx files")]
pub struct CliConfig {
    /// Directory to scan (default: current directory)
    #[arg(long)]
    pub dir: Option<String>,

    /// Prefix for output file names (default: processed_)
    #[arg(long)]
    pub output_prefix: Option<String>,

    /// What to do when a file cannot be read or written (default: abort)
    #[arg(long, value_enum)]
    pub on_error: Option<ErrorPolicy>,

    /// Optional TOML configuration file; flags override its values
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage per file")]
    pub monitor: bool,

    /// List the files that would be processed and exit
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併順序：命令列 > TOML 檔 > 預設值
    pub fn resolve(&self) -> Result<RunConfig> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        let mut config = RunConfig::from_toml(file);

        if let Some(dir) = &self.dir {
            config.scan_directory = dir.clone();
        }
        if let Some(prefix) = &self.output_prefix {
            config.output_prefix = prefix.clone();
        }
        if let Some(policy) = self.on_error {
            config.error_policy = policy;
        }
        if self.monitor {
            config.monitor = true;
        }

        Ok(config)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub scan_directory: String,
    pub output_prefix: String,
    pub error_policy: ErrorPolicy,
    pub monitor: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            scan_directory: DEFAULT_SCAN_DIRECTORY.to_string(),
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            error_policy: ErrorPolicy::default(),
            monitor: false,
        }
    }
}

impl RunConfig {
    pub fn from_toml(file: TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            scan_directory: file.scan.directory.unwrap_or(defaults.scan_directory),
            output_prefix: file.output.prefix.unwrap_or(defaults.output_prefix),
            error_policy: file
                .error_handling
                .on_file_error
                .unwrap_or(defaults.error_policy),
            monitor: file.monitoring.enabled.unwrap_or(defaults.monitor),
        }
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("scan.directory", &self.scan_directory)?;
        validate_file_name_component("output.prefix", &self.output_prefix)?;
        Ok(())
    }
}

impl ConfigProvider for RunConfig {
    fn scan_directory(&self) -> &str {
        &self.scan_directory
    }

    fn output_prefix(&self) -> &str {
        &self.output_prefix
    }
}
