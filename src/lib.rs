pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, RunConfig};

pub use core::{etl::EtlEngine, pipeline::PhonePipeline};
pub use domain::model::{CellValue, Diagnostic, PhoneNumber, RunSummary, Table, TabularFormat};
pub use domain::ports::ErrorPolicy;
pub use utils::error::{EtlError, Result};
