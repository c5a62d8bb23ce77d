use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("XLSX processing error: {0}")]
    XlsxError(#[from] calamine::XlsxError),

    #[error("XLSX writing error: {0}")]
    XlsxWriteError(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unsupported file format: {path}")]
    UnsupportedFormat { path: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Output,
    FileSystem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            EtlError::CsvError(_) | EtlError::XlsxError(_) | EtlError::UnsupportedFormat { .. } => {
                ErrorCategory::Input
            }
            EtlError::XlsxWriteError(_) => ErrorCategory::Output,
            EtlError::IoError(_) => ErrorCategory::FileSystem,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 單一檔案損毀，可以修正後重跑
            EtlError::CsvError(_) | EtlError::XlsxError(_) | EtlError::UnsupportedFormat { .. } => {
                ErrorSeverity::Medium
            }
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            EtlError::XlsxWriteError(_) | EtlError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the command line flags and the TOML configuration file"
            }
            ErrorCategory::Input => {
                "Make sure every .csv/.xlsx file in the directory can be opened, or rerun with --on-error skip"
            }
            ErrorCategory::Output => "The output workbook could not be encoded; check the extracted values",
            // 讀和寫都會走到這裡
            ErrorCategory::FileSystem => {
                "Check that the directory exists, that its files are readable and writable, and that there is free disk space"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::UnsupportedFormat { path } => {
                format!("'{}' is not a .csv or .xlsx file", path)
            }
            EtlError::CsvError(e) => format!("Could not read CSV data: {}", e),
            EtlError::XlsxError(e) => format!("Could not read Excel workbook: {}", e),
            EtlError::XlsxWriteError(e) => format!("Could not write Excel workbook: {}", e),
            EtlError::IoError(e) => format!("File system error: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_is_input_error() {
        let err = EtlError::UnsupportedFormat {
            path: "notes.txt".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("notes.txt"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err = EtlError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.category(), ErrorCategory::FileSystem);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_unreadable_input_suggestion_mentions_reading() {
        let err = EtlError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read denied",
        ));
        assert!(err.recovery_suggestion().contains("readable"));
        assert!(err.user_friendly_message().contains("read denied"));
    }
}
