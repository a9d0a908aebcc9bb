use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for '{field}': '{value}' - {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SyncError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SyncError::ApiError(_) => ErrorCategory::Network,
            SyncError::CsvError(_)
            | SyncError::SerializationError(_)
            | SyncError::ProcessingError { .. } => ErrorCategory::Data,
            SyncError::TomlError(_)
            | SyncError::ConfigError { .. }
            | SyncError::MissingConfigError { .. }
            | SyncError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SyncError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路失敗通常是暫時的，下一輪排程會重抓
            SyncError::ApiError(_) => ErrorSeverity::Medium,
            SyncError::CsvError(_)
            | SyncError::SerializationError(_)
            | SyncError::ProcessingError { .. } => ErrorSeverity::High,
            SyncError::TomlError(_)
            | SyncError::ConfigError { .. }
            | SyncError::MissingConfigError { .. }
            | SyncError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            SyncError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SyncError::ApiError(_) => {
                "Check network connectivity and chess.com availability; the next scheduled run will retry".to_string()
            }
            SyncError::CsvError(_) | SyncError::SerializationError(_) => {
                "The API returned data in an unexpected shape; inspect the response with --verbose".to_string()
            }
            SyncError::ProcessingError { .. } => {
                "Inspect the fetched game data with --verbose to find the malformed record".to_string()
            }
            SyncError::TomlError(_) => {
                "Check the config file for TOML syntax errors".to_string()
            }
            SyncError::ConfigError { .. }
            | SyncError::MissingConfigError { .. }
            | SyncError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and re-run".to_string()
            }
            SyncError::IoError(_) => {
                "Check that the output path exists and is writable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SyncError::ApiError(e) => format!("Could not reach the chess.com API: {}", e),
            SyncError::CsvError(e) => format!("Failed to render CSV output: {}", e),
            SyncError::IoError(e) => format!("Failed to read or write artifacts: {}", e),
            SyncError::SerializationError(e) => format!("Unexpected API response: {}", e),
            SyncError::TomlError(e) => format!("Invalid config file: {}", e),
            SyncError::ConfigError { message } => format!("Configuration problem: {}", message),
            SyncError::ProcessingError { message } => format!("Data problem: {}", message),
            SyncError::MissingConfigError { field } => {
                format!("Configuration is missing '{}'", field)
            }
            SyncError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
