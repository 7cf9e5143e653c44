use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration field '{field}' is invalid: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Record {record} is missing required field '{field}'")]
    MissingField { record: usize, field: String },

    #[error("Cannot parse {field} from '{value}': {reason}")]
    ParseError {
        field: String,
        value: String,
        reason: String,
    },

}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Data,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a failed run.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl EtlError {
    pub fn parse(field: &str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        EtlError::ParseError {
            field: field.to_string(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorCategory::Configuration,
            EtlError::CsvError(_) | EtlError::SerializationError(_) => ErrorCategory::Input,
            EtlError::MissingField { .. } | EtlError::ParseError { .. } => ErrorCategory::Data,
            EtlError::ZipError(_) | EtlError::IoError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Input | ErrorCategory::Data => {
                ErrorSeverity::High
            }
            ErrorCategory::Output => match self {
                EtlError::IoError(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                    ErrorSeverity::Critical
                }
                EtlError::IoError(e) if e.kind() == std::io::ErrorKind::Interrupted => {
                    ErrorSeverity::Medium
                }
                _ => ErrorSeverity::High,
            },
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::ParseError { field, .. } => format!(
                "Check that every '{}' value in the input is numeric (e.g. 2021 or \"12.50\")",
                field
            ),
            EtlError::MissingField { field, .. } => {
                format!("Add a '{}' column to the input file", field)
            }
            EtlError::CsvError(_) => {
                "Make sure the input is a CSV file with a header row".to_string()
            }
            EtlError::SerializationError(_) => {
                "Make sure the input is a JSON array of transaction objects".to_string()
            }
            EtlError::IoError(_) => "Check that the path exists and is writable".to_string(),
            EtlError::ZipError(_) => "Check the archive filename and output directory".to_string(),
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => {
                "Review the command line flags or the TOML configuration file".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Could not read the input file: {}", self),
            ErrorCategory::Data => format!("Invalid transaction data: {}", self),
            ErrorCategory::Output => format!("Could not write the chart output: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
