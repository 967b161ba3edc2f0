use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Processing,
    Output,
    System,
}

impl DemoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::IoError(_) => ErrorCategory::Output,
            DemoError::SerializationError(_) => ErrorCategory::System,
            DemoError::ConfigValidationError { .. }
            | DemoError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DemoError::ValidationError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 無法寫出任何結果，視為嚴重錯誤
            DemoError::IoError(_) => ErrorSeverity::Critical,
            DemoError::SerializationError(_) => ErrorSeverity::Medium,
            DemoError::ConfigValidationError { .. }
            | DemoError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            DemoError::ValidationError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DemoError::IoError(_) => {
                "Check that standard output is writable (not closed or redirected to a full device)".to_string()
            }
            DemoError::SerializationError(_) => {
                "Re-run with --verbose and report the log output".to_string()
            }
            DemoError::ConfigValidationError { field, .. } => {
                format!("Fix the '{}' section of the configuration file", field)
            }
            DemoError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            DemoError::ValidationError { .. } => {
                "Provide at least one number to classify".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) => format!("Could not write output: {}", e),
            DemoError::SerializationError(_) => "Internal serialization problem".to_string(),
            DemoError::ConfigValidationError { field, message } => {
                format!("Configuration problem ({}): {}", field, message)
            }
            DemoError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for {}: {}", value, field, reason)
            }
            DemoError::ValidationError { message } => format!("Invalid input: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
