use crate::domain::violation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuestError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API responded with status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GuestError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GuestError::ApiError(_) | GuestError::HttpStatus { .. } => ErrorCategory::Network,
            GuestError::CsvError(_)
            | GuestError::SerializationError(_)
            | GuestError::Validation(_) => ErrorCategory::Input,
            GuestError::ConfigError { .. }
            | GuestError::MissingConfigError { .. }
            | GuestError::InvalidConfigValueError { .. }
            | GuestError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            GuestError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路錯誤通常可以重試
            GuestError::ApiError(_) => ErrorSeverity::Medium,
            GuestError::HttpStatus { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            GuestError::HttpStatus { .. } => ErrorSeverity::High,
            GuestError::CsvError(_)
            | GuestError::SerializationError(_)
            | GuestError::Validation(_) => ErrorSeverity::High,
            GuestError::ConfigError { .. }
            | GuestError::MissingConfigError { .. }
            | GuestError::InvalidConfigValueError { .. }
            | GuestError::ConfigValidationError { .. } => ErrorSeverity::High,
            GuestError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GuestError::ApiError(_) => {
                "Check that the guest API is reachable and the base URL is correct".to_string()
            }
            GuestError::HttpStatus { status, .. } if *status >= 500 => {
                "The guest API reported a server error, try again later".to_string()
            }
            GuestError::HttpStatus { .. } => {
                "The guest API rejected the request, review the payload".to_string()
            }
            GuestError::CsvError(_) => {
                "Make sure every roster row has the same number of columns as the header"
                    .to_string()
            }
            GuestError::SerializationError(_) => "Make sure the input is valid JSON".to_string(),
            GuestError::MissingConfigError { field } => {
                format!("Set {} in the environment or the config file", field)
            }
            GuestError::InvalidConfigValueError { field, .. }
            | GuestError::ConfigValidationError { field, .. } => {
                format!("Fix the value of {} in the config file", field)
            }
            GuestError::ConfigError { .. } => "Review the configuration file".to_string(),
            GuestError::Validation(e) => {
                format!("Correct the following fields: {}", e.fields().join(", "))
            }
            GuestError::IoError(_) => {
                "Check that the file exists and is readable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GuestError::ApiError(_) => "Could not reach the guest API".to_string(),
            GuestError::HttpStatus { status, .. } => {
                format!("The guest API answered with HTTP {}", status)
            }
            GuestError::Validation(e) => {
                format!("{} field constraint(s) violated", e.violations().len())
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GuestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::violation::FieldViolation;

    #[test]
    fn test_validation_error_is_input_category() {
        let err: GuestError = ValidationError::new(vec![FieldViolation::new(
            "name",
            "required",
            "name is required",
        )])
        .into();

        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("name"));
    }

    #[test]
    fn test_server_errors_are_retryable() {
        let err = GuestError::HttpStatus {
            status: 503,
            body: String::new(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);

        let err = GuestError::HttpStatus {
            status: 404,
            body: String::new(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.category(), ErrorCategory::Network);
    }
}
