use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Generative API credential is not configured")]
    MissingCredential,

    #[error("Generative API returned status {status}: {body}")]
    ApiStatusError { status: u16, body: String },

    #[error("Malformed API response: {message}")]
    MalformedResponse { message: String },

    #[error("Incorrect admin password")]
    AuthenticationFailed,

    #[error("Admin login required")]
    AuthenticationRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Storage,
    Data,
    Configuration,
    Validation,
    Access,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::ApiError(_)
            | FolioError::ApiStatusError { .. }
            | FolioError::MalformedResponse { .. }
            | FolioError::MissingCredential => ErrorCategory::Network,
            FolioError::IoError(_) => ErrorCategory::Storage,
            FolioError::SerializationError(_) => ErrorCategory::Data,
            FolioError::ConfigError { .. }
            | FolioError::ConfigValidationError { .. }
            | FolioError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            FolioError::ValidationError { .. } => ErrorCategory::Validation,
            FolioError::AuthenticationFailed | FolioError::AuthenticationRequired => {
                ErrorCategory::Access
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Validation | ErrorCategory::Access => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage | ErrorCategory::Data => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FolioError::ApiError(_) | FolioError::ApiStatusError { .. } => {
                "Check network connectivity and the generative API endpoint"
            }
            FolioError::MalformedResponse { .. } => "Retry later or switch the configured model",
            FolioError::MissingCredential => "Set GEMINI_API_KEY or [generative].api_key",
            FolioError::IoError(_) => "Check that the data directory exists and is writable",
            FolioError::SerializationError(_) => {
                "The stored portfolio is not valid JSON; fix it by hand or run `folio reset`"
            }
            FolioError::ConfigError { .. }
            | FolioError::ConfigValidationError { .. }
            | FolioError::InvalidConfigValueError { .. } => "Review the configuration file",
            FolioError::ValidationError { .. } => "Correct the input and try again",
            FolioError::AuthenticationFailed => "Check the admin password",
            FolioError::AuthenticationRequired => "Run `folio login --password <password>` first",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FolioError::SerializationError(_) => {
                "Stored portfolio data could not be read".to_string()
            }
            FolioError::IoError(e) => format!("Storage access failed: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_errors_are_high_severity() {
        assert_eq!(FolioError::AuthenticationFailed.category(), ErrorCategory::Access);
        assert_eq!(FolioError::AuthenticationRequired.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_corrupt_data_is_critical() {
        let err: FolioError = serde_json::from_str::<u8>("nope").unwrap_err().into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.recovery_suggestion().contains("reset"));
    }

    #[test]
    fn test_config_errors_point_at_config_file() {
        let err = FolioError::InvalidConfigValueError {
            field: "generative.endpoint".to_string(),
            value: "ftp://x".to_string(),
            reason: "must be http or https".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.recovery_suggestion(), "Review the configuration file");
    }
}
