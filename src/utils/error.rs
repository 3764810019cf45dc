use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("Input file is not valid UTF-8: {path}")]
    EncodingError { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed output file: {message}")]
    MalformedOutputError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Processing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// `Low` is a user mistake the run recovers from, so it still exits with 0.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ConvertError {
    pub fn exit_code(&self) -> i32 {
        self.severity().exit_code()
    }

    /// Low-severity failures are guidance for the user and belong on stdout.
    pub fn reports_to_stdout(&self) -> bool {
        self.severity() == ErrorSeverity::Low
    }

    /// Text printed when a run stops on this error.
    pub fn failure_report(&self) -> String {
        if self.reports_to_stdout() {
            format!(
                "❌ {}\n\n{}",
                self.user_friendly_message(),
                self.recovery_suggestion()
            )
        } else {
            format!(
                "❌ {}\n💡 {}",
                self.user_friendly_message(),
                self.recovery_suggestion()
            )
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::InputNotFound { .. } | ConvertError::EncodingError { .. } => {
                ErrorCategory::Input
            }
            ConvertError::ConfigError { .. }
            | ConvertError::InvalidConfigValueError { .. }
            | ConvertError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            ConvertError::SerializationError(_) | ConvertError::MalformedOutputError { .. } => {
                ErrorCategory::Processing
            }
            ConvertError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ConvertError::InputNotFound { .. } => ErrorSeverity::Low,
            ConvertError::EncodingError { .. } => ErrorSeverity::Medium,
            ConvertError::ConfigError { .. }
            | ConvertError::InvalidConfigValueError { .. }
            | ConvertError::ConfigValidationError { .. }
            | ConvertError::SerializationError(_)
            | ConvertError::MalformedOutputError { .. } => ErrorSeverity::High,
            ConvertError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::InputNotFound { path } => {
                format!("Error: input file {} was not found", path)
            }
            ConvertError::EncodingError { path } => {
                format!("Error: {} must be saved as UTF-8 text", path)
            }
            ConvertError::IoError(e) => format!("Could not read or write a file: {}", e),
            ConvertError::SerializationError(e) => {
                format!("Could not serialize the contract records: {}", e)
            }
            ConvertError::MalformedOutputError { message } => {
                format!("The generated file could not be read back: {}", message)
            }
            ConvertError::ConfigError { message } => format!("Invalid configuration: {}", message),
            ConvertError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for '{}': {}", field, reason)
            }
            ConvertError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ConvertError::InputNotFound { path } => format!(
                "Please paste the contract data into {}\nFormat: tab-separated columns (copied from Excel)",
                path
            ),
            ConvertError::EncodingError { .. } => {
                "Re-export the sheet as \"Unicode Text\" or save the file with UTF-8 encoding"
                    .to_string()
            }
            ConvertError::IoError(_) => {
                "Check file permissions and available disk space, then retry".to_string()
            }
            ConvertError::SerializationError(_) => {
                "Check the input for unusual characters and retry".to_string()
            }
            ConvertError::MalformedOutputError { .. } => {
                "Delete the output file and run the converter again".to_string()
            }
            ConvertError::ConfigError { .. }
            | ConvertError::InvalidConfigValueError { .. }
            | ConvertError::ConfigValidationError { .. } => {
                "Fix the command-line flags or the TOML config file and run again".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
