use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error in {field}: {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid command '{command}': {reason}")]
    InvalidCommandError { command: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::IoError(_) | CalcError::SerializationError(_) => ErrorCategory::Io,
            CalcError::ConfigParseError { .. }
            | CalcError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CalcError::InvalidCommandError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 互動模式下使用者可以直接重新輸入
            CalcError::InvalidCommandError { .. } => ErrorSeverity::Low,
            CalcError::SerializationError(_) => ErrorSeverity::Medium,
            CalcError::ConfigParseError { .. }
            | CalcError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            CalcError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CalcError::IoError(_) => {
                "Check that the file exists and that stdin/stdout are available".to_string()
            }
            CalcError::SerializationError(_) => {
                "Retry with --format text to bypass JSON rendering".to_string()
            }
            CalcError::ConfigParseError { .. } => {
                "Make sure the configuration file is valid TOML".to_string()
            }
            CalcError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' in the configuration", field)
            }
            CalcError::InvalidCommandError { .. } => {
                "Type 'help' to list the available commands".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::IoError(e) => format!("Could not read or write data: {}", e),
            CalcError::SerializationError(_) => "Could not render the result as JSON".to_string(),
            CalcError::ConfigParseError { .. } => "The configuration file could not be parsed".to_string(),
            CalcError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            CalcError::InvalidCommandError { command, reason } => {
                format!("Unknown input '{}': {}", command, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
