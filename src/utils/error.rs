use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("Invalid argument `{field}` = {value}: {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{operation}({input}) overflows the native 64-bit range")]
    Overflow { operation: String, input: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration field `{field}` is invalid: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for `{field}` ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Arithmetic,
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

impl ToolkitError {
    pub fn invalid_argument(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn overflow(operation: impl Into<String>, input: impl ToString) -> Self {
        Self::Overflow {
            operation: operation.into(),
            input: input.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } => ErrorCategory::Input,
            Self::Overflow { .. } => ErrorCategory::Arithmetic,
            Self::TomlError(_)
            | Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Arithmetic => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidArgument { field, .. } => {
                format!("Check the value passed for `{}` and try again", field)
            }
            Self::Overflow { operation, .. } => {
                format!("Use a smaller input for {}", operation)
            }
            Self::IoError(_) => "Make sure the file exists and is readable".to_string(),
            Self::TomlError(_) => "Make sure the config file is valid TOML".to_string(),
            Self::SerializationError(_) => "Retry with plain text output".to_string(),
            Self::ConfigError { .. } => "Review the configuration file".to_string(),
            Self::ConfigValidationError { field, .. }
            | Self::InvalidConfigValueError { field, .. } => {
                format!("Fix `{}` in the configuration file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { field, reason, .. } => {
                format!("Bad input for {}: {}", field, reason)
            }
            Self::Overflow { operation, input } => {
                format!("{}({}) is too large to compute", operation, input)
            }
            Self::IoError(e) => format!("Could not read file: {}", e),
            Self::TomlError(_)
            | Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => format!("Configuration problem: {}", self),
            Self::SerializationError(e) => format!("Could not format output: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolkitError>;
