use thiserror::Error;

#[derive(Error, Debug)]
pub enum BestiaryError {
    #[error("{kind}::{capability}() must be overridden by a more specific type")]
    UnimplementedCapability {
        kind: &'static str,
        capability: &'static str,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}' ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Domain,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl BestiaryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BestiaryError::UnimplementedCapability { .. } => ErrorCategory::Domain,
            BestiaryError::TomlError(_)
            | BestiaryError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            BestiaryError::IoError(_) | BestiaryError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Domain => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code used by the binary.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BestiaryError::UnimplementedCapability { kind, .. } => {
                format!("Метод makeSound() должен быть переопределён в дочернем классе ({kind})")
            }
            BestiaryError::IoError(e) => format!("Could not read a file: {e}"),
            BestiaryError::TomlError(e) => format!("Roster file is not valid TOML: {e}"),
            BestiaryError::SerializationError(e) => format!("Could not render the report: {e}"),
            BestiaryError::InvalidConfigValueError { field, reason, .. } => {
                format!("Roster field '{field}' is invalid: {reason}")
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BestiaryError::UnimplementedCapability { .. } => {
                "Call make_sound() on a Mammal, Dog or Bulldog instead of a bare Animal"
            }
            BestiaryError::IoError(_) => "Check that the --config path exists and is readable",
            BestiaryError::TomlError(_) => "Fix the TOML syntax in the roster file",
            BestiaryError::SerializationError(_) => "Retry without --json",
            BestiaryError::InvalidConfigValueError { .. } => {
                "Edit the roster file so every name is non-empty and at most 64 characters"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BestiaryError>;
