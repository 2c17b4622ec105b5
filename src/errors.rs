use thiserror::Error;

/// Custom error types for the CalcEstate library
#[derive(Debug, Error)]
pub enum CalcEstateError {
    #[error("Storage error for key {key}: {message}")]
    StorageError { key: String, message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    #[error("Data field {field_id} not found on property {property_id}")]
    FieldNotFound { property_id: String, field_id: String },

    #[error("Unknown ratio id: {0}")]
    UnknownRatio(u32),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Value {value:?} is not a valid {field_type}")]
    InvalidFieldValue { value: String, field_type: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type specific to CalcEstate operations
pub type CalcResult<T> = Result<T, CalcEstateError>;

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Error,
    Warning,
    Info,
}

/// Recoverable vs. non-recoverable errors
pub trait RecoverableError {
    fn is_recoverable(&self) -> bool;
    fn recovery_strategy(&self) -> Option<String>;
    fn severity(&self) -> ErrorSeverity;
}

impl RecoverableError for CalcEstateError {
    // Nothing in this application is fatal: every failure degrades to an
    // empty or stale-but-consistent in-memory state.
    fn is_recoverable(&self) -> bool {
        true
    }

    fn recovery_strategy(&self) -> Option<String> {
        match self {
            CalcEstateError::StorageError { .. } => {
                Some("Check that the data directory exists and is writable".to_string())
            }
            CalcEstateError::SerializationError(_) => {
                Some("The stored document is unreadable; it will be treated as empty".to_string())
            }
            CalcEstateError::PropertyNotFound(_) => {
                Some("Run `calcestate property list` to see existing property ids".to_string())
            }
            CalcEstateError::FieldNotFound { property_id, .. } => {
                Some(format!("Run `calcestate property show {}` to see its fields", property_id))
            }
            CalcEstateError::UnknownRatio(_) => {
                Some("Run `calcestate ratios list` to see valid ratio ids".to_string())
            }
            CalcEstateError::InvalidFieldValue { field_type, .. } => {
                Some(match field_type.as_str() {
                    "number" => "Enter a decimal number such as 1250.5".to_string(),
                    "date" => "Enter a date such as 2024-03-01".to_string(),
                    "boolean" => "Enter either true or false".to_string(),
                    _ => "Enter a different value".to_string(),
                })
            }
            CalcEstateError::InvalidInput(_) => None,
            CalcEstateError::ConfigError(_) => {
                Some("Fix the configuration file or pass --data-dir".to_string())
            }
        }
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            CalcEstateError::StorageError { .. }
            | CalcEstateError::ConfigError(_) => ErrorSeverity::Error,
            CalcEstateError::SerializationError(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Info,
        }
    }
}
