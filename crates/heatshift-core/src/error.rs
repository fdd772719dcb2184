use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeatShiftError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Unknown supplier '{name}' for {jurisdiction}")]
    UnknownSupplier { name: String, jurisdiction: String },

    #[error("Duplicate incentive id: {0}")]
    DuplicateIncentive(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl HeatShiftError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        HeatShiftError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for HeatShiftError {
    fn from(e: serde_json::Error) -> Self {
        HeatShiftError::SerializationError(e.to_string())
    }
}
