use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmiError {
    #[error("invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("invalid range: min {min} equals max {max}")]
    InvalidRange { min: f64, max: f64 },
}

impl EmiError {
    pub(crate) fn invalid_input(field: &str, reason: impl Into<String>) -> Self {
        EmiError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EmiError>;

/// Rejects `NaN` and infinities for the named field.
pub(crate) fn ensure_finite(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EmiError::invalid_input(field, format!("{} is not a finite number", value)))
    }
}
