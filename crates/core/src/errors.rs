use thiserror::Error;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the onboarding domain.
///
/// Validation and conflict messages carry the product's user-facing copy;
/// the HTTP layer forwards them verbatim inside its error body.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

impl Error {
    /// The user-facing message, without the classification prefix.
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(ValidationError::InvalidInput(msg)) => msg.clone(),
            Error::Validation(ValidationError::MissingField(field)) => {
                format!("{} es requerido", field)
            }
            Error::Validation(ValidationError::DecimalParse(e)) => e.to_string(),
            Error::AccessDenied(msg) | Error::NotFound(msg) | Error::Conflict(msg) => msg.clone(),
        }
    }
}

// Add From implementation for rust_decimal::Error
impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_strips_classification() {
        let err = Error::Validation(ValidationError::InvalidInput(
            "La cantidad y el precio deben ser mayores a 0".to_string(),
        ));
        assert_eq!(
            err.user_message(),
            "La cantidad y el precio deben ser mayores a 0"
        );
        assert!(err.to_string().starts_with("Input validation failed"));
    }

    #[test]
    fn test_missing_field_message() {
        let err = Error::Validation(ValidationError::MissingField("user_id".to_string()));
        assert_eq!(err.user_message(), "user_id es requerido");
    }
}
