use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

/// Result type returned by service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Outcomes the HTTP layer turns into distinct status codes.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed identifier or request body.
    #[error("{0}")]
    Validation(String),
    /// Well-formed identifier without a matching record. Holds the entity name.
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("unauthorized")]
    Unauthorized,
    /// Storage or other unexpected failure.
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    /// Map a repository error, naming `entity` when the record is missing.
    pub fn from_repository(entity: &'static str) -> impl FnOnce(RepositoryError) -> Self {
        move |err| match err {
            RepositoryError::NotFound => ServiceError::NotFound(entity),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        ServiceError::from_repository("Record")(value)
    }
}

impl From<FormError> for ServiceError {
    fn from(value: FormError) -> Self {
        ServiceError::Validation(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_not_found_names_the_entity() {
        let err = ServiceError::from_repository("Product")(RepositoryError::NotFound);
        assert_eq!(err.to_string(), "Product not found");
    }

    #[test]
    fn other_repository_errors_become_internal() {
        let err = ServiceError::from(RepositoryError::InvalidData("bad badges".to_string()));
        assert!(matches!(err, ServiceError::Internal(message) if message.contains("bad badges")));
    }

    #[test]
    fn form_errors_become_validation() {
        let err = ServiceError::from(FormError::MissingFields("Name is required"));
        assert!(matches!(err, ServiceError::Validation(message) if message == "Name is required"));
    }
}
