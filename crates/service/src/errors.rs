use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// A domain invariant was violated.
    #[error("business rule violated: {0}")]
    Business(String),
    /// Required identifying data is missing or malformed.
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Client-side faults (4xx) as opposed to storage failures.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ServiceError::Db(_) | ServiceError::Model(models::errors::ModelError::Db(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::ServiceError;
    use models::errors::ModelError;

    #[test]
    fn classifies_client_errors() {
        assert!(ServiceError::Business("x".into()).is_client_error());
        assert!(ServiceError::Validation("x".into()).is_client_error());
        assert!(ServiceError::not_found("meetup").is_client_error());
        assert!(ServiceError::Model(ModelError::Validation("x".into())).is_client_error());
        assert!(!ServiceError::Db("down".into()).is_client_error());
        assert!(!ServiceError::Model(ModelError::Db("down".into())).is_client_error());
    }

    #[test]
    fn not_found_message() {
        assert_eq!(ServiceError::not_found("meetup").to_string(), "not found: meetup not found");
    }
}
