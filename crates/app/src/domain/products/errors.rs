//! Products service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::products::validation::ValidationErrors;

/// Failures raised by a products store.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("model number already exists")]
    DuplicateModelNumber,

    #[error("storage error")]
    Sql(#[source] Error),

    #[error("failed to encode or decode colors and sizes")]
    Serialization(#[from] serde_json::Error),
}

impl From<Error> for RepositoryError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::DuplicateModelNumber,
            Some(_) | None => Self::Sql(error),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("a product with model number {0:?} already exists")]
    DuplicateModelNumber(String),

    #[error("product not found")]
    NotFound,

    #[error("search query must not be empty")]
    InvalidQuery,

    #[error("storage error")]
    Repository(#[source] RepositoryError),
}

impl From<RepositoryError> for ProductsServiceError {
    fn from(error: RepositoryError) -> Self {
        match error {
            // The relational store catches cross-process races the service
            // lock can't see; the offending value isn't known at this point.
            RepositoryError::DuplicateModelNumber => Self::DuplicateModelNumber(String::new()),
            other => Self::Repository(other),
        }
    }
}
