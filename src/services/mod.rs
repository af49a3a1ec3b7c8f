//! Thin service layer between routes and the repository traits.

use thiserror::Error;

use crate::domain::draft::DraftError;
use crate::repository::errors::RepositoryError;

pub mod admin;
pub mod catalog;
pub mod planner;
pub mod trips;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    #[error("access denied")]
    Forbidden,

    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Internal(other.to_string()),
        }
    }
}
