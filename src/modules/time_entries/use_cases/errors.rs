use thiserror::Error;

use crate::modules::time_entries::core::ports::RepositoryError;
use crate::modules::time_entries::core::validation::{IdError, ValidationError};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{message}")]
    InvalidRequest {
        message: &'static str,
        error_key: &'static str,
    },

    #[error("time entry {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repository(RepositoryError),
}

impl ApplicationError {
    pub fn id_exists() -> Self {
        Self::InvalidRequest {
            message: "A new timeEntry cannot already have an ID",
            error_key: "idexists",
        }
    }

    pub fn id_null() -> Self {
        Self::InvalidRequest {
            message: "Invalid id",
            error_key: "idnull",
        }
    }

    pub fn id_invalid() -> Self {
        Self::InvalidRequest {
            message: "Invalid ID",
            error_key: "idinvalid",
        }
    }

    pub fn id_not_found() -> Self {
        Self::InvalidRequest {
            message: "Entity not found",
            error_key: "idnotfound",
        }
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Missing(id) => Self::NotFound(id),
            err => Self::Repository(err),
        }
    }
}

impl From<IdError> for ApplicationError {
    fn from(err: IdError) -> Self {
        match err {
            IdError::Missing => Self::id_null(),
            IdError::Mismatch { .. } => Self::id_invalid(),
        }
    }
}
