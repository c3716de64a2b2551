//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{SubmissionError, BLOCKING_NOTICE, LOADING_NOTICE};

use thiserror::Error;
use uez_shared::errors::{error_codes, ErrorResponse};

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Business rule violation: {message}")]
    BusinessRule { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Remote service error: {message}")]
    Remote { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Convert DomainError to the shared error envelope
impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Submission(submission) => submission.into(),
            DomainError::Validation { message } => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone())
            }
            DomainError::BusinessRule { message } => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone())
            }
            DomainError::NotFound { resource } => {
                ErrorResponse::new(error_codes::NOT_FOUND, format!("{} não encontrado", resource))
            }
            DomainError::Unauthorized => {
                ErrorResponse::new(error_codes::UNAUTHORIZED, "Faça login para continuar")
            }
            DomainError::Remote { message } => {
                ErrorResponse::new(error_codes::REMOTE_ERROR, message.clone())
            }
            DomainError::Internal { .. } => {
                ErrorResponse::new(error_codes::INTERNAL_ERROR, "Erro inesperado")
            }
        }
    }
}
