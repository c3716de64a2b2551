//! Unit tests for domain error types

use uez_shared::errors::ErrorResponse;
use uez_shared::utils::validation::ValidationErrors;

use crate::errors::{DomainError, SubmissionError, BLOCKING_NOTICE, LOADING_NOTICE};

#[test]
fn test_submission_error_notices() {
    assert_eq!(SubmissionError::AlreadySubmitting.notice(), LOADING_NOTICE);
    assert_eq!(SubmissionError::PasswordMismatch.notice(), "As senhas devem coincidir");
    assert_eq!(
        SubmissionError::Invalid { errors: ValidationErrors::new() }.notice(),
        BLOCKING_NOTICE
    );
}

#[test]
fn test_invalid_submission_carries_field_details() {
    let mut errors = ValidationErrors::new();
    errors.add_error("cpf", "Formato de CPF inválido", "pattern");

    let error = DomainError::from(SubmissionError::Invalid { errors });
    let response = ErrorResponse::from(&error);

    assert_eq!(response.error, "VALIDATION_ERROR");
    assert_eq!(response.message, BLOCKING_NOTICE);
    let details = response.details.unwrap();
    assert_eq!(details["fields"]["cpf"][0], "Formato de CPF inválido");
}

#[test]
fn test_missing_service_category_is_reported() {
    let error: DomainError = SubmissionError::MissingServiceCategory.into();
    let response = ErrorResponse::from(&error);

    assert_eq!(response.error, "MISSING_SERVICE_CATEGORY");
    assert!(!response.message.is_empty());
}

#[test]
fn test_remote_error_surfaces_message() {
    let error = DomainError::Remote {
        message: "connection refused".to_string(),
    };
    assert!(error.to_string().contains("connection refused"));
    assert_eq!(ErrorResponse::from(&error).error, "REMOTE_ERROR");
}

#[test]
fn test_internal_error_hides_details() {
    let error = DomainError::Internal {
        message: "poisoned state".to_string(),
    };
    let response = ErrorResponse::from(&error);
    assert!(!response.message.contains("poisoned"));
}
