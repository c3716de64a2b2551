//! Registration submission errors
//!
//! Each variant maps to the notice the user sees; details travel in the
//! error envelope for the presentation layer.

use thiserror::Error;
use uez_shared::errors::{error_codes, ErrorResponse};
use uez_shared::utils::validation::ValidationErrors;

use crate::wizard::WizardStep;

/// Notice shown when a step or the whole draft fails validation
pub const BLOCKING_NOTICE: &str = "Preencha os dados corretamente";

/// Notice shown while a submission is outstanding
pub const LOADING_NOTICE: &str = "Carregando... Aguarde um pouco";

/// Reasons a registration submission is not attempted
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmissionError {
    #[error("Submission requested from non-terminal step {step:?}")]
    NotTerminalStep { step: WizardStep },

    #[error("A submission is already in flight")]
    AlreadySubmitting,

    #[error("Draft has {} invalid field(s)", errors.errors().len())]
    Invalid { errors: ValidationErrors },

    #[error("Password confirmation does not match")]
    PasswordMismatch,

    #[error("Provider registration without a service category")]
    MissingServiceCategory,
}

impl SubmissionError {
    /// User-visible notice (pt-BR)
    pub fn notice(&self) -> &'static str {
        match self {
            SubmissionError::NotTerminalStep { .. } | SubmissionError::Invalid { .. } => BLOCKING_NOTICE,
            SubmissionError::AlreadySubmitting => LOADING_NOTICE,
            SubmissionError::PasswordMismatch => crate::validation::PASSWORD_MISMATCH_MESSAGE,
            SubmissionError::MissingServiceCategory => "Selecione o serviço que você oferece",
        }
    }
}

impl From<&SubmissionError> for ErrorResponse {
    fn from(err: &SubmissionError) -> Self {
        let error_code = match err {
            SubmissionError::NotTerminalStep { .. } => error_codes::NOT_TERMINAL_STEP,
            SubmissionError::AlreadySubmitting => error_codes::SUBMISSION_IN_FLIGHT,
            SubmissionError::Invalid { .. } => error_codes::VALIDATION_ERROR,
            SubmissionError::PasswordMismatch => error_codes::PASSWORD_MISMATCH,
            SubmissionError::MissingServiceCategory => error_codes::MISSING_SERVICE_CATEGORY,
        };

        let response = ErrorResponse::new(error_code, err.notice());
        match err {
            SubmissionError::Invalid { errors } => {
                response.add_detail("fields", errors.to_field_errors())
            }
            _ => response,
        }
    }
}
