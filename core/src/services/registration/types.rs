//! Types for registration results

use serde::Serialize;

use crate::domain::Redirect;

/// Result of a submission that reached the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SubmissionOutcome {
    /// The server confirmed the registration
    Registered {
        /// Message to show while waiting for the redirect
        message: String,
        /// Login page preloaded with the registered email
        redirect: Redirect,
    },
    /// The server refused the registration; the draft is kept for correction
    Rejected { message: String },
}

impl SubmissionOutcome {
    /// Message shown to the user in either case
    pub fn message(&self) -> &str {
        match self {
            SubmissionOutcome::Registered { message, .. } => message,
            SubmissionOutcome::Rejected { message } => message,
        }
    }

    pub fn is_registered(&self) -> bool {
        matches!(self, SubmissionOutcome::Registered { .. })
    }
}
