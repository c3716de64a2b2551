//! Registration wizard state machine
//!
//! The wizard owns the draft and moves through four steps. Every change is an
//! explicit [`WizardEvent`] fed to [`WizardState::transition`], which returns
//! the next state together with a [`StepOutcome`] for the presentation layer.

mod event;
mod state;
mod step;

#[cfg(test)]
mod tests;

pub use event::{StepOutcome, Transition, WizardEvent};
pub use state::{WizardOptions, WizardState, ACCOUNT_KIND_NOTICE};
pub use step::WizardStep;
