//! Subcommand handlers

pub mod cep;
pub mod contact;
pub mod register;
pub mod services;

use anyhow::{anyhow, Result};
use uez_core::DomainError;
use uez_shared::config::AppConfig;
use uez_shared::errors::ErrorResponse;

use crate::cli::Command;

pub async fn run(command: Command, config: &AppConfig) -> Result<()> {
    match command {
        Command::Services { json } => services::list_services(config, json).await,
        Command::Cep { code } => cep::resolve(config, &code).await,
        Command::Register { draft, no_wait } => register::register(config, &draft, !no_wait).await,
        Command::Contact { id, cookie } => contact::contact(config, &id, &cookie).await,
    }
}

/// Turn a domain error into the message the user reads, keeping the
/// original as the source
pub(crate) fn user_error(err: DomainError) -> anyhow::Error {
    let response = ErrorResponse::from(&err);
    anyhow!(err).context(response.message)
}
