//! # UEZ command-line client
//!
//! Wires the reqwest adapters from `uez_infra` into the `uez_core` services
//! and exposes them as subcommands of the `uez` binary.

pub mod cli;
pub mod commands;
pub mod draft_file;
pub mod logging;
pub mod settings;

pub use cli::{Cli, Command};
