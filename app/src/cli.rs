//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "uez")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "UEZ Company marketplace client")]
pub struct Cli {
    /// Extra configuration file layered over `uez.toml`
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the service categories providers can offer
    Services {
        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve a postal code (CEP) to an address
    Cep {
        /// CEP, with or without the dash
        code: String,
    },
    /// Run the registration wizard from a draft file and submit it
    Register {
        /// TOML file with the form fields (`email`, `nome`, `userType`, `[endereco]`...)
        draft: PathBuf,
        /// Do not wait for the post-registration redirect
        #[arg(long)]
        no_wait: bool,
    },
    /// Open a chat with a provider
    Contact {
        /// Provider id
        id: String,
        /// `Cookie` header holding the session token
        #[arg(long, env = "UEZ_COOKIE")]
        cookie: String,
    },
}
