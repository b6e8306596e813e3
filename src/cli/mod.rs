//! Command-line interface for srcbundle
//!
//! Provides `bundle`, `create-rsp`, and `completions` subcommands, with
//! `@file` response-file expansion applied before parsing.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod bundle;
mod completions;
mod create_rsp;
mod prompt;
mod utils;

/// Bundle source files from a directory tree into a single text file
#[derive(Parser)]
#[command(name = "srcbundle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Concatenate matching source files into one output file
    Bundle(bundle::BundleArgs),

    /// Interactively record bundle options into a bundle.rsp response file
    CreateRsp,

    /// Generate shell completion scripts
    Completions(completions::CompletionsArgs),
}

pub fn run() -> Result<()> {
    let args = utils::expand_response_files(std::env::args().collect())?;
    let cli = Cli::parse_from(args);

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Bundle(args) => bundle::run(args),
        Commands::CreateRsp => create_rsp::run(),
        Commands::Completions(args) => completions::run(args),
    }
}
