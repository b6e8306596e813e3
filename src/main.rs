//! srcbundle: Bundle source files into a single annotated text file
//!
//! This tool scans the current directory tree for source files in the
//! requested languages and concatenates them into one output file, with
//! optional path annotations, sorting, and blank-line stripping.

use anyhow::Result;

mod bundle;
mod cli;
mod config;
mod domain;
mod scan;
mod utils;

fn main() -> Result<()> {
    cli::run()
}
