//! Create-rsp command implementation
//!
//! Interactively collects the bundle options and records an equivalent
//! command line into bundle.rsp for later replay via `srcbundle @bundle.rsp`.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use super::prompt::{prompt_optional, prompt_required, prompt_yes_no};
use super::utils::parse_csv;
use crate::domain::{BundleOptions, SortKey};

/// File the generated command line is written to, in the current directory.
pub const RSP_FILE_NAME: &str = "bundle.rsp";

pub fn run() -> Result<()> {
    let stdin = std::io::stdin();
    let mut reader = stdin.lock();

    let languages_answer =
        prompt_required(&mut reader, "Languages (comma separated, or 'all')")?;
    let languages = parse_csv(&[languages_answer]);

    let output = prompt_required(&mut reader, "Output file path")?;
    let note = prompt_yes_no(&mut reader, "Annotate each file with its source path? (y/n)")?;

    // Only emptiness is validated here; language tokens are resolved when the
    // response file is replayed.
    let sort_answer =
        prompt_optional(&mut reader, "Sort by (name/type) [name]")?.unwrap_or_default();
    let sort =
        if sort_answer.eq_ignore_ascii_case("type") { SortKey::Type } else { SortKey::Name };

    let remove_empty_lines = prompt_yes_no(&mut reader, "Remove empty lines? (y/n)")?;
    let author = prompt_optional(&mut reader, "Author (optional)")?.unwrap_or_default();

    let options = BundleOptions {
        languages,
        output: PathBuf::from(output),
        note,
        sort,
        remove_empty_lines,
        author: if author.is_empty() { None } else { Some(author) },
    };

    let command_line = options.to_command_line();
    fs::write(RSP_FILE_NAME, format!("{command_line}\n"))
        .with_context(|| format!("failed to write {RSP_FILE_NAME}"))?;

    println!();
    println!("Wrote {RSP_FILE_NAME}:");
    println!("  {command_line}");
    println!();
    println!("Replay it with: srcbundle @{RSP_FILE_NAME}");

    Ok(())
}
