//! Bundle command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::parse_csv;
use crate::bundle::{sort_files, write_bundle};
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::{resolve_extensions, BundleOptions, SortKey};
use crate::scan::FileScanner;
use crate::utils::format_with_commas;

#[derive(Args)]
pub struct BundleArgs {
    /// Language to include (repeatable; comma lists allowed; 'all' for every
    /// supported extension)
    #[arg(short = 'l', long = "language", value_name = "TOKEN")]
    pub language: Vec<String>,

    /// Destination path for the bundle
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Annotate each file with a '// Path:' comment line
    #[arg(short = 'n', long = "note")]
    pub note: bool,

    /// Sort bundled files by file name or by extension
    #[arg(short = 's', long = "sort", value_name = "KEY", value_enum)]
    pub sort: Option<SortKey>,

    /// Drop empty and whitespace-only lines from each file
    #[arg(long = "remove-empty-lines", alias = "rmv")]
    pub remove_empty_lines: bool,

    /// Record an author as the first line of the bundle
    #[arg(short = 'a', long = "author", value_name = "NAME")]
    pub author: Option<String>,

    /// Path to config file (defaults to srcbundle.toml in the current directory)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: BundleArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;

    let file_config = load_config(&cwd, args.config.as_deref())?;
    let languages = parse_csv(&args.language);
    let cli_overrides = CliOverrides {
        languages: if languages.is_empty() { None } else { Some(languages) },
        output: args.output.clone(),
        note: if args.note { Some(true) } else { None },
        sort: args.sort,
        remove_empty_lines: if args.remove_empty_lines { Some(true) } else { None },
        author: args.author.clone(),
    };
    let merged = merge_cli_with_config(file_config, cli_overrides);

    if merged.languages.is_empty() {
        anyhow::bail!(
            "At least one --language must be specified (or set 'languages' in srcbundle.toml)"
        );
    }
    let Some(output) = merged.output else {
        anyhow::bail!("An --output path must be specified (or set 'output' in srcbundle.toml)");
    };

    let options = BundleOptions {
        languages: merged.languages,
        output,
        note: merged.note,
        sort: merged.sort,
        remove_empty_lines: merged.remove_empty_lines,
        author: merged.author.filter(|author| !author.is_empty()),
    };

    let extensions = resolve_extensions(&options.languages)?;

    let mut scanner = FileScanner::new(cwd.clone()).extensions(extensions);
    let mut files = scanner.scan()?;
    let stats = scanner.stats().clone();

    sort_files(&mut files, options.sort);
    let bytes_written = write_bundle(&options, &files)?;

    // --- Print bundle summary ---
    println!();
    println!("Bundle complete!");
    println!();
    println!("Statistics:");
    println!("  Root:            {}", cwd.display());
    println!("  Files scanned:   {}", stats.files_scanned);
    println!("  Files included:  {}", stats.files_included);

    let any_skipped = stats.files_skipped_extension > 0 || stats.files_skipped_path > 0;
    if any_skipped {
        println!("  Files skipped:");
        if stats.files_skipped_extension > 0 {
            println!("    extension:     {}", stats.files_skipped_extension);
        }
        if stats.files_skipped_path > 0 {
            println!("    excluded path: {}", stats.files_skipped_path);
        }
    }
    println!("  Bytes written:   {}", format_with_commas(bytes_written));
    println!();
    println!("Output file:");
    println!("  {}", options.output.display());

    Ok(())
}
