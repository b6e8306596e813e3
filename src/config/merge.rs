//! CLI argument merging with config

use crate::domain::{Config, SortKey};
use std::path::PathBuf;

/// Values supplied on the command line. `None` means "not given, keep the
/// config value".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub languages: Option<Vec<String>>,
    pub output: Option<PathBuf>,
    pub note: Option<bool>,
    pub sort: Option<SortKey>,
    pub remove_empty_lines: Option<bool>,
    pub author: Option<String>,
}

pub fn merge_cli_with_config(mut base_config: Config, cli: CliOverrides) -> Config {
    if let Some(languages) = cli.languages {
        base_config.languages = languages;
    }
    if let Some(output) = cli.output {
        base_config.output = Some(output);
    }
    if let Some(note) = cli.note {
        base_config.note = note;
    }
    if let Some(sort) = cli.sort {
        base_config.sort = sort;
    }
    if let Some(remove_empty_lines) = cli.remove_empty_lines {
        base_config.remove_empty_lines = remove_empty_lines;
    }
    if let Some(author) = cli.author {
        base_config.author = Some(author);
    }
    base_config
}
