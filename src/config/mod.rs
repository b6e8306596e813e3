//! Configuration loading and CLI merging

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::domain::Config;

mod merge;

pub use merge::{merge_cli_with_config, CliOverrides};

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "srcbundle.toml";

/// Load configuration from an explicit path or from `srcbundle.toml` next to
/// the scan root. A missing default file yields `Config::default()`; a
/// missing explicit file is an error.
pub fn load_config(anchor: &Path, explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            path.to_path_buf()
        }
        None => {
            let candidate = anchor.join(CONFIG_FILE_NAME);
            if !candidate.exists() {
                return Ok(Config::default());
            }
            candidate
        }
    };

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: Config = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SortKey;
    use tempfile::TempDir;

    #[test]
    fn missing_default_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert!(config.languages.is_empty());
        assert_eq!(config.sort, SortKey::Name);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_config(dir.path(), Some(&missing)).is_err());
    }

    #[test]
    fn parses_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"
languages = ["python", "js"]
output = "bundle.txt"
note = true
sort = "type"
remove_empty_lines = true
author = "Team"
"#,
        )
        .unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.languages, vec!["python".to_string(), "js".to_string()]);
        assert_eq!(config.output.as_deref().unwrap().to_str(), Some("bundle.txt"));
        assert!(config.note);
        assert_eq!(config.sort, SortKey::Type);
        assert!(config.remove_empty_lines);
        assert_eq!(config.author.as_deref(), Some("Team"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "languges = [\"python\"]\n").unwrap();
        assert!(load_config(dir.path(), None).is_err());
    }
}
