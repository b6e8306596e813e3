//! Core domain types and models
//!
//! Defines BundleOptions, Config, SourceFile, the language table, and SortKey.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub mod errors;

pub use errors::BundleError;

/// Extension superset used when the language list contains the literal "all".
pub const ALL_EXTENSIONS: [&str; 10] =
    [".c", ".cpp", ".cs", ".py", ".java", ".js", ".ts", ".jsx", ".css", ".html"];

/// Sort order for bundled files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending by file name.
    #[default]
    Name,
    /// Ascending by file extension.
    Type,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Name => f.write_str("name"),
            SortKey::Type => f.write_str("type"),
        }
    }
}

/// Information about a discovered source file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Absolute path to the file
    pub path: PathBuf,

    /// Path relative to the scan root, forward-slash normalized
    pub relative_path: String,

    /// File extension (with leading dot), empty when the file has none
    pub extension: String,
}

impl SourceFile {
    /// File name component used for name-ordered bundling.
    pub fn file_name(&self) -> &str {
        self.relative_path.rsplit('/').next().unwrap_or(&self.relative_path)
    }
}

/// Fully-resolved options for one bundle invocation.
#[derive(Debug, Clone)]
pub struct BundleOptions {
    /// Language tokens as supplied (case-insensitive; "all" is special)
    pub languages: Vec<String>,

    /// Destination path for the bundle
    pub output: PathBuf,

    /// Emit a `// Path: <relative path>` line before each file
    pub note: bool,

    /// Ordering of files in the bundle
    pub sort: SortKey,

    /// Drop empty and whitespace-only lines from each file
    pub remove_empty_lines: bool,

    /// Optional author recorded as the first line of the bundle
    pub author: Option<String>,
}

impl BundleOptions {
    /// Serialize these options back into a replayable `bundle` command line.
    ///
    /// The format is fixed: `--output` and `--author` values are always
    /// quoted, `--sort` is always present, boolean flags appear only when
    /// set, and `--author` is omitted when empty.
    pub fn to_command_line(&self) -> String {
        let mut cmd = String::from("bundle");
        for lang in &self.languages {
            cmd.push_str(" -l ");
            cmd.push_str(lang);
        }
        cmd.push_str(&format!(" --output \"{}\"", self.output.display()));
        if self.note {
            cmd.push_str(" --note");
        }
        cmd.push_str(&format!(" --sort {}", self.sort));
        if self.remove_empty_lines {
            cmd.push_str(" --remove-empty-lines");
        }
        if let Some(author) = self.author.as_deref() {
            if !author.is_empty() {
                cmd.push_str(&format!(" --author \"{author}\""));
            }
        }
        cmd
    }
}

/// Optional file-backed configuration (`srcbundle.toml`).
///
/// Every field mirrors BundleOptions; CLI flags override these values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub languages: Vec<String>,

    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(default)]
    pub note: bool,

    #[serde(default)]
    pub sort: SortKey,

    #[serde(default)]
    pub remove_empty_lines: bool,

    #[serde(default)]
    pub author: Option<String>,
}

/// Map one language token to its dot-prefixed extension.
///
/// Matching is case-insensitive; an unrecognized token is an
/// `UnsupportedLanguage` error. The literal "all" is handled by
/// `resolve_extensions`, not here.
pub fn extension_for(token: &str) -> Result<&'static str, BundleError> {
    match token.to_lowercase().as_str() {
        "c" => Ok(".c"),
        "cpp" => Ok(".cpp"),
        "c#" => Ok(".cs"),
        "python" => Ok(".py"),
        "java" => Ok(".java"),
        "js" | "javascript" => Ok(".js"),
        "ts" | "typescript" => Ok(".ts"),
        "jsx" | "react" => Ok(".jsx"),
        "css" => Ok(".css"),
        "html" => Ok(".html"),
        _ => Err(BundleError::UnsupportedLanguage(token.to_string())),
    }
}

/// Resolve a list of language tokens into a deduplicated extension set.
///
/// A literal "all" token (case-sensitive) short-circuits to the full
/// extension superset; the remaining tokens are then not validated.
pub fn resolve_extensions(languages: &[String]) -> Result<Vec<String>, BundleError> {
    if languages.iter().any(|token| token == "all") {
        return Ok(ALL_EXTENSIONS.iter().map(|ext| ext.to_string()).collect());
    }

    let mut extensions: Vec<String> = Vec::with_capacity(languages.len());
    for token in languages {
        let ext = extension_for(token)?;
        if !extensions.iter().any(|known| known == ext) {
            extensions.push(ext.to_string());
        }
    }
    Ok(extensions)
}
