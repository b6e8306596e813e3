//! Shared CLI helpers: comma-list parsing and response-file expansion.

use anyhow::{Context, Result};
use std::fs;

/// Split repeated flag values on commas, trimming whitespace and dropping
/// empty entries, so `-l "python, js"` and `-l python -l js` are equivalent.
pub fn parse_csv(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Expand `@file` arguments in place into the tokens of the named file.
///
/// This is how a recorded `bundle.rsp` is replayed: `srcbundle @bundle.rsp`.
pub fn expand_response_files(args: Vec<String>) -> Result<Vec<String>> {
    let mut expanded = Vec::with_capacity(args.len());
    for arg in args {
        match arg.strip_prefix('@') {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("failed to read response file {path}"))?;
                expanded.extend(split_command_line(&contents));
            }
            None => expanded.push(arg),
        }
    }
    Ok(expanded)
}

/// Split a recorded command line on whitespace, honoring double quotes so
/// quoted values (output paths, author names) stay one token.
pub fn split_command_line(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in input.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_csv_splits_and_trims() {
        let values = vec!["python, js".to_string(), "c#".to_string()];
        assert_eq!(parse_csv(&values), vec!["python", "js", "c#"]);
    }

    #[test]
    fn parse_csv_drops_empty_entries() {
        let values = vec!["python,,  ,js".to_string()];
        assert_eq!(parse_csv(&values), vec!["python", "js"]);
    }

    #[test]
    fn split_preserves_quoted_values() {
        let tokens =
            split_command_line(r#"bundle -l python --output "my bundle.txt" --note"#);
        assert_eq!(
            tokens,
            vec!["bundle", "-l", "python", "--output", "my bundle.txt", "--note"]
        );
    }

    #[test]
    fn split_handles_trailing_newline() {
        let tokens = split_command_line("bundle -l js --sort name\n");
        assert_eq!(tokens, vec!["bundle", "-l", "js", "--sort", "name"]);
    }

    #[test]
    fn expand_inlines_response_file_tokens() {
        let mut rsp = tempfile::NamedTempFile::new().unwrap();
        write!(rsp, "bundle -l python --output \"out.txt\" --sort name\n").unwrap();

        let args = vec![
            "srcbundle".to_string(),
            format!("@{}", rsp.path().display()),
        ];
        let expanded = expand_response_files(args).unwrap();
        assert_eq!(
            expanded,
            vec!["srcbundle", "bundle", "-l", "python", "--output", "out.txt", "--sort", "name"]
        );
    }

    #[test]
    fn expand_fails_on_missing_response_file() {
        let args = vec!["srcbundle".to_string(), "@/nonexistent.rsp".to_string()];
        let err = expand_response_files(args).unwrap_err();
        assert!(err.to_string().contains("response file"));
    }

    #[test]
    fn expand_leaves_plain_arguments_alone() {
        let args = vec!["srcbundle".to_string(), "bundle".to_string(), "-l".to_string()];
        assert_eq!(expand_response_files(args.clone()).unwrap(), args);
    }
}
