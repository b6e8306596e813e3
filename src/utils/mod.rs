//! Utility functions

use anyhow::{Context, Result};
use std::path::Path;

/// Read a file as text.
///
/// Valid UTF-8 is returned as-is; anything else falls back to a Windows-1252
/// decode so legacy source files do not abort the whole bundle.
pub fn read_file_safe(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            let bytes = err.into_bytes();
            let (text, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(text.into_owned())
        }
    }
}

/// Render a path with forward slashes regardless of platform.
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Format a number with thousands separators (e.g. 1048576 → "1,048,576").
pub fn format_with_commas(n: u64) -> String {
    let s = n.to_string();
    let bytes = s.as_bytes();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, &b) in bytes.iter().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(b as char);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_utf8_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "fn main() {{}}\n").unwrap();
        assert_eq!(read_file_safe(file.path()).unwrap(), "fn main() {}\n");
    }

    #[test]
    fn falls_back_to_windows_1252() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        // 0xE9 is 'é' in Windows-1252 but invalid standalone UTF-8.
        file.write_all(b"caf\xe9\n").unwrap();
        assert_eq!(read_file_safe(file.path()).unwrap(), "café\n");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_file_safe(Path::new("/nonexistent/x.py")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/x.py"));
    }

    #[test]
    fn formats_thousands() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(1000), "1,000");
        assert_eq!(format_with_commas(1048576), "1,048,576");
    }
}
