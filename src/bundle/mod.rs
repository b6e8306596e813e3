//! The bundling core: ordering, content transformation, and output writing.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::debug;

use crate::domain::{BundleOptions, SortKey, SourceFile};
use crate::utils::read_file_safe;

/// Line terminator used for emitted lines and for rejoining filtered content.
#[cfg(windows)]
pub const NEWLINE: &str = "\r\n";
#[cfg(not(windows))]
pub const NEWLINE: &str = "\n";

/// Order files for emission. Both sorts are stable, so ties keep
/// discovery order.
pub fn sort_files(files: &mut [SourceFile], key: SortKey) {
    match key {
        SortKey::Name => files.sort_by(|a, b| a.file_name().cmp(b.file_name())),
        SortKey::Type => files.sort_by(|a, b| a.extension.cmp(&b.extension)),
    }
}

/// Drop empty and whitespace-only lines, rejoining with the platform newline.
///
/// `lines()` splits on both `\r\n` and `\n`, so this may change the file's
/// original line-ending convention. Idempotent.
pub fn strip_blank_lines(content: &str) -> String {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join(NEWLINE)
}

/// Write the bundle to `options.output`, returning the number of bytes written.
///
/// Files are emitted in the order given. Each file becomes: an optional
/// `// Path:` note line, the (possibly filtered) content as a line, and one
/// explicit blank line. On error the partially written output is left on
/// disk; there is no temp-file-then-rename step.
pub fn write_bundle(options: &BundleOptions, files: &[SourceFile]) -> Result<u64> {
    let out = File::create(&options.output)
        .with_context(|| format!("failed to create {}", options.output.display()))?;
    let mut writer = CountingWriter::new(BufWriter::new(out));

    if let Some(author) = options.author.as_deref() {
        if !author.is_empty() {
            write!(writer, "// Author: {author}{NEWLINE}")?;
        }
    }

    for file in files {
        let raw = read_file_safe(&file.path)?;
        let content =
            if options.remove_empty_lines { strip_blank_lines(&raw) } else { raw };

        if options.note {
            write!(writer, "// Path: {}{NEWLINE}", file.relative_path)?;
        }
        write!(writer, "{content}{NEWLINE}")?;
        write!(writer, "{NEWLINE}")?;
        debug!(path = %file.relative_path, "bundled");
    }

    writer
        .flush()
        .with_context(|| format!("failed to write bundle to {}", options.output.display()))?;
    Ok(writer.bytes_written())
}

/// BufWriter wrapper tracking how many bytes were emitted.
struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.bytes += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
