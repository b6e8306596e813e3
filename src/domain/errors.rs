//! Domain-specific errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("unsupported language '{0}' (expected one of: c, cpp, c#, python, java, js, ts, jsx, css, html, or 'all')")]
    UnsupportedLanguage(String),
}
