//! Filename shape detection and redaction.
//!
//! A filename is classified into a [`PatternType`] from the shape of its stem,
//! then replaced by a placeholder that keeps that shape (and the extension)
//! while dropping the title itself.

mod classifier;
mod redactor;
mod types;

pub use classifier::classify;
pub use redactor::{redact, title_digest};
pub use types::PatternType;

/// Split a file name into `(stem, extension)`.
///
/// The extension includes its leading dot and keeps its original case. A dot
/// at the very start or very end of the name does not start an extension.
///
/// # Examples
/// ```
/// use mdindex_core::naming::split_name;
///
/// assert_eq!(split_name("2024-01-15.md"), ("2024-01-15", ".md"));
/// assert_eq!(split_name("archive.tar.gz"), ("archive.tar", ".gz"));
/// assert_eq!(split_name("README"), ("README", ""));
/// assert_eq!(split_name(".hidden"), (".hidden", ""));
/// assert_eq!(split_name("draft."), ("draft.", ""));
/// ```
pub fn split_name(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(i) if i > 0 && i < filename.len() - 1 => filename.split_at(i),
        _ => (filename, ""),
    }
}
