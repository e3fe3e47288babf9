//! Placeholder names that keep a filename's shape but not its content.

use sha2::{Digest, Sha256};

use super::classifier::NUMBERED_PREFIX_RE;
use super::split_name;
use super::types::PatternType;

/// Replace a filename with a placeholder for the given pattern.
///
/// The extension is kept verbatim. Date-like and id-like names become fixed
/// sample values, numbered notes keep only their numeric prefix, and anything
/// else becomes a short digest of the title plus its word count.
///
/// # Examples
/// ```
/// use mdindex_core::naming::{PatternType, redact};
///
/// assert_eq!(redact("2023-11-02.md", PatternType::DailyNote), "2024-01-15.md");
/// assert_eq!(
///     redact("042 - Tax return.md", PatternType::NumberedPrefix),
///     "042 - [Redacted Title].md"
/// );
/// ```
pub fn redact(filename: &str, pattern: PatternType) -> String {
    let (stem, ext) = split_name(filename);

    match pattern {
        PatternType::DailyNote if stem.contains('-') => format!("2024-01-15{ext}"),
        PatternType::DailyNote => format!("2024.01.15{ext}"),
        PatternType::WeeklyNote => format!("2024-W03{ext}"),
        PatternType::Zettelkasten => format!("20240115143022{ext}"),
        PatternType::Timestamp => format!("202401151430{ext}"),
        PatternType::NumberedPrefix => match NUMBERED_PREFIX_RE.captures(stem) {
            Some(caps) => format!("{}[Redacted Title]{ext}", &caps[1]),
            None => title_placeholder(stem, ext),
        },
        PatternType::Uuid => format!("xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx{ext}"),
        PatternType::Standard => title_placeholder(stem, ext),
    }
}

/// Six hex characters of the SHA-256 of `stem`.
///
/// Stable across runs and platforms, so repeated scans of the same vault
/// produce identical reports.
pub fn title_digest(stem: &str) -> String {
    let digest = Sha256::digest(stem.as_bytes());
    hex::encode(&digest[..3])
}

fn title_placeholder(stem: &str, ext: &str) -> String {
    let words = stem.split_whitespace().count();
    format!("[Note_{}] (~{words} words in title){ext}", title_digest(stem))
}
