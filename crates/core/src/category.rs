//! Coarse content-type buckets derived from file extensions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::naming::split_name;

/// Content category of a vault file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Notes,
    Images,
    Documents,
    Audio,
    Video,
    Data,
    Code,
    /// Obsidian canvas boards.
    Canvas,
    /// Any extension not listed in the table.
    Other,
}

const CATEGORY_TABLE: &[(FileCategory, &[&str])] = &[
    (FileCategory::Notes, &[".md", ".markdown", ".txt"]),
    (
        FileCategory::Images,
        &[".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp", ".bmp"],
    ),
    (
        FileCategory::Documents,
        &[".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx"],
    ),
    (FileCategory::Audio, &[".mp3", ".wav", ".m4a", ".ogg", ".flac"]),
    (FileCategory::Video, &[".mp4", ".mov", ".avi", ".mkv", ".webm"]),
    (FileCategory::Data, &[".json", ".csv", ".yaml", ".yml", ".xml"]),
    (FileCategory::Code, &[".py", ".js", ".ts", ".html", ".css", ".sh"]),
    (FileCategory::Canvas, &[".canvas"]),
];

impl FileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Notes => "notes",
            Self::Images => "images",
            Self::Documents => "documents",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Data => "data",
            Self::Code => "code",
            Self::Canvas => "canvas",
            Self::Other => "other",
        }
    }

    /// Lower-case extensions (with leading dot) mapped to this category.
    /// Empty for [`FileCategory::Other`].
    pub fn extensions(&self) -> &'static [&'static str] {
        CATEGORY_TABLE
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, exts)| *exts)
            .unwrap_or(&[])
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorise a file by its extension (case-insensitive).
///
/// # Examples
/// ```
/// use mdindex_core::category::{FileCategory, categorize};
///
/// assert_eq!(categorize("Photo.JPG"), FileCategory::Images);
/// assert_eq!(categorize("board.canvas"), FileCategory::Canvas);
/// assert_eq!(categorize("archive.zip"), FileCategory::Other);
/// ```
pub fn categorize(filename: &str) -> FileCategory {
    let (_, ext) = split_name(filename);
    let ext = ext.to_lowercase();

    CATEGORY_TABLE
        .iter()
        .find(|(_, exts)| exts.contains(&ext.as_str()))
        .map_or(FileCategory::Other, |(category, _)| *category)
}
