//! Report rendering for scanned vaults.
//!
//! Everything here is a pure function of a [`VaultStructure`]; writing the
//! result somewhere is left to [`crate::output`].

mod markdown;
mod samples;
mod tree;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::vault::VaultStructure;

pub use markdown::render_markdown;
pub use samples::{MAX_SAMPLES, SampleSelection, select_samples};
pub use tree::render_tree;

/// Output format of a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown report format: {other}")),
        }
    }
}

/// Pretty-printed JSON of the structural model.
///
/// Contains the same redacted data as the Markdown report.
pub fn render_json(structure: &VaultStructure) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(structure)
}

/// Render a structure in the requested format.
pub fn render(
    structure: &VaultStructure,
    format: ReportFormat,
) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Markdown => Ok(render_markdown(structure)),
        ReportFormat::Json => render_json(structure),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::{FileEntry, FolderInfo, ROOT_KEY};
    use chrono::Local;

    #[test]
    fn test_format_from_str() {
        assert_eq!("markdown".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert_eq!("MD".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert_eq!("json".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert!("yaml".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_render_json_shape() {
        let mut structure = VaultStructure::new("MyVault", Local::now());
        let mut root = FolderInfo::new(0);
        let entry = FileEntry::from_filename("Secret plans.md");
        structure.stats.record_file(&entry);
        root.push(entry);
        structure.folders.insert(ROOT_KEY.into(), root);

        let json = render_json(&structure).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["root"], "MyVault");
        assert_eq!(value["stats"]["total_files"], 1);
        assert_eq!(value["stats"]["file_types"]["notes"], 1);
        assert_eq!(value["stats"]["patterns_found"]["standard"], 1);
        let file = &value["folders"]["/"]["files"][0];
        assert_eq!(file["pattern"], "standard");
        assert_eq!(file["type"], "notes");
        assert_eq!(file["extension"], ".md");
        assert!(!json.contains("Secret"));
        assert!(!json.contains("plans"));
    }

    #[test]
    fn test_render_dispatch() {
        let structure = VaultStructure::new("V", Local::now());
        let md = render(&structure, ReportFormat::Markdown).unwrap();
        assert!(md.starts_with("# Obsidian Vault Index"));
        let json = render(&structure, ReportFormat::Json).unwrap();
        assert!(json.trim_start().starts_with('{'));
    }
}
