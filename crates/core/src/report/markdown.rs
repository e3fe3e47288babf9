//! Markdown rendering of a [`VaultStructure`].

use super::samples::select_samples;
use super::tree::render_tree;
use crate::vault::{FolderInfo, ROOT_KEY, VaultStructure};

const PRIVACY_NOTE: &str = "> **Privacy Note**: This index shows vault structure only. \
File names are redacted; actual note content is never accessed.";

const USAGE_SECTION: &str = "## How to Use This Index

This index is designed for AI assistants to understand your vault's organization \
without accessing private content.

**What's included:**
- Complete folder hierarchy with real folder names
- File counts and types per folder
- Detected naming patterns (e.g., daily notes format)
- Redacted file names showing structure only

**What's NOT included:**
- Actual file names or titles
- File contents
- Links between notes
- Tags or metadata

**For AI tools**: Use this to understand where different types of notes live, \
how the user organizes their vault, and what naming conventions they use.
";

/// Render the full Markdown index.
///
/// Pure function of the structure; the filesystem is never touched.
pub fn render_markdown(structure: &VaultStructure) -> String {
    let stats = &structure.stats;
    let mut md = String::new();

    // Title
    md.push_str("# Obsidian Vault Index\n\n");
    md.push_str(PRIVACY_NOTE);
    md.push_str("\n\n");
    md.push_str(&format!("**Vault**: `{}`\n", structure.root));
    md.push_str(&format!(
        "**Generated**: {}\n",
        structure.scanned_at.format("%Y-%m-%dT%H:%M:%S%.6f")
    ));
    md.push_str("\n---\n\n");

    // Summary
    md.push_str("## Summary Statistics\n\n");
    md.push_str("| Metric | Value |\n");
    md.push_str("|--------|-------|\n");
    md.push_str(&format!("| Total Folders | {} |\n", stats.total_folders));
    md.push_str(&format!("| Total Files | {} |\n", stats.total_files));
    md.push_str(&format!("| Max Depth | {} levels |\n", stats.depth_max));
    md.push('\n');

    // File types
    md.push_str("### Files by Type\n\n");
    md.push_str("| Type | Count |\n");
    md.push_str("|------|-------|\n");
    for (category, count) in stats.file_types.by_count_desc() {
        md.push_str(&format!("| {category} | {count} |\n"));
    }
    md.push('\n');

    // Naming patterns
    md.push_str("### Naming Patterns Detected\n\n");
    md.push_str("| Pattern | Count | Format Example |\n");
    md.push_str("|---------|-------|----------------|\n");
    for (pattern, count) in stats.patterns_found.by_count_desc() {
        md.push_str(&format!("| {pattern} | {count} | `{}` |\n", pattern.display_example()));
    }
    md.push_str("\n---\n\n");

    // Tree
    md.push_str("## Folder Structure\n\n");
    md.push_str("```\n");
    md.push_str(&render_tree(structure));
    md.push_str("\n```\n\n---\n\n");

    // Per-folder details
    md.push_str("## Detailed Folder Contents\n\n");
    for (path, info) in &structure.folders {
        render_folder(&mut md, path, info);
    }

    md.push_str("---\n\n");
    md.push_str(USAGE_SECTION);
    md
}

fn render_folder(md: &mut String, path: &str, info: &FolderInfo) {
    let display_path = if path == ROOT_KEY { "(root)" } else { path };
    md.push_str(&format!("### 📁 `{display_path}`\n\n"));

    if info.files.is_empty() {
        md.push_str("*Empty folder or contains only subfolders*\n");
    } else {
        md.push_str("| Redacted Name | Pattern | Type |\n");
        md.push_str("|---------------|---------|------|\n");

        let selection = select_samples(&info.files);
        for file in &selection.shown {
            md.push_str(&format!(
                "| `{}` | {} | {} |\n",
                file.redacted_name, file.pattern, file.category
            ));
        }
        if selection.remaining > 0 {
            md.push_str(&format!("\n*...and {} more files*\n", selection.remaining));
        }
    }

    md.push('\n');
}
