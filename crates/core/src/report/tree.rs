//! Indented folder tree.

use crate::vault::{ROOT_KEY, VaultStructure};

/// Render the folder hierarchy (folders only, no files).
///
/// Folders are listed in path order compared component by component, so a
/// folder's children always follow it directly. Each level below the top is
/// indented four spaces.
pub fn render_tree(structure: &VaultStructure) -> String {
    let mut lines = vec![format!("📁 {}/", structure.root)];

    let mut folders: Vec<_> =
        structure.folders.iter().filter(|(path, _)| path.as_str() != ROOT_KEY).collect();
    folders.sort_by(|(a, _), (b, _)| a.split('/').cmp(b.split('/')));

    for (path, info) in folders {
        let parts: Vec<&str> = path.split('/').collect();
        let indent = "    ".repeat(parts.len() - 1);
        let name = parts[parts.len() - 1];

        let line = if info.file_count > 0 {
            format!("{indent}├── 📁 {name}/ ({} files)", info.file_count)
        } else {
            format!("{indent}├── 📁 {name}/")
        };
        lines.push(line);
    }

    lines.join("\n")
}
