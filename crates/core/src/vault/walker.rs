//! Recursive vault walker that aggregates the structural model.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use chrono::Local;
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use super::model::{FileEntry, FolderInfo, ROOT_KEY, Stats, VaultStructure};
use super::skip::SkipList;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("vault root does not exist: {0}")]
    MissingRoot(String),

    #[error("vault root is not a directory: {0}")]
    NotADirectory(String),

    #[error("failed to read vault root {0}: {1}")]
    UnreadableRoot(String, #[source] io::Error),
}

/// Walker that turns a vault directory into a [`VaultStructure`].
#[derive(Debug)]
pub struct VaultWalker {
    root: PathBuf,
    skip: SkipList,
    /// Folders to exclude from walking (relative paths from vault root).
    excluded_folders: Vec<PathBuf>,
}

impl VaultWalker {
    /// Create a new walker for the given vault root with the default skip list.
    pub fn new(root: &Path) -> Result<Self, ScanError> {
        let root = root.canonicalize().map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ScanError::MissingRoot(root.display().to_string()),
            _ => ScanError::UnreadableRoot(root.display().to_string(), e),
        })?;

        if !root.is_dir() {
            return Err(ScanError::NotADirectory(root.display().to_string()));
        }

        Ok(Self { root, skip: SkipList::default(), excluded_folders: Vec::new() })
    }

    pub fn with_skip_list(mut self, skip: SkipList) -> Self {
        self.skip = skip;
        self
    }

    /// Add folder exclusions.
    ///
    /// Excluded folders can be specified as:
    /// - Relative paths from vault root (e.g., "Archive/2019")
    /// - Absolute paths inside the vault (will be converted to relative)
    ///
    /// `.` components are dropped; an exclusion naming the root itself is
    /// ignored.
    pub fn with_exclusions(mut self, excluded_folders: Vec<PathBuf>) -> Self {
        let root = &self.root;
        self.excluded_folders = excluded_folders
            .into_iter()
            .map(|p| {
                let p = if p.is_absolute() {
                    let p = p.canonicalize().unwrap_or(p);
                    p.strip_prefix(root).map(Path::to_path_buf).unwrap_or(p)
                } else {
                    p
                };
                p.components()
                    .filter(|c| !matches!(c, Component::CurDir))
                    .collect::<PathBuf>()
            })
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        self
    }

    /// Get the vault root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the vault and aggregate per-folder and vault-wide statistics.
    ///
    /// Entries that cannot be read below the root are logged and treated as
    /// empty. Only a failure to list the root itself is an error.
    pub fn scan(&self) -> Result<VaultStructure, ScanError> {
        fs::read_dir(&self.root)
            .map_err(|e| ScanError::UnreadableRoot(self.root.display().to_string(), e))?;

        let root_name = self.root.file_name().map_or_else(
            || self.root.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );

        let mut folders: BTreeMap<String, FolderInfo> = BTreeMap::new();
        let mut stats = Stats::default();

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map_or_else(
                        || self.root.display().to_string(),
                        |p| p.display().to_string(),
                    );
                    warn!("Skipping unreadable entry {}: {}", path, e);
                    continue;
                }
            };

            let depth = entry.depth();

            if entry.file_type().is_dir() {
                stats.depth_max = stats.depth_max.max(depth);
                folders
                    .entry(self.folder_key(entry.path()))
                    .or_insert_with(|| FolderInfo::new(depth));
                if depth > 0 {
                    self.parent_of(&entry, &mut folders).subfolder_count += 1;
                }
                continue;
            }

            // Symlinked directories count as subfolders but are not followed.
            if entry.path_is_symlink() && entry.path().is_dir() {
                self.parent_of(&entry, &mut folders).subfolder_count += 1;
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            let file = FileEntry::from_filename(&name);
            stats.record_file(&file);
            self.parent_of(&entry, &mut folders).push(file);
        }

        folders.retain(|_, folder| !folder.is_empty());
        stats.total_folders = folders.keys().filter(|k| k.as_str() != ROOT_KEY).count();

        for (key, folder) in &folders {
            debug!(
                "Folder {}: {} files, {} subfolders, depth {}",
                key, folder.file_count, folder.subfolder_count, folder.depth
            );
        }
        info!(
            "Scanned {}: {} folders, {} files, max depth {}",
            root_name, stats.total_folders, stats.total_files, stats.depth_max
        );

        let mut structure = VaultStructure::new(root_name, Local::now());
        structure.folders = folders;
        structure.stats = stats;
        Ok(structure)
    }

    /// Folder record for the directory containing `entry` (depth >= 1).
    fn parent_of<'a>(
        &self,
        entry: &DirEntry,
        folders: &'a mut BTreeMap<String, FolderInfo>,
    ) -> &'a mut FolderInfo {
        let parent = entry.path().parent().unwrap_or(&self.root);
        let depth = entry.depth().saturating_sub(1);
        folders.entry(self.folder_key(parent)).or_insert_with(|| FolderInfo::new(depth))
    }

    /// `/`-joined path relative to the root, or [`ROOT_KEY`] for the root.
    fn folder_key(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let parts: Vec<_> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect();

        if parts.is_empty() { ROOT_KEY.to_string() } else { parts.join("/") }
    }

    /// Check if an entry should be excluded from walking.
    fn is_excluded(&self, entry: &DirEntry) -> bool {
        // Never filter the root directory (depth 0)
        if entry.depth() == 0 {
            return false;
        }

        if self.skip.is_skipped(&entry.file_name().to_string_lossy()) {
            return true;
        }

        if !self.excluded_folders.is_empty()
            && let Ok(relative) = entry.path().strip_prefix(&self.root)
        {
            return self
                .excluded_folders
                .iter()
                .any(|excluded| relative.starts_with(excluded));
        }

        false
    }
}
