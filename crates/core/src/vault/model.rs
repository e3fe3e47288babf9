//! Structural model produced by a vault scan.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};

use crate::category::{FileCategory, categorize};
use crate::naming::{PatternType, classify, redact, split_name};

/// Folder key used for the vault root itself.
pub const ROOT_KEY: &str = "/";

/// One scanned file, already redacted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub redacted_name: String,
    pub pattern: PatternType,
    #[serde(rename = "type")]
    pub category: FileCategory,
    /// Original extension including the dot; extensions are not identifying.
    pub extension: String,
}

impl FileEntry {
    /// Classify, categorise and redact a raw file name.
    pub fn from_filename(filename: &str) -> Self {
        let (pattern, _) = classify(filename);
        let category = categorize(filename);
        let redacted_name = redact(filename, pattern);
        let (_, ext) = split_name(filename);

        Self { redacted_name, pattern, category, extension: ext.to_string() }
    }
}

/// One directory of the vault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FolderInfo {
    pub file_count: usize,
    /// Immediate, non-excluded subdirectories.
    pub subfolder_count: usize,
    /// Distance from the vault root (root = 0).
    pub depth: usize,
    pub files: Vec<FileEntry>,
}

impl FolderInfo {
    pub fn new(depth: usize) -> Self {
        Self { depth, ..Self::default() }
    }

    pub(crate) fn push(&mut self, entry: FileEntry) {
        self.files.push(entry);
        self.file_count = self.files.len();
    }

    /// A folder is only reported if it holds files or subfolders.
    pub fn is_empty(&self) -> bool {
        self.file_count == 0 && self.subfolder_count == 0
    }
}

/// Counter that remembers first-seen order, used as the tie-break when
/// sorting by count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally<K> {
    entries: Vec<(K, usize)>,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<K: PartialEq + Copy> Tally<K> {
    pub fn increment(&mut self, key: K) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((key, 1)),
        }
    }

    pub fn get(&self, key: K) -> usize {
        self.entries.iter().find(|(k, _)| *k == key).map_or(0, |(_, count)| *count)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (K, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Entries by descending count; equal counts keep first-seen order.
    pub fn by_count_desc(&self) -> Vec<(K, usize)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Serialize> Serialize for Tally<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}

/// Vault-wide counters, accumulated during the walk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Recorded folders, excluding the root.
    pub total_folders: usize,
    pub total_files: usize,
    pub file_types: Tally<FileCategory>,
    pub patterns_found: Tally<PatternType>,
    pub depth_max: usize,
}

impl Stats {
    pub(crate) fn record_file(&mut self, entry: &FileEntry) {
        self.file_types.increment(entry.category);
        self.patterns_found.increment(entry.pattern);
        self.total_files += 1;
    }
}

/// Result of scanning a vault.
#[derive(Debug, Clone, Serialize)]
pub struct VaultStructure {
    /// Real name of the vault directory; folder names are not redacted.
    pub root: String,
    pub scanned_at: DateTime<Local>,
    /// Folders keyed by `/`-separated path relative to the root
    /// ([`ROOT_KEY`] for the root itself).
    pub folders: BTreeMap<String, FolderInfo>,
    pub stats: Stats,
}

impl VaultStructure {
    pub fn new(root: impl Into<String>, scanned_at: DateTime<Local>) -> Self {
        Self { root: root.into(), scanned_at, folders: BTreeMap::new(), stats: Stats::default() }
    }
}
