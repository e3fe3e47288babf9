//! Vault traversal and structural aggregation.
//!
//! This module walks a vault directory, classifies and redacts every file it
//! finds, and accumulates per-folder and vault-wide statistics.

pub mod model;
pub mod skip;
pub mod walker;

pub use model::{FileEntry, FolderInfo, ROOT_KEY, Stats, Tally, VaultStructure};
pub use skip::{DEFAULT_SKIP_PATTERNS, SkipList};
pub use walker::{ScanError, VaultWalker};

/// Scan a vault with the default skip list.
pub fn scan(root: &std::path::Path) -> Result<VaultStructure, ScanError> {
    VaultWalker::new(root)?.scan()
}
