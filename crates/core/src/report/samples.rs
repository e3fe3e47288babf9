//! Per-folder example selection for the detail section.

use std::collections::HashSet;

use crate::vault::FileEntry;

/// Maximum example rows shown per folder.
pub const MAX_SAMPLES: usize = 5;

/// Files chosen as examples for one folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSelection<'a> {
    pub shown: Vec<&'a FileEntry>,
    /// Files left out of the listing.
    pub remaining: usize,
}

/// Pick example files for a folder.
///
/// The first file of every distinct pattern is taken first, then the
/// remaining slots up to [`MAX_SAMPLES`] are filled with further files in
/// encounter order. With more than [`MAX_SAMPLES`] patterns, the ones first
/// seen last are dropped. Shown files keep their encounter order.
pub fn select_samples(files: &[FileEntry]) -> SampleSelection<'_> {
    let mut seen = HashSet::new();
    let mut picked: Vec<usize> = files
        .iter()
        .enumerate()
        .filter(|(_, file)| seen.insert(file.pattern))
        .map(|(i, _)| i)
        .take(MAX_SAMPLES)
        .collect();

    let fill: Vec<usize> = (0..files.len())
        .filter(|i| !picked.contains(i))
        .take(MAX_SAMPLES - picked.len())
        .collect();
    picked.extend(fill);
    picked.sort_unstable();

    let shown: Vec<&FileEntry> = picked.iter().map(|&i| &files[i]).collect();
    let remaining = files.len() - shown.len();
    SampleSelection { shown, remaining }
}
