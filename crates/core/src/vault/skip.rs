//! Names excluded from a vault scan.

/// Obsidian internals and tooling directories never indexed.
pub const DEFAULT_SKIP_PATTERNS: &[&str] =
    &[".obsidian", ".trash", ".git", ".DS_Store", "node_modules"];

/// Exact names to skip, plus the hidden-file rule (leading `.`).
///
/// Applies to directories and files alike. A skipped directory is never
/// descended into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipList {
    names: Vec<String>,
    skip_hidden: bool,
}

impl SkipList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { names: names.into_iter().map(Into::into).collect(), skip_hidden: true }
    }

    /// Keep dot-prefixed entries unless they are named explicitly.
    pub fn include_hidden(mut self) -> Self {
        self.skip_hidden = false;
        self
    }

    pub fn is_skipped(&self, name: &str) -> bool {
        (self.skip_hidden && name.starts_with('.')) || self.names.iter().any(|n| n == name)
    }
}

impl Default for SkipList {
    fn default() -> Self {
        Self::new(DEFAULT_SKIP_PATTERNS.iter().copied())
    }
}
