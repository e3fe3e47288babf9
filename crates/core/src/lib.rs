//! Privacy-safe structural indexes of markdown vaults.
//!
//! A vault is walked once; every file name is classified by shape, redacted
//! and categorised, and the results are aggregated per folder. The resulting
//! [`vault::VaultStructure`] is rendered as Markdown (or JSON) without ever
//! exposing a real file name or reading file contents.

#![deny(clippy::all)]

pub mod category;
pub mod config;
pub mod naming;
pub mod output;
pub mod report;
pub mod vault;

pub use category::{FileCategory, categorize};
pub use naming::{PatternType, classify, redact};
pub use report::{ReportFormat, render_markdown};
pub use vault::{ScanError, VaultStructure, VaultWalker, scan};
