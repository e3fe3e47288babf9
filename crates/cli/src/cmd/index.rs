//! The index run: scan, render, write.

use std::path::PathBuf;

use mdindex_core::config::ResolvedConfig;
use mdindex_core::output::{OutputError, write_report};
use mdindex_core::report::{self, ReportFormat};
use mdindex_core::vault::{ScanError, VaultWalker};
use tracing::debug;

use super::summary;

/// Options that shape one index run.
#[derive(Debug, Clone, Default)]
pub struct IndexOptions {
    /// Folders to leave out, relative to the vault root.
    pub exclude: Vec<PathBuf>,
    pub format: ReportFormat,
    /// Print breakdown tables after writing.
    pub summary: bool,
}

/// Fatal failure of an index run.
#[derive(Debug)]
pub enum IndexError {
    Scan(ScanError),
    Render(ReportFormat, serde_json::Error),
    Output(OutputError),
}

impl std::fmt::Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexError::Scan(ScanError::MissingRoot(path)) => {
                write!(f, "Vault path not found: {path}")
            }
            IndexError::Scan(e) => write!(f, "{e}"),
            IndexError::Render(format, e) => write!(f, "failed to render {format} report: {e}"),
            IndexError::Output(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for IndexError {}

impl From<ScanError> for IndexError {
    fn from(e: ScanError) -> Self {
        IndexError::Scan(e)
    }
}

impl From<OutputError> for IndexError {
    fn from(e: OutputError) -> Self {
        IndexError::Output(e)
    }
}

/// Run the index command: scan, render, write.
pub fn run(cfg: &ResolvedConfig, opts: &IndexOptions) -> Result<(), IndexError> {
    println!("Scanning vault: {}", cfg.vault_path.display());

    let structure =
        VaultWalker::new(&cfg.vault_path)?.with_exclusions(opts.exclude.clone()).scan()?;

    println!(
        "Found {} folders, {} files",
        structure.stats.total_folders, structure.stats.total_files
    );

    let rendered = report::render(&structure, opts.format)
        .map_err(|e| IndexError::Render(opts.format, e))?;
    debug!("Rendered {} report ({} bytes)", opts.format, rendered.len());

    write_report(&cfg.output_path, &rendered)?;

    if opts.summary {
        summary::print(&structure);
    }

    println!("Index saved to: {}", cfg.output_path.display());
    Ok(())
}
