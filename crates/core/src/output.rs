//! Writing rendered reports to disk.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output directory {0}: {1}")]
    CreateDir(String, #[source] std::io::Error),

    #[error("failed to write report {0}: {1}")]
    Write(String, #[source] std::io::Error),
}

/// Write `content` as UTF-8 to `path`, creating parent directories and
/// overwriting any existing file.
pub fn write_report(path: &Path, content: &str) -> Result<(), OutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| OutputError::CreateDir(parent.display().to_string(), e))?;
    }

    fs::write(path, content)
        .map_err(|e| OutputError::Write(path.display().to_string(), e))?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
