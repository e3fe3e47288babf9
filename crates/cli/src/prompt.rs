//! Interactive setup for choosing the vault and output paths.
//!
//! Used when the command line names neither a config file nor paths and
//! stdin is a terminal. The user can either point at an existing JSON config
//! or type both paths, optionally saving them as a config for next time.

use dialoguer::{Input, Select, theme::ColorfulTheme};
use mdindex_core::config::loader::expand_path;
use mdindex_core::config::{ConfigError, ConfigFile, ConfigLoader, ResolvedConfig};
use std::io;
use std::path::Path;

/// Error type for interactive setup.
#[derive(Debug)]
pub enum PromptError {
    /// The chosen or entered configuration is unusable.
    Config(ConfigError),
    /// IO error during prompting.
    Io(io::Error),
    /// User cancelled input.
    Cancelled,
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Config(e) => write!(f, "{e}"),
            PromptError::Io(e) => write!(f, "IO error: {e}"),
            PromptError::Cancelled => write!(f, "input cancelled by user"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

impl From<ConfigError> for PromptError {
    fn from(e: ConfigError) -> Self {
        PromptError::Config(e)
    }
}

/// Ask the user where the vault is and where the index should go.
pub fn interactive_setup() -> Result<ResolvedConfig, PromptError> {
    let theme = ColorfulTheme::default();

    eprintln!("Vault Indexer Setup");
    eprintln!("========================================");

    let choice = Select::with_theme(&theme)
        .with_prompt("Choose configuration method")
        .items(&["Use a config file", "Enter paths manually"])
        .default(0)
        .interact()
        .map_err(dialoguer_error_to_prompt_error)?;

    if choice == 0 {
        let entered: String = Input::with_theme(&theme)
            .with_prompt("Path to config file")
            .interact_text()
            .map_err(dialoguer_error_to_prompt_error)?;

        let path = expand_path(entered.trim())?;
        if !path.exists() {
            eprintln!("Create a config file with this structure:");
            eprintln!("{}", example_config());
        }
        return Ok(ConfigLoader::load(&path)?);
    }

    eprintln!("  Example: ~/Library/Mobile Documents/iCloud~md~obsidian/Documents/MyVault");
    let vault: String = Input::with_theme(&theme)
        .with_prompt("Vault path")
        .interact_text()
        .map_err(dialoguer_error_to_prompt_error)?;

    eprintln!("  Example: ~/Documents/vault_index.md");
    let output: String = Input::with_theme(&theme)
        .with_prompt("Output path")
        .interact_text()
        .map_err(dialoguer_error_to_prompt_error)?;

    let (vault, output) = (vault.trim(), output.trim());
    let resolved = ConfigLoader::from_paths(vault, output)?;

    let save: String = Input::with_theme(&theme)
        .with_prompt("Save these paths to a config file? (filename, empty to skip)")
        .allow_empty(true)
        .interact_text()
        .map_err(dialoguer_error_to_prompt_error)?;

    if !save.trim().is_empty() {
        let written = ConfigFile::new(vault, output).save(Path::new(save.trim()))?;
        eprintln!("  Config saved to: {}", written.display());
        eprintln!("  Next time run: mdindex --config {}", written.display());
    }

    Ok(resolved)
}

/// Sample config shown when the named file is missing.
pub fn example_config() -> String {
    let example = ConfigFile::new(
        "/path/to/your/obsidian/vault",
        "/path/to/output/vault_index.md",
    );
    serde_json::to_string_pretty(&example).unwrap_or_default()
}

/// Convert dialoguer error to our PromptError.
fn dialoguer_error_to_prompt_error(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(io_err) => {
            if io_err.kind() == io::ErrorKind::UnexpectedEof {
                PromptError::Cancelled
            } else {
                PromptError::Io(io_err)
            }
        }
    }
}
