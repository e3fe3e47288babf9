mod cmd;
mod logging;
mod prompt;

use clap::Parser;
use mdindex_core::config::{
    ConfigError, ConfigFile, ConfigLoader, ResolvedConfig, default_config_path,
};
use mdindex_core::report::ReportFormat;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use cmd::index::IndexOptions;

const EXAMPLES: &str = "\
Examples:
  mdindex --config config.json
  mdindex --vault ~/MyVault --output ~/vault_index.md
  mdindex  (interactive mode)";

#[derive(Debug, Parser)]
#[command(
    name = "mdindex",
    version,
    about = "Create a privacy-safe structural index of an Obsidian vault",
    after_help = EXAMPLES
)]
struct Cli {
    /// Path to JSON config file containing vault_path and output_path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Path to the vault directory
    #[arg(short, long, value_name = "DIR")]
    vault: Option<String>,

    /// Path for the output index file
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Folder to leave out of the index, relative to the vault root (repeatable)
    #[arg(long, value_name = "DIR")]
    exclude: Vec<PathBuf>,

    /// Report format
    #[arg(long, default_value_t = ReportFormat::Markdown)]
    format: ReportFormat,

    /// Print file type and naming pattern tables after writing
    #[arg(long)]
    summary: bool,

    /// Save the resolved vault and output paths as a JSON config
    #[arg(long, value_name = "FILE")]
    save_config: Option<PathBuf>,

    /// Never prompt; fail when no configuration is available
    #[arg(long)]
    batch: bool,

    /// Log level for stderr (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Also write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let mut cfg = resolve_config(&cli);
    if let Some(level) = &cli.log_level {
        cfg.logging.level = level.clone();
    }
    if let Some(file) = &cli.log_file {
        cfg.logging.file = Some(file.clone());
    }
    let log = match logging::init(&cfg.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if let Some(path) = &cli.save_config
        && let Err(e) = save_config(&cfg, path)
    {
        eprintln!("Error: {e}");
        log.exit(1);
    }

    let opts = IndexOptions {
        exclude: cli.exclude.clone(),
        format: cli.format,
        summary: cli.summary,
    };
    if let Err(e) = cmd::index::run(&cfg, &opts) {
        eprintln!("Error: {e}");
        log.exit(1);
    }
}

/// Pick the configuration source: config file, flags, default config, or prompts.
fn resolve_config(cli: &Cli) -> ResolvedConfig {
    let result = match (&cli.config, &cli.vault, &cli.output) {
        (Some(path), _, _) => ConfigLoader::load(path),
        (None, Some(vault), Some(output)) => ConfigLoader::from_paths(vault, output),
        (None, Some(_), None) | (None, None, Some(_)) => {
            eprintln!("Error: Both --vault and --output are required when not using --config");
            eprintln!("{EXAMPLES}");
            process::exit(1);
        }
        (None, None, None) => {
            let default = default_config_path();
            if default.exists() {
                ConfigLoader::load(&default)
            } else if !cli.batch && io::stdin().is_terminal() {
                match prompt::interactive_setup() {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => {
                        eprintln!("Setup failed: {e}");
                        process::exit(1);
                    }
                }
            } else {
                eprintln!("Error: no vault configured");
                eprintln!("looked for: {}", default.display());
                eprintln!("{EXAMPLES}");
                process::exit(1);
            }
        }
    };

    match result {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            process::exit(1);
        }
    }
}

fn save_config(cfg: &ResolvedConfig, path: &Path) -> Result<(), ConfigError> {
    let file = ConfigFile::new(
        cfg.vault_path.to_string_lossy(),
        cfg.output_path.to_string_lossy(),
    );
    let written = file.save(path)?;
    println!("Config saved to: {}", written.display());
    println!("Next time run: mdindex --config {}", written.display());
    Ok(())
}
