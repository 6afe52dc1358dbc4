//! Alert configuration assembly for the demo.
//!
//! Responsibilities:
//! - Resolve the alert style from CLI flags, environment variables and the style file.
//! - Build the `AlertConfiguration` shown by the demo.
//!
//! Does NOT handle:
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - Style precedence: CLI args > env vars > style file > defaults.
//! - `load_dotenv()` is called before reading the environment.

use anyhow::{Context, Result};
use spark_alert_config::{AlertConfiguration, StyleLoader};

use crate::cli::Cli;

/// Build the alert configuration described by `cli`.
pub fn load_alert_configuration(cli: &Cli) -> Result<AlertConfiguration> {
    let mut loader = StyleLoader::new().load_dotenv()?;
    if let Some(path) = &cli.style_path {
        loader = loader.with_style_path(path.clone());
    }
    let mut loader = loader
        .from_file()
        .context("Failed to load style file")?
        .from_env()
        .context("Failed to read style from environment")?;
    if let Some(theme) = cli.theme {
        loader = loader.with_theme(theme);
    }

    let configuration =
        AlertConfiguration::new(&cli.title, &cli.message, cli.buttons.iter().cloned())
            .with_style(loader.build());
    configuration.validate()?;
    Ok(configuration)
}
