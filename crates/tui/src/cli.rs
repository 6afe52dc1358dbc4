//! Command-line argument parsing for spark-alert-demo.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//!
//! Does NOT handle:
//! - Style loading (see `runtime::config`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - Button order on the command line is the button index order.

use clap::Parser;
use spark_alert_config::ColorTheme;
use std::path::PathBuf;

/// Command-line arguments for spark-alert-demo.
///
/// Style precedence (highest to lowest):
/// 1. `--theme`
/// 2. Environment variables (e.g., SPARK_ALERT_THEME, SPARK_ALERT_BUTTON_COLOR)
/// 3. Style file (`--style-path` or the platform default)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "spark-alert-demo",
    about = "Show a modal alert in the terminal and print the chosen button",
    version,
    after_help = "Examples:\n  spark-alert-demo\n  spark-alert-demo --title 'Quit?' --message 'Unsaved changes will be lost' -b Stay -b Quit\n  spark-alert-demo --theme dark --no-mouse\n"
)]
pub struct Cli {
    /// Alert title
    #[arg(long, default_value = "Delete item?")]
    pub title: String,

    /// Alert message
    #[arg(long, default_value = "This cannot be undone")]
    pub message: String,

    /// Button label; repeat for each button, left to right
    #[arg(long = "button", short = 'b', default_values = ["Cancel", "Delete"])]
    pub buttons: Vec<String>,

    /// Color theme (default, dark, high_contrast, monochrome)
    #[arg(long)]
    pub theme: Option<ColorTheme>,

    /// Path to a JSON style file
    #[arg(long)]
    pub style_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,
}
