//! CLI command definitions

use clap::{Parser, ValueEnum};
use nationsense_domain::ViewMode;
use std::path::PathBuf;

/// View to print in one-shot mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ViewArg {
    /// Factual profile
    #[default]
    Profile,
    /// Cultural narrative
    Insight,
    /// Generated image (saved to disk)
    Vision,
    /// Converse with the animal, one stdin line per turn
    Chat,
}

impl From<ViewArg> for ViewMode {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Profile => ViewMode::Profile,
            ViewArg::Insight => ViewMode::Insight,
            ViewArg::Vision => ViewMode::Vision,
            ViewArg::Chat => ViewMode::Chat,
        }
    }
}

/// CLI arguments for nationsense
#[derive(Parser, Debug)]
#[command(name = "nationsense")]
#[command(author, version, about = "Discover the national animal of any country")]
#[command(long_about = r#"
NationSense looks up a country's national animal and shows it four ways:
Reality (profile), Sixth Sense (cultural insight), Vision (generated image)
and Commune (chat with the animal's spirit).

Without a COUNTRY the interactive terminal UI starts. With a COUNTRY one
view is printed and the program exits.

The Gemini API key is read from API_KEY (or GEMINI_API_KEY).

Configuration files are loaded from (in priority order):
1. NATIONSENSE_* environment variables
2. --config <path>         Explicit config file
3. ./nationsense.toml      Project-level config
4. ~/.config/nationsense/config.toml   Global config

Example:
  nationsense
  nationsense Japan
  nationsense Kenya --view insight
  echo "What do you hunt?" | nationsense India --view chat
"#)]
pub struct Cli {
    /// Country to look up (starts the TUI when omitted)
    pub country: Option<String>,

    /// View to print in one-shot mode
    #[arg(long, value_enum, default_value = "profile")]
    pub view: ViewArg,

    /// Print JSON instead of formatted text
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}
