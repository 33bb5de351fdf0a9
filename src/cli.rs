//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};
use promptline::build_info;

/// Interactive question prompts for the terminal, one answer per line on stdout.
#[derive(Debug, Parser)]
#[command(name = "promptline", version, after_help = build_info::HELP_BUILD_METADATA)]
pub struct Args {
    /// Path to config file (default: ./promptline.toml or
    /// ~/.config/promptline/promptline.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Override the visible window height, in rendered lines.
    #[arg(long = "page-size", global = true)]
    pub page_size: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pick one entry from a list of choices.
    Select {
        /// Question shown above the list.
        message: String,

        /// A selectable choice; repeat the flag to build the list.
        #[arg(long = "choice", value_name = "VALUE")]
        choice: Vec<String>,

        /// JSON array of choices, bare strings or
        /// `{"name", "value", "disabled"}` records.
        #[arg(long = "choices-json", value_name = "JSON", conflicts_with = "choice")]
        choices_json: Option<String>,

        /// Pre-select the choice carrying this value.
        #[arg(long = "default", value_name = "VALUE")]
        default: Option<String>,

        /// Pre-select by position in the selectable list (0-based).
        #[arg(long = "default-index", value_name = "N", conflicts_with = "default")]
        default_index: Option<usize>,
    },

    /// Ask for a free-text answer.
    Input {
        /// Question shown before the input line.
        message: String,

        /// Strip surrounding whitespace from the answer.
        #[arg(long = "trim")]
        trim: bool,

        /// Re-ask until the answer is non-empty.
        #[arg(long = "required")]
        required: bool,
    },
}
