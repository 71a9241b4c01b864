//! CLI command implementations.

pub mod config;
pub mod counts;
pub mod render;

use clap::{Args, Subcommand};

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Payload files (catalog filter responses as JSON).
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Write `<name>.html` files here instead of printing markup.
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Override the view preference (e.g. "List View", "Grid View").
    #[arg(short, long)]
    pub preference: Option<String>,

    /// Path to a JSON array of filter label keys present on the page.
    #[arg(short, long)]
    pub labels: Option<String>,

    /// Fail when a count has no matching filter label.
    #[arg(long)]
    pub strict_labels: bool,

    /// Wrap rows in the container element.
    #[arg(short, long)]
    pub wrap: bool,

    /// Write a JSON render report to this file.
    #[arg(short, long)]
    pub report: Option<String>,

    /// Overwrite existing output files without asking.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the counts command.
#[derive(Args)]
pub struct CountsArgs {
    /// Payload file.
    pub input: String,

    /// Tally from the items even when the payload carries counts.
    #[arg(long)]
    pub recount: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
