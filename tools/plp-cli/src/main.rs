//! plp - render storefront product list views from catalog payloads.
//!
//! Commands:
//! - `plp render` - Render payload files to list markup
//! - `plp counts` - Show item group / brand counts for a payload
//! - `plp config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{ConfigArgs, CountsArgs, RenderArgs};

/// Render storefront product list views
#[derive(Parser)]
#[command(name = "plp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render payload files into list view markup
    Render(RenderArgs),

    /// Show facet counts for a payload
    Counts(CountsArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Library events go to stderr; `PLP_LOG` overrides the level.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("PLP_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    // `config init` must work even when the existing file no longer parses.
    let replaces_config = matches!(
        &cli.command,
        Commands::Config(commands::ConfigArgs {
            command: commands::ConfigCommand::Init { .. },
        })
    );
    let ctx = if replaces_config {
        context::Context::without_config(output)?
    } else {
        context::Context::load(cli.config.as_deref(), output)?
    };

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &ctx).await,
        Commands::Counts(args) => commands::counts::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
